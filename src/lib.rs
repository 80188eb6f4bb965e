//! HRMS Lite web front end: server-rendered Employees and Attendance
//! screens over the HRMS REST backend.

pub mod components;
pub mod config;
pub mod gateway;
pub mod model;
pub mod pages;
pub mod routes;
pub mod ui;
pub mod utils;

pub use config::Config;
pub use gateway::{Gateway, HttpGateway};
pub use pages::Pages;
