pub mod page_store;
pub mod scope;
