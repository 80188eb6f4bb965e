#![allow(dead_code)]

use actix_web::dev::ServiceResponse;
use actix_web::http::header;
use actix_web::test::TestRequest;

/// Builds the UI service over an `InMemoryGateway` and a fresh page store.
macro_rules! ui_app {
    ($gateway:expr) => {{
        let gateway = actix_web::web::Data::new($gateway);
        let pages = actix_web::web::Data::new(hrms_lite::Pages::new(
            std::time::Duration::from_secs(60),
        ));
        let app = actix_web::test::init_service(
            actix_web::App::new()
                .app_data(gateway.clone())
                .app_data(pages)
                .configure(
                    hrms_lite::routes::configure::<hrms_lite::gateway::memory::InMemoryGateway>,
                ),
        )
        .await;
        (app, gateway)
    }};
}
pub(crate) use ui_app;

pub fn get(uri: &str) -> TestRequest {
    TestRequest::get().uri(uri)
}

pub fn post_form(uri: &str, fields: &[(&str, &str)]) -> TestRequest {
    TestRequest::post().uri(uri).set_form(fields)
}

/// `Location` of a redirect.
pub fn location<B>(resp: &ServiceResponse<B>) -> String {
    resp.headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string()
}

/// Page session id carried by the hidden `session` field.
pub fn session_of(html: &str) -> String {
    let marker = "name=\"session\" value=\"";
    let start = html.find(marker).expect("page has a session field") + marker.len();
    let len = html[start..].find('"').expect("closing quote");
    html[start..start + len].to_string()
}

pub fn page_uri(path: &str, session: &str) -> String {
    format!("{path}?session={session}")
}
