use actix_web::middleware::{Logger, NormalizePath};
use actix_web::web::Data;
use actix_web::{App, HttpServer};

use hrms_lite::{Config, HttpGateway, Pages, routes};
use tracing::{error, info};
use tracing_appender::rolling;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;

    // Rolling daily log
    let file_appender = rolling::daily(&config.log_dir, "app.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .with_target(false)
        .with_level(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .pretty()
        .init();

    info!(
        addr = %config.server_addr,
        backend = %config.api_url,
        "Server starting..."
    );

    let gateway = Data::new(HttpGateway::new(config.api_url.clone()));
    let pages = Data::new(Pages::new(config.page_idle));

    let server = HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(NormalizePath::trim())
            .app_data(gateway.clone())
            .app_data(pages.clone())
            .configure(routes::configure::<HttpGateway>)
    })
    .bind(&config.server_addr)
    .inspect_err(|e| error!(error = %e, addr = %config.server_addr, "Failed to bind"))?;

    server.run().await?;
    info!("Server stopped");
    Ok(())
}
