use crate::app::App;
use crate::config::PortalConfig;
use crate::router::handle;
use anyhow::Context;
use astra::Server;

mod app;
mod auth;
mod config;
mod errors;
mod logging;
mod releases;
mod responses;
mod router;
mod templates;


fn main() -> anyhow::Result<()> {
    logging::init_logging();

    let config = PortalConfig::load()?;
    let addr = config.bind_addr;
    let workers = config.max_workers;
    let app = App::from_config(config)?;

    tracing::info!("Starting server at http://{addr}");

    let server = Server::bind(&addr).max_workers(workers);

    let result = server.serve(move |req, _info| match handle(req, &app) {
        Ok(resp) => resp,
        Err(err) => {
            tracing::warn!(error = %err, "request failed");
            responses::html_error_response(err)
        }
    });

    result.context("server ended with error")?;

    tracing::info!("Server shut down cleanly.");
    Ok(())
}
