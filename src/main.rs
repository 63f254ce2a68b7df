use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{App, HttpServer, web};
use anyhow::Context;
use dotenv::dotenv;
use tracing::info;
use url::Url;

use advisor_booking_backend::routes;
use advisor_booking_backend::service::BookingService;
use advisor_booking_backend::upstream::{DEFAULT_AVAILABILITY_URL, HttpAvailabilitySource};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    dotenv().ok();

    let bind = std::env::var("BOOKING_BIND").unwrap_or_else(|_| "0.0.0.0".into());
    let port: u16 = std::env::var("BOOKING_PORT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(8080);
    let upstream_url =
        std::env::var("AVAILABILITY_URL").unwrap_or_else(|_| DEFAULT_AVAILABILITY_URL.into());
    let upstream_url = Url::parse(&upstream_url)
        .with_context(|| format!("invalid AVAILABILITY_URL: {upstream_url}"))?;

    let service = web::Data::new(BookingService::new(Arc::new(HttpAvailabilitySource::new(
        upstream_url.clone(),
    ))));

    info!("booking backend listening on {bind}:{port}");
    info!("  availability upstream: {upstream_url}");

    HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .app_data(service.clone())
            .configure(routes::init)
    })
    .bind((bind.as_str(), port))?
    .run()
    .await?;

    Ok(())
}
