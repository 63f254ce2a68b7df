use actix_web::{HttpResponse, Responder, get, web};
use serde::Serialize;

use crate::models::availability::AdvisorAvailability;
use crate::service::BookingService;

#[derive(Serialize)]
struct AvailabilityResponse {
    availability: Vec<AdvisorAvailability>,
}

#[get("/availability")]
async fn availability(service: web::Data<BookingService>) -> impl Responder {
    match service.get_availability().await {
        Ok(availability) => HttpResponse::Ok().json(AvailabilityResponse { availability }),
        Err(e) => {
            tracing::error!("availability fetch failed: {e}");
            HttpResponse::InternalServerError().body("API Error.")
        }
    }
}

pub fn init(cfg: &mut web::ServiceConfig) {
    cfg.service(availability);
}
