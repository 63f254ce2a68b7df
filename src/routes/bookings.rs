use actix_web::{HttpResponse, Responder, get, post, web};
use serde::Serialize;

use crate::models::booking::{BookingDraft, BookingRecord, FieldError};
use crate::service::{BookingOutcome, BookingService};

#[derive(Serialize)]
struct BookingsResponse {
    bookings: Vec<BookingRecord>,
}

#[derive(Serialize)]
struct BookingRejection {
    error: bool,
    message: &'static str,
    #[serde(rename = "fieldErrors", skip_serializing_if = "Option::is_none")]
    field_errors: Option<Vec<FieldError>>,
}

#[get("/bookings")]
async fn list(service: web::Data<BookingService>) -> impl Responder {
    HttpResponse::Ok().json(BookingsResponse {
        bookings: service.list_bookings(),
    })
}

#[post("/bookings")]
async fn create(
    service: web::Data<BookingService>,
    body: web::Json<BookingDraft>,
) -> impl Responder {
    match service.create_booking(body.into_inner()).await {
        Ok(BookingOutcome::Created(record)) => HttpResponse::Created().json(record),
        Ok(BookingOutcome::FieldErrors(field_errors)) => HttpResponse::Ok().json(BookingRejection {
            error: true,
            message: "Field errors",
            field_errors: Some(field_errors),
        }),
        Ok(BookingOutcome::Unavailable) => HttpResponse::Ok().json(BookingRejection {
            error: true,
            message: "Booking unavailable",
            field_errors: None,
        }),
        Err(e) => {
            tracing::error!("booking rejected, availability refresh failed: {e}");
            HttpResponse::InternalServerError().body("API Error.")
        }
    }
}

pub fn init(cfg: &mut web::ServiceConfig) {
    cfg.service(list).service(create);
}
