use actix_web::{HttpResponse, Responder, get, web};
use chrono::Local;
use serde::Serialize;

#[derive(Serialize)]
struct TodayResponse {
    today: String,
}

#[get("/today")]
async fn today() -> impl Responder {
    // en-US short date, e.g. "4/3/2019".
    HttpResponse::Ok().json(TodayResponse {
        today: Local::now().format("%-m/%-d/%Y").to_string(),
    })
}

pub fn init(cfg: &mut web::ServiceConfig) {
    cfg.service(today);
}
