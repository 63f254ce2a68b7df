pub mod availability;
pub mod bookings;
pub mod today;

use actix_web::web;

pub fn init(cfg: &mut web::ServiceConfig) {
    cfg.configure(today::init)
        .configure(availability::init)
        .configure(bookings::init);
}
