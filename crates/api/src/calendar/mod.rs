mod get_calendar;

use actix_web::web;
use get_calendar::get_calendar_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/calendar", web::get().to(get_calendar_controller));
}
