mod expand_events;
mod get_event_occurrences;

use actix_web::web;
use expand_events::expand_events_controller;
use get_event_occurrences::get_event_occurrences_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/events/expand", web::post().to(expand_events_controller));
    cfg.route(
        "/events/{event_id}/occurrences",
        web::get().to(get_event_occurrences_controller),
    );
}
