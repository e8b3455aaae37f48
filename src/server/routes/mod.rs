//! HTTP route modules

pub mod audio;

use crate::server::handlers;
use actix_web::web;

/// `/audio` in any letter case
pub const AUDIO_ROUTE: &str = "/{endpoint:(?i)audio}";

/// Configure the relay routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource(AUDIO_ROUTE)
            .route(web::post().to(audio::relay_audio))
            .default_service(web::to(handlers::method_not_allowed)),
    );
}
