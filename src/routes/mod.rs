// Route exports
pub mod predict;

use actix_web::web;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/api").configure(predict::configure));
}
