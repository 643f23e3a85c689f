use actix_web::{web, HttpResponse, Responder};

/// Version from Cargo.toml, available at compile time
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/").route(web::get().to(index)));
}

/// Static status payload naming the functional endpoint groups.
async fn index() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "ok",
        "msg": format!(
            "memopad-backend v{} is running. Endpoints: /notes, /export",
            VERSION
        )
    }))
}
