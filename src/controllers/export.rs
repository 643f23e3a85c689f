//! Plain-text export download.

use actix_web::http::header::{ContentDisposition, DispositionParam, DispositionType};
use actix_web::{web, HttpResponse, Responder};

use crate::export::render_report;
use crate::AppState;

const EXPORT_FILENAME: &str = "notes_backup.txt";

/// Serve the full note collection as a downloadable text report.
async fn export_notes(data: web::Data<AppState>) -> impl Responder {
    let notes = match data.db.list_notes() {
        Ok(notes) => notes,
        Err(e) => {
            log::error!("Failed to load notes for export: {}", e);
            return HttpResponse::InternalServerError().json(serde_json::json!({
                "error": format!("Database error: {}", e)
            }));
        }
    };

    let report = render_report(&notes);

    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .insert_header(ContentDisposition {
            disposition: DispositionType::Attachment,
            parameters: vec![DispositionParam::Filename(EXPORT_FILENAME.to_string())],
        })
        .body(report)
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/export").route(web::get().to(export_notes)));
}
