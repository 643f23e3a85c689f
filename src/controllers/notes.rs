//! Notes REST API — create, list, and delete.

use actix_web::{web, HttpResponse, Responder};

use crate::models::CreateNoteRequest;
use crate::AppState;

/// List all notes in insertion order
async fn list_notes(data: web::Data<AppState>) -> impl Responder {
    match data.db.list_notes() {
        Ok(notes) => HttpResponse::Ok().json(notes),
        Err(e) => {
            log::error!("Failed to list notes: {}", e);
            HttpResponse::InternalServerError().json(serde_json::json!({
                "error": format!("Database error: {}", e)
            }))
        }
    }
}

/// Create a note. The store assigns the id and creation timestamp.
async fn create_note(
    data: web::Data<AppState>,
    body: web::Json<CreateNoteRequest>,
) -> impl Responder {
    match data
        .db
        .create_note(&body.title, &body.content, body.category.as_deref())
    {
        Ok(note) => HttpResponse::Ok().json(note),
        Err(e) => {
            log::error!("Failed to create note: {}", e);
            HttpResponse::InternalServerError().json(serde_json::json!({
                "error": format!("Database error: {}", e)
            }))
        }
    }
}

/// Delete a note by id
async fn delete_note(data: web::Data<AppState>, path: web::Path<i64>) -> impl Responder {
    let note_id = path.into_inner();

    match data.db.delete_note(note_id) {
        Ok(true) => HttpResponse::Ok().json(serde_json::json!({
            "status": "deleted"
        })),
        Ok(false) => HttpResponse::NotFound().json(serde_json::json!({
            "error": "Note not found"
        })),
        Err(e) => {
            log::error!("Failed to delete note {}: {}", note_id, e);
            HttpResponse::InternalServerError().json(serde_json::json!({
                "error": format!("Database error: {}", e)
            }))
        }
    }
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/notes")
            .route("/", web::get().to(list_notes))
            .route("/", web::post().to(create_note))
            .route("/{id}", web::delete().to(delete_note)),
    );
}
