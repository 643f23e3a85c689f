pub mod note;

pub use note::{CreateNoteRequest, Note, CREATED_AT_FORMAT, DEFAULT_CATEGORY};
