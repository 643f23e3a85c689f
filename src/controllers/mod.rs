pub mod export;
pub mod health;
pub mod notes;
