//! Note table operations (create, list, delete)

use chrono::Local;
use rusqlite::params;

use super::super::{Database, StoreError};
use crate::models::{Note, CREATED_AT_FORMAT, DEFAULT_CATEGORY};

impl Database {
    /// Insert a note and return it fully populated.
    ///
    /// The store assigns the id and stamps `created_at` from the local
    /// clock; an absent or empty category falls back to the default.
    /// Category defaulting happens here and nowhere else.
    pub fn create_note(
        &self,
        title: &str,
        content: &str,
        category: Option<&str>,
    ) -> Result<Note, StoreError> {
        let conn = self.conn()?;

        let category = match category {
            Some(c) if !c.is_empty() => c,
            _ => DEFAULT_CATEGORY,
        };
        let created_at = Local::now().format(CREATED_AT_FORMAT).to_string();

        conn.execute(
            "INSERT INTO notes (title, content, category, created_at)
             VALUES (?1, ?2, ?3, ?4)",
            params![title, content, category, created_at],
        )?;

        let id = conn.last_insert_rowid();

        Ok(Note {
            id,
            title: title.to_string(),
            content: content.to_string(),
            category: category.to_string(),
            created_at,
        })
    }

    /// List all notes in insertion order (ascending id).
    pub fn list_notes(&self) -> Result<Vec<Note>, StoreError> {
        let conn = self.conn()?;

        let mut stmt = conn.prepare(
            "SELECT id, title, content, category, created_at
             FROM notes ORDER BY id ASC",
        )?;

        let notes = stmt
            .query_map([], |row| Self::row_to_note(row))?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(notes)
    }

    /// Delete a note. Returns false when no row with that id exists,
    /// including a repeat delete of an already-removed id.
    pub fn delete_note(&self, id: i64) -> Result<bool, StoreError> {
        let conn = self.conn()?;
        let rows_affected = conn.execute("DELETE FROM notes WHERE id = ?1", [id])?;
        Ok(rows_affected > 0)
    }

    fn row_to_note(row: &rusqlite::Row) -> rusqlite::Result<Note> {
        Ok(Note {
            id: row.get(0)?,
            title: row.get(1)?,
            content: row.get(2)?,
            category: row.get(3)?,
            created_at: row.get(4)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::db::Database;
    use tempfile::tempdir;

    fn open_db(dir: &tempfile::TempDir) -> Database {
        let path = dir.path().join("test.db");
        let db = Database::new(path.to_str().unwrap()).expect("Failed to open database");
        db.init_schema().expect("Failed to initialize schema");
        db
    }

    /// DD.MM HH:MM, zero-padded
    fn is_created_at_format(s: &str) -> bool {
        let b = s.as_bytes();
        b.len() == 11
            && b[0].is_ascii_digit()
            && b[1].is_ascii_digit()
            && b[2] == b'.'
            && b[3].is_ascii_digit()
            && b[4].is_ascii_digit()
            && b[5] == b' '
            && b[6].is_ascii_digit()
            && b[7].is_ascii_digit()
            && b[8] == b':'
            && b[9].is_ascii_digit()
            && b[10].is_ascii_digit()
    }

    #[test]
    fn test_create_and_list_roundtrip() {
        let dir = tempdir().unwrap();
        let db = open_db(&dir);

        let created = db
            .create_note("Groceries", "Milk, eggs", Some("Home"))
            .expect("Failed to create note");

        assert_eq!(created.id, 1);
        assert_eq!(created.category, "Home");
        assert!(is_created_at_format(&created.created_at));

        let notes = db.list_notes().expect("Failed to list notes");
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].title, "Groceries");
        assert_eq!(notes[0].content, "Milk, eggs");
        assert_eq!(notes[0].created_at, created.created_at);
    }

    #[test]
    fn test_category_defaults_when_missing_or_empty() {
        let dir = tempdir().unwrap();
        let db = open_db(&dir);

        let a = db.create_note("A", "a", None).expect("Failed to create note");
        let b = db.create_note("B", "b", Some("")).expect("Failed to create note");

        assert_eq!(a.category, "Uncategorized");
        assert_eq!(b.category, "Uncategorized");
    }

    #[test]
    fn test_list_is_ordered_by_ascending_id() {
        let dir = tempdir().unwrap();
        let db = open_db(&dir);

        for title in ["first", "second", "third"] {
            db.create_note(title, "x", None).expect("Failed to create note");
        }

        let notes = db.list_notes().expect("Failed to list notes");
        let ids: Vec<i64> = notes.iter().map(|n| n.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(notes[0].title, "first");
        assert_eq!(notes[2].title, "third");
    }

    #[test]
    fn test_ids_never_reused_after_delete() {
        let dir = tempdir().unwrap();
        let db = open_db(&dir);

        db.create_note("A", "a", None).expect("Failed to create note");
        let b = db.create_note("B", "b", None).expect("Failed to create note");

        assert!(db.delete_note(b.id).expect("Failed to delete note"));

        let c = db.create_note("C", "c", None).expect("Failed to create note");
        assert!(c.id > b.id);
    }

    #[test]
    fn test_delete_twice_reports_missing() {
        let dir = tempdir().unwrap();
        let db = open_db(&dir);

        let note = db.create_note("A", "a", None).expect("Failed to create note");

        assert!(db.delete_note(note.id).expect("Failed to delete note"));
        assert!(!db.delete_note(note.id).expect("Failed to delete note"));

        assert!(db.list_notes().expect("Failed to list notes").is_empty());
    }

    #[test]
    fn test_delete_unknown_id_reports_missing() {
        let dir = tempdir().unwrap();
        let db = open_db(&dir);

        assert!(!db.delete_note(42).expect("Failed to delete note"));
    }
}
