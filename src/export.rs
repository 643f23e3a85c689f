//! Plain-text export report.

use crate::models::Note;

const BANNER: &str = "=== NOTES BACKUP ===";
const SEPARATOR_LEN: usize = 30;

/// Render the full note collection as a UTF-8 plain-text report.
///
/// Pure function of the input sequence: identical input produces
/// byte-identical output. Notes appear in the order given. An empty
/// collection still yields the banner.
///
/// Per note: a header line with timestamp, category, and title, the
/// content on the following line(s), a dashed separator, and a blank
/// line.
pub fn render_report(notes: &[Note]) -> String {
    let mut report = String::new();
    report.push_str(BANNER);
    report.push_str("\n\n");

    for note in notes {
        report.push_str(&note.created_at);
        report.push_str(" | ");
        report.push_str(&note.category);
        report.push_str(" | ");
        report.push_str(&note.title);
        report.push('\n');
        report.push_str(&note.content);
        report.push('\n');
        report.push_str(&"-".repeat(SEPARATOR_LEN));
        report.push_str("\n\n");
    }

    report
}
