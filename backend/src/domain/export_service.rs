//! Export service domain logic.
//!
//! Turns already-fetched registrations into CSV text for the admin
//! download. Pure and synchronous; it never touches storage.

use chrono::SecondsFormat;
use csv::{QuoteStyle, Terminator, WriterBuilder};
use tracing::info;

use crate::domain::models::registration::RegistrationListing;

pub const CSV_HEADERS: [&str; 5] = [
    "Course title",
    "Full name",
    "Email",
    "Phone",
    "Registration date",
];

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("failed to write CSV record: {0}")]
    Csv(#[from] csv::Error),
    #[error("failed to flush CSV buffer: {0}")]
    Flush(String),
    #[error("CSV output is not valid UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),
}

/// Export service that renders registration listings as CSV
#[derive(Clone, Default)]
pub struct ExportService;

impl ExportService {
    pub fn new() -> Self {
        Self
    }

    /// Render registrations as CSV.
    ///
    /// Returns `Ok(None)` for an empty input so callers can skip the
    /// download entirely. Fields are quoted only when they contain a comma,
    /// a double quote or a newline; embedded quotes are doubled. Rows are
    /// separated by `\n` with no trailing newline.
    pub fn export_registrations_to_csv(
        &self,
        registrations: &[RegistrationListing],
    ) -> Result<Option<String>, ExportError> {
        if registrations.is_empty() {
            info!("No registrations to export");
            return Ok(None);
        }

        let mut writer = WriterBuilder::new()
            .quote_style(QuoteStyle::Necessary)
            .terminator(Terminator::Any(b'\n'))
            .from_writer(Vec::new());

        writer.write_record(CSV_HEADERS)?;
        for listing in registrations {
            let registration = &listing.registration;
            let course_title = listing
                .course
                .as_ref()
                .map(|course| course.title.as_str())
                .unwrap_or("");
            let registered_at = registration
                .created_at
                .to_rfc3339_opts(SecondsFormat::Millis, true);

            writer.write_record([
                course_title,
                registration.full_name.as_str(),
                registration.email.as_str(),
                registration.phone.as_str(),
                registered_at.as_str(),
            ])?;
        }

        let bytes = writer
            .into_inner()
            .map_err(|e| ExportError::Flush(e.to_string()))?;
        let mut csv = String::from_utf8(bytes)?;
        // The writer terminates every record; the last one does not need it
        if csv.ends_with('\n') {
            csv.pop();
        }

        info!("Exported {} registrations to CSV", registrations.len());
        Ok(Some(csv))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::registration::{CourseRef, Registration};
    use chrono::{TimeZone, Utc};

    fn listing(full_name: &str, course_title: Option<&str>) -> RegistrationListing {
        RegistrationListing {
            registration: Registration {
                id: 1,
                full_name: full_name.to_string(),
                email: "jane@example.com".to_string(),
                phone: "123".to_string(),
                course_id: 3,
                created_at: Utc.with_ymd_and_hms(2025, 1, 2, 3, 4, 5).unwrap(),
            },
            course: course_title.map(|title| CourseRef {
                id: 3,
                title: title.to_string(),
            }),
        }
    }

    #[test]
    fn test_empty_input_produces_nothing() {
        let service = ExportService::new();
        assert!(service.export_registrations_to_csv(&[]).unwrap().is_none());
    }

    #[test]
    fn test_header_and_plain_row() {
        let service = ExportService::new();
        let csv = service
            .export_registrations_to_csv(&[listing("Jane Doe", Some("Rust Basics"))])
            .unwrap()
            .unwrap();

        assert_eq!(
            csv,
            "Course title,Full name,Email,Phone,Registration date\n\
             Rust Basics,Jane Doe,jane@example.com,123,2025-01-02T03:04:05.000Z"
        );
    }

    #[test]
    fn test_comma_in_name_is_quoted() {
        let service = ExportService::new();
        let csv = service
            .export_registrations_to_csv(&[listing("Doe, Jane", Some("Rust Basics"))])
            .unwrap()
            .unwrap();

        let row = csv.lines().nth(1).unwrap();
        assert_eq!(
            row,
            "Rust Basics,\"Doe, Jane\",jane@example.com,123,2025-01-02T03:04:05.000Z"
        );
    }

    #[test]
    fn test_quotes_are_doubled_and_newlines_quoted() {
        let service = ExportService::new();
        let csv = service
            .export_registrations_to_csv(&[listing("Jane \"JD\" Doe", Some("Line one\nLine two"))])
            .unwrap()
            .unwrap();

        assert!(csv.contains("\"Line one\nLine two\",\"Jane \"\"JD\"\" Doe\""));
        assert!(!csv.ends_with('\n'));
    }

    #[test]
    fn test_missing_course_title_is_empty_field() {
        let service = ExportService::new();
        let csv = service
            .export_registrations_to_csv(&[listing("Jane Doe", None), listing("John Roe", Some("SQL"))])
            .unwrap()
            .unwrap();

        let rows: Vec<&str> = csv.split('\n').collect();
        assert_eq!(rows.len(), 3);
        assert!(rows[1].starts_with(",Jane Doe,"));
        assert!(rows[2].starts_with("SQL,John Roe,"));
    }
}
