// ==========================================
// Placement Prep Portal - Upload templates
// ==========================================
// "Download template" affordance: a canonical header line plus one
// sample data row per record kind. Written through csv::Writer so
// fields with embedded commas stay quoted correctly.
// ==========================================

use crate::domain::RecordKind;
use crate::upload::error::{UploadError, UploadResult};
use crate::upload::schema::expected_headers;

/// Sample data row matching the canonical header order
fn sample_row(kind: RecordKind) -> &'static [&'static str] {
    match kind {
        RecordKind::Question => &[
            "JPMorgan",
            "Finance",
            "Analyst",
            "Analytics",
            "Medium",
            "Describe a project, and its \"impact\".",
            "STAR method: Situation, Task, Action, Result.",
            "Yes",
        ],
        RecordKind::Resource => &[
            "Advanced Python",
            "https://example.com",
            "Deep dive into pandas and NumPy",
            "Python",
            "Coursera",
            "10 Hours",
        ],
        RecordKind::Recommendation => &[
            "Dr. Sharma",
            "Advanced Pandas",
            "https://example.com",
            "Deep dive into indexing",
            "Python",
            "Master DataFrames",
            "Handling complex data",
            "Focus on MultiIndex",
            "2 Hours",
        ],
        RecordKind::Whitelist => &[
            "admin@pilani.bits-pilani.ac.in",
            "admin",
            "google",
            "Placement Admin",
        ],
    }
}

/// Suggested download file name per kind
pub fn template_file_name(kind: RecordKind) -> &'static str {
    match kind {
        RecordKind::Question => "question_upload_template.csv",
        RecordKind::Resource => "resource_upload_template.csv",
        RecordKind::Recommendation => "faculty_recommendation_template.csv",
        RecordKind::Whitelist => "user_whitelist_template.csv",
    }
}

/// Render the template CSV for a record kind
pub fn template_csv(kind: RecordKind) -> UploadResult<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer
        .write_record(expected_headers(kind))
        .map_err(|e| UploadError::Other(e.into()))?;
    writer
        .write_record(sample_row(kind))
        .map_err(|e| UploadError::Other(e.into()))?;

    let bytes = writer
        .into_inner()
        .map_err(|e| UploadError::Other(anyhow::anyhow!("{}", e)))?;
    String::from_utf8(bytes).map_err(|e| UploadError::Other(e.into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::upload::csv_parser::parse_csv;
    use crate::upload::schema::{min_fields, validate_headers, ColumnMap};

    #[test]
    fn test_templates_parse_back_cleanly() {
        for kind in [
            RecordKind::Question,
            RecordKind::Resource,
            RecordKind::Recommendation,
            RecordKind::Whitelist,
        ] {
            let text = template_csv(kind).unwrap();
            let rows = parse_csv(&text);

            assert_eq!(rows.len(), 2, "{} template: header + one sample", kind);
            assert!(validate_headers(&rows[0], expected_headers(kind)));
            assert!(ColumnMap::build(&rows[0], kind).is_some());
            assert!(rows[1].len() >= min_fields(kind));
        }
    }

    #[test]
    fn test_question_template_keeps_quoted_comma() {
        let text = template_csv(RecordKind::Question).unwrap();
        let rows = parse_csv(&text);
        assert_eq!(rows[1][5], "Describe a project, and its \"impact\".");
    }
}
