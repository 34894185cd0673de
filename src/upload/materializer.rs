// ==========================================
// Placement Prep Portal - Row materializer
// ==========================================
// Converts one validated data row into a typed domain record.
// Per-row policy, uniform across the four kinds:
// - required fields must be non-blank; a blank one fails the row
//   with an error named after the missing field
// - closed-enumeration fields coerce unknown values to a fixed
//   default instead of failing the row
// - yes/no columns are true only for lower-cased "yes" or "true"
// - ids are synthesized locally; the persistence layer may replace
//   them
// Failures are row-scoped strings; they never abort the batch.
// ==========================================

use crate::domain::types::{AuthProvider, Difficulty, Subject, Topic, UserRole};
use crate::domain::{Company, Question, Recommendation, Resource, WhitelistEntry};
use crate::upload::csv_parser::ParsedRow;
use crate::upload::schema::{
    ColumnMap, COL_ASKED_IN_BITS, COL_AUTH_PROVIDER, COL_CATEGORY, COL_COMPANY, COL_DESCRIPTION,
    COL_DIFFICULTY, COL_DOMAIN, COL_DURATION, COL_EMAIL, COL_EXPECTED_LEARNING, COL_FACULTY_NAME,
    COL_GOAL, COL_IDEAL_APPROACH, COL_NAME, COL_QUESTION, COL_REMARKS, COL_ROLE, COL_SOURCE,
    COL_SUBJECT, COL_TIME_ESTIMATE, COL_TITLE, COL_TOPIC, COL_URL, COL_USER_ROLE,
};
use chrono::NaiveDate;
use std::collections::HashMap;
use uuid::Uuid;

/// True only for lower-cased "yes" or "true"; anything else
/// (including blank) is false
fn coerce_bool(value: Option<&str>) -> bool {
    matches!(
        value.map(|v| v.to_lowercase()).as_deref(),
        Some("yes") | Some("true")
    )
}

/// Materialize a question row against the completed company map
///
/// The resolver pass has already run; a name absent from the map
/// means the company could not be found or created, and the row
/// fails with the shared reference error.
pub fn materialize_question(
    row: &ParsedRow,
    columns: &ColumnMap,
    resolved: &HashMap<String, Company>,
) -> Result<Question, String> {
    let text = columns
        .field(row, COL_QUESTION)
        .ok_or_else(|| "Missing 'Question' text.".to_string())?;

    let name = columns.field_or(row, COL_COMPANY, "");
    let company = resolved
        .get(name)
        .ok_or_else(|| format!("Company '{}' could not be found or created.", name))?;

    Ok(Question {
        id: format!("q_{}", Uuid::new_v4()),
        company_id: company.id.clone(),
        company_name: company.name.clone(),
        domain: columns.field_or(row, COL_DOMAIN, "General").to_string(),
        role: columns.field_or(row, COL_ROLE, "General").to_string(),
        topic: Topic::parse_lenient(columns.field_or(row, COL_TOPIC, "")),
        difficulty: Difficulty::parse_lenient(columns.field_or(row, COL_DIFFICULTY, "")),
        text: text.to_string(),
        ideal_approach: columns.field_or(row, COL_IDEAL_APPROACH, "").to_string(),
        asked_in_bits: coerce_bool(columns.field(row, COL_ASKED_IN_BITS)),
        frequency: 1,
    })
}

/// Materialize a resource row
pub fn materialize_resource(row: &ParsedRow, columns: &ColumnMap) -> Result<Resource, String> {
    let title = columns
        .field(row, COL_TITLE)
        .ok_or_else(|| "Missing 'Title'.".to_string())?;
    let url = columns
        .field(row, COL_URL)
        .ok_or_else(|| "Missing 'URL'.".to_string())?;

    Ok(Resource {
        id: format!("r_{}", Uuid::new_v4()),
        title: title.to_string(),
        url: url.to_string(),
        description: columns.field_or(row, COL_DESCRIPTION, "").to_string(),
        category: columns.field_or(row, COL_CATEGORY, "General").to_string(),
        source: columns.field_or(row, COL_SOURCE, "External").to_string(),
        duration: columns.field_or(row, COL_DURATION, "Self-paced").to_string(),
    })
}

/// Materialize a faculty recommendation row
///
/// `today` stamps the recommendation date; it is passed in so the
/// orchestrator fixes one date per invocation.
pub fn materialize_recommendation(
    row: &ParsedRow,
    columns: &ColumnMap,
    today: NaiveDate,
) -> Result<Recommendation, String> {
    let title = columns
        .field(row, COL_TITLE)
        .ok_or_else(|| "Missing 'Title'.".to_string())?;

    Ok(Recommendation {
        id: format!("rec_{}", Uuid::new_v4()),
        faculty_name: columns
            .field_or(row, COL_FACULTY_NAME, "Faculty Member")
            .to_string(),
        date: today.format("%Y-%m-%d").to_string(),
        title: title.to_string(),
        url: columns.field(row, COL_URL).map(str::to_string),
        description: columns.field_or(row, COL_DESCRIPTION, "").to_string(),
        subject: Subject::parse_lenient(columns.field_or(row, COL_SUBJECT, "")),
        goal: columns.field_or(row, COL_GOAL, "").to_string(),
        expected_learning: columns.field_or(row, COL_EXPECTED_LEARNING, "").to_string(),
        remarks: columns.field(row, COL_REMARKS).map(str::to_string),
        time_to_complete: columns.field(row, COL_TIME_ESTIMATE).map(str::to_string),
    })
}

/// Materialize a whitelist row
pub fn materialize_whitelist(
    row: &ParsedRow,
    columns: &ColumnMap,
) -> Result<WhitelistEntry, String> {
    let email = columns
        .field(row, COL_EMAIL)
        .ok_or_else(|| "Missing 'Email'.".to_string())?;

    Ok(WhitelistEntry {
        email: email.to_string(),
        role: UserRole::parse_lenient(columns.field_or(row, COL_USER_ROLE, "")),
        auth_provider: AuthProvider::parse_lenient(columns.field_or(row, COL_AUTH_PROVIDER, "")),
        name: columns.field(row, COL_NAME).map(str::to_string),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RecordKind;
    use crate::upload::schema::expected_headers;

    fn column_map(kind: RecordKind) -> ColumnMap {
        let header: Vec<String> = expected_headers(kind)
            .iter()
            .map(|h| h.to_string())
            .collect();
        ColumnMap::build(&header, kind).unwrap()
    }

    fn acme() -> Company {
        Company {
            id: "c_acme".to_string(),
            name: "Acme".to_string(),
            sector: "Tech".to_string(),
            logo: "https://logo.clearbit.com/acme.com".to_string(),
            description: "Added via Bulk Upload.".to_string(),
            roles: vec!["Analyst".to_string()],
        }
    }

    fn row(fields: &[&str]) -> ParsedRow {
        fields.iter().map(|f| f.to_string()).collect()
    }

    #[test]
    fn test_question_row_happy_path() {
        let columns = column_map(RecordKind::Question);
        let resolved = HashMap::from([("Acme".to_string(), acme())]);
        let r = row(&[
            "Acme",
            "Tech",
            "Analyst",
            "SQL",
            "Hard",
            "Explain window functions.",
            "Walk through OVER and PARTITION BY.",
            "Yes",
        ]);

        let q = materialize_question(&r, &columns, &resolved).unwrap();
        assert_eq!(q.company_id, "c_acme");
        assert_eq!(q.company_name, "Acme");
        assert_eq!(q.topic, Topic::Sql);
        assert_eq!(q.difficulty, Difficulty::Hard);
        assert!(q.asked_in_bits);
        assert_eq!(q.frequency, 1);
        assert!(q.id.starts_with("q_"));
    }

    #[test]
    fn test_question_row_missing_text() {
        let columns = column_map(RecordKind::Question);
        let resolved = HashMap::from([("Acme".to_string(), acme())]);
        let r = row(&["Acme", "Tech", "Analyst", "SQL", "Hard", "", "", "No"]);

        let err = materialize_question(&r, &columns, &resolved).unwrap_err();
        assert_eq!(err, "Missing 'Question' text.");
    }

    #[test]
    fn test_question_row_unresolved_company() {
        let columns = column_map(RecordKind::Question);
        let resolved = HashMap::new();
        let r = row(&["Ghost Corp", "", "", "", "", "A question?", "", ""]);

        let err = materialize_question(&r, &columns, &resolved).unwrap_err();
        assert_eq!(err, "Company 'Ghost Corp' could not be found or created.");
    }

    #[test]
    fn test_question_row_lenient_enums_and_defaults() {
        let columns = column_map(RecordKind::Question);
        let resolved = HashMap::from([("Acme".to_string(), acme())]);
        let r = row(&["Acme", "", "", "Quantum", "Brutal", "Q?", "", "maybe"]);

        let q = materialize_question(&r, &columns, &resolved).unwrap();
        assert_eq!(q.domain, "General");
        assert_eq!(q.role, "General");
        assert_eq!(q.topic, Topic::General);
        assert_eq!(q.difficulty, Difficulty::Medium);
        assert!(!q.asked_in_bits);
    }

    #[test]
    fn test_resource_row_requires_title_and_url() {
        let columns = column_map(RecordKind::Resource);

        let no_title = row(&["", "https://x.com", "d", "Python", "Coursera", "1h"]);
        assert_eq!(
            materialize_resource(&no_title, &columns).unwrap_err(),
            "Missing 'Title'."
        );

        let no_url = row(&["Pandas", "", "d", "Python", "Coursera", "1h"]);
        assert_eq!(
            materialize_resource(&no_url, &columns).unwrap_err(),
            "Missing 'URL'."
        );
    }

    #[test]
    fn test_resource_row_defaults() {
        let columns = column_map(RecordKind::Resource);
        let r = row(&["Pandas", "https://x.com", "", "", "", ""]);

        let resource = materialize_resource(&r, &columns).unwrap();
        assert_eq!(resource.category, "General");
        assert_eq!(resource.source, "External");
        assert_eq!(resource.duration, "Self-paced");
    }

    #[test]
    fn test_recommendation_row() {
        let columns = column_map(RecordKind::Recommendation);
        let today = NaiveDate::from_ymd_opt(2026, 3, 14).unwrap();
        let r = row(&[
            "Dr. Rao",
            "Advanced Pandas",
            "https://x.com",
            "Deep dive",
            "NLP",
            "Master text pipelines",
            "Tokenization to embeddings",
            "",
            "2 Hours",
        ]);

        let rec = materialize_recommendation(&r, &columns, today).unwrap();
        assert_eq!(rec.faculty_name, "Dr. Rao");
        assert_eq!(rec.date, "2026-03-14");
        assert_eq!(rec.subject, Subject::Nlp);
        assert_eq!(rec.remarks, None);
        assert_eq!(rec.time_to_complete, Some("2 Hours".to_string()));
    }

    #[test]
    fn test_recommendation_row_missing_title_and_fallbacks() {
        let columns = column_map(RecordKind::Recommendation);
        let today = NaiveDate::from_ymd_opt(2026, 3, 14).unwrap();

        let no_title = row(&["Dr. Rao", "", "", "", "", "", "", "", ""]);
        assert_eq!(
            materialize_recommendation(&no_title, &columns, today).unwrap_err(),
            "Missing 'Title'."
        );

        let anon = row(&["", "Stats Drills", "", "", "Astrology", "", "", "", ""]);
        let rec = materialize_recommendation(&anon, &columns, today).unwrap();
        assert_eq!(rec.faculty_name, "Faculty Member");
        assert_eq!(rec.subject, Subject::Python);
    }

    #[test]
    fn test_whitelist_row() {
        let columns = column_map(RecordKind::Whitelist);
        let r = row(&["dean@pilani.bits-pilani.ac.in", "ADMIN", "google", "Dean"]);

        let entry = materialize_whitelist(&r, &columns).unwrap();
        assert_eq!(entry.email, "dean@pilani.bits-pilani.ac.in");
        assert_eq!(entry.role, UserRole::Admin);
        assert_eq!(entry.auth_provider, AuthProvider::Google);

        let no_email = row(&["", "admin", "google", ""]);
        assert_eq!(
            materialize_whitelist(&no_email, &columns).unwrap_err(),
            "Missing 'Email'."
        );
    }

    #[test]
    fn test_bool_coercion() {
        assert!(coerce_bool(Some("yes")));
        assert!(coerce_bool(Some("TRUE")));
        assert!(!coerce_bool(Some("no")));
        assert!(!coerce_bool(Some("1")));
        assert!(!coerce_bool(None));
    }
}
