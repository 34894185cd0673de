// ==========================================
// Placement Prep Portal - Company reference resolver
// ==========================================
// Question rows reference companies by name. Before any row is
// materialized, this pass deduplicates the referenced names across
// the whole file and resolves each to an existing or newly created
// company, so no company is created twice however many rows share a
// name.
//
// Creation calls run sequentially, each awaited and bounded by the
// configured timeout; a timed-out or failed creation marks the name
// as unresolved and every dependent row fails individually.
// ==========================================

use crate::domain::{Company, CompanyDraft};
use crate::repository::ContentRepository;
use crate::upload::csv_parser::ParsedRow;
use crate::upload::schema::{ColumnMap, COL_COMPANY, COL_DOMAIN, COL_ROLE};
use std::collections::{HashMap, HashSet};
use std::time::Duration;
use tracing::{info, warn};

/// Provenance string for companies synthesized during bulk upload
pub const BULK_UPLOAD_DESCRIPTION: &str = "Added via Bulk Upload.";

/// Outcome of the resolver pass
///
/// `resolved` maps each referenced company name to a company with a
/// valid id. Names absent from the map could not be created; their
/// failure is recorded in `errors` and dependent rows fail at
/// materialization time.
#[derive(Debug, Default)]
pub struct CompanyResolution {
    pub resolved: HashMap<String, Company>,
    pub errors: Vec<String>,
    pub created: usize,
}

/// Resolve every company name referenced by the data rows
///
/// The known set is read-only input for this invocation; the
/// resulting map is owned by the invocation and discarded with it.
pub async fn resolve_companies<R: ContentRepository>(
    repo: &R,
    known: &[Company],
    data_rows: &[ParsedRow],
    columns: &ColumnMap,
    timeout: Duration,
) -> CompanyResolution {
    let mut resolution = CompanyResolution::default();

    // Distinct non-blank names, in order of first appearance
    let mut seen = HashSet::new();
    let names: Vec<&str> = data_rows
        .iter()
        .filter_map(|row| columns.field(row, COL_COMPANY))
        .filter(|name| seen.insert(name.to_string()))
        .collect();

    info!(distinct = names.len(), "resolving referenced companies");

    for name in names {
        // Exact case-sensitive match against the known set reuses the
        // existing company verbatim
        if let Some(existing) = known.iter().find(|c| c.name == name) {
            resolution
                .resolved
                .insert(name.to_string(), existing.clone());
            continue;
        }

        // Synthesize a draft from the first row referencing this name
        let first_row = data_rows
            .iter()
            .find(|row| columns.field(row, COL_COMPANY) == Some(name));

        let sector = first_row
            .and_then(|row| columns.field(row, COL_DOMAIN))
            .unwrap_or("General")
            .to_string();
        let roles = first_row
            .and_then(|row| columns.field(row, COL_ROLE))
            .map(|role| vec![role.to_string()])
            .unwrap_or_default();

        let draft = CompanyDraft {
            name: name.to_string(),
            sector,
            logo: CompanyDraft::derive_logo_url(name),
            description: BULK_UPLOAD_DESCRIPTION.to_string(),
            roles,
        };

        match tokio::time::timeout(timeout, repo.create_company(draft)).await {
            Ok(Ok(company)) => {
                info!(company = %name, id = %company.id, "company created");
                resolution.created += 1;
                resolution.resolved.insert(name.to_string(), company);
            }
            Ok(Err(e)) => {
                warn!(company = %name, error = %e, "company creation failed");
                resolution
                    .errors
                    .push(format!("Error creating company {}: {}", name, e));
            }
            Err(_) => {
                warn!(
                    company = %name,
                    timeout_ms = timeout.as_millis() as u64,
                    "company creation timed out"
                );
                resolution.errors.push(format!(
                    "Error creating company {}: timed out after {}ms",
                    name,
                    timeout.as_millis()
                ));
            }
        }
    }

    resolution
}
