// ==========================================
// Placement Prep Portal - CLI entry point
// ==========================================
// Admin tooling for the content database:
//   upload    run a bulk CSV upload and print the report
//   template  write the upload template for a record kind
//   batches   show recent upload batches
//   stats     show content counts
// ==========================================

use prep_portal::config::ConfigManager;
use prep_portal::upload::{template_csv, template_file_name};
use prep_portal::{
    logging, BulkUploader, BulkUploaderImpl, ContentRepository, RecordKind,
    SqliteContentRepository,
};
use std::path::PathBuf;
use std::process;

/// Content database location
///
/// PREP_PORTAL_DB overrides; otherwise the platform data directory.
fn default_db_path() -> PathBuf {
    if let Ok(path) = std::env::var("PREP_PORTAL_DB") {
        return PathBuf::from(path);
    }

    let base = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join("prep-portal").join("portal.db")
}

fn usage() -> ! {
    eprintln!("Usage: prep-portal <command> [args]");
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  upload <kind> <file.csv>     bulk upload (kind: questions | resources |");
    eprintln!("                               recommendations | whitelist)");
    eprintln!("  template <kind> [out.csv]    write the CSV template for a kind");
    eprintln!("  batches [limit]              list recent upload batches");
    eprintln!("  stats                        content counts");
    process::exit(2);
}

fn parse_kind(value: &str) -> RecordKind {
    RecordKind::parse(value).unwrap_or_else(|| {
        eprintln!("Unknown record kind: {}", value);
        usage();
    })
}

#[tokio::main]
async fn main() {
    logging::init();

    tracing::info!("{} v{}", prep_portal::APP_NAME, prep_portal::VERSION);

    let args: Vec<String> = std::env::args().skip(1).collect();
    let command = args.first().map(String::as_str).unwrap_or("");

    match command {
        "upload" => {
            let (kind, file) = match (args.get(1), args.get(2)) {
                (Some(kind), Some(file)) => (parse_kind(kind), file.clone()),
                _ => usage(),
            };

            let db_path = open_db_path();
            let repo = SqliteContentRepository::new(db_path.clone())
                .expect("failed to open the content database");
            let config = ConfigManager::new(db_path);
            let uploader = BulkUploaderImpl::new(repo, config);

            let report = uploader.upload(kind, &file).await;
            println!(
                "{}",
                serde_json::to_string_pretty(&report).expect("report serialization")
            );
            if report.failed > 0 {
                process::exit(1);
            }
        }

        "template" => {
            let kind = match args.get(1) {
                Some(kind) => parse_kind(kind),
                None => usage(),
            };
            let out = args
                .get(2)
                .cloned()
                .unwrap_or_else(|| template_file_name(kind).to_string());

            let content = template_csv(kind).expect("template rendering");
            std::fs::write(&out, content).expect("failed to write template file");
            println!("Template written to {}", out);
        }

        "batches" => {
            let limit = args
                .get(1)
                .and_then(|v| v.parse().ok())
                .unwrap_or(10usize);

            let repo = SqliteContentRepository::new(open_db_path())
                .expect("failed to open the content database");
            let batches = repo
                .recent_upload_batches(limit)
                .await
                .expect("failed to read upload batches");

            for batch in batches {
                println!(
                    "{}  {:<14}  {:<28}  rows={} ok={} failed={}  {}ms",
                    batch.uploaded_at.format("%Y-%m-%d %H:%M:%S"),
                    batch.kind.as_str(),
                    batch.file_name.as_deref().unwrap_or("-"),
                    batch.total_rows,
                    batch.success_rows,
                    batch.failed_rows,
                    batch.elapsed_ms,
                );
            }
        }

        "stats" => {
            let repo = SqliteContentRepository::new(open_db_path())
                .expect("failed to open the content database");

            println!(
                "companies: {}",
                repo.count_companies().await.expect("count failed")
            );
            println!(
                "questions: {}",
                repo.count_questions().await.expect("count failed")
            );
            println!(
                "resources: {}",
                repo.count_resources().await.expect("count failed")
            );
            println!(
                "recommendations: {}",
                repo.count_recommendations().await.expect("count failed")
            );
        }

        _ => usage(),
    }
}

/// Resolve the DB path and make sure its parent directory exists
fn open_db_path() -> String {
    let path = default_db_path();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("failed to create the data directory");
    }
    path.to_string_lossy().into_owned()
}
