use chrono::NaiveDate;
use reefadmin::core::sections::group_by_species;
use reefadmin::export::ExportFormat;
use reefadmin::export::csv::write_transplant_csv;
use reefadmin::export::filename::extract_filename;
use reefadmin::export::logic::fallback_filename;
use reefadmin::models::grade::Grade;
use reefadmin::models::method::TransplantMethod;
use reefadmin::models::transplant::TransplantLog;
use std::env;
use std::fs;
use std::path::PathBuf;

fn temp_out(name: &str, ext: &str) -> PathBuf {
    let mut path = env::temp_dir();
    path.push(format!("{}_reefadmin_out.{}", name, ext));
    fs::remove_file(&path).ok();
    path
}

fn log(id: i64, species_id: i64, species_name: &str, day: u32) -> TransplantLog {
    TransplantLog {
        id,
        record_date: NaiveDate::from_ymd_opt(2025, 9, day).expect("valid date"),
        method: TransplantMethod::SeedlingString,
        method_name: "Seedling string".into(),
        method_desc: String::new(),
        unit: "strings".into(),
        species_id,
        species_name: species_name.into(),
        count: 25,
        area_size: 6.0,
        attachment_status: Grade::Normal,
        attachment_status_name: "Normal".into(),
    }
}

#[test]
fn content_disposition_quoted_filename() {
    let header = r#"attachment; filename="submissions_3_items.csv""#;
    assert_eq!(
        extract_filename(header),
        Some("submissions_3_items.csv".to_string())
    );
}

#[test]
fn content_disposition_bare_filename() {
    assert_eq!(
        extract_filename("attachment; filename=report.pdf"),
        Some("report.pdf".to_string())
    );
}

#[test]
fn content_disposition_rfc5987_filename() {
    let header = "attachment; filename*=UTF-8''draft%20report.pdf";
    assert_eq!(extract_filename(header), Some("draft report.pdf".to_string()));
}

#[test]
fn content_disposition_without_filename() {
    assert_eq!(extract_filename("inline"), None);
}

#[test]
fn fallback_names_follow_id_count() {
    assert_eq!(
        fallback_filename(&ExportFormat::Csv, &[42]),
        "submission_42.csv"
    );
    assert_eq!(
        fallback_filename(&ExportFormat::Csv, &[1, 2, 3]),
        "submissions_3_items.csv"
    );
    assert_eq!(
        fallback_filename(&ExportFormat::Pdf, &[42]),
        "draft-report_42.pdf"
    );
    assert_eq!(
        fallback_filename(&ExportFormat::Pdf, &[1, 2]),
        "draft-reports_2_items.pdf"
    );
}

#[test]
fn transplant_csv_writes_sections_in_order() {
    let out = temp_out("transplant_sections", "csv");

    let sections = group_by_species(vec![
        log(1, 5, "Kelp", 1),
        log(2, 7, "Sargassum", 2),
        log(3, 5, "Kelp", 3),
    ]);
    write_transplant_csv(&sections, &out).expect("write csv");

    let content = fs::read_to_string(&out).expect("read exported csv");
    let lines: Vec<&str> = content.lines().collect();

    assert!(lines[0].starts_with("species_id,species,date"));
    // Section order: all Kelp rows first, then Sargassum.
    assert!(lines[1].contains("Kelp") && lines[1].contains("2025-09-01"));
    assert!(lines[2].contains("Kelp") && lines[2].contains("2025-09-03"));
    assert!(lines[3].contains("Sargassum"));
    assert_eq!(lines.len(), 4);
}
