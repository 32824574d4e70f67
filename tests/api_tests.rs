mod common;
use common::{
    Route, StubServer, area_detail_body, data_envelope, growth_row, paged_envelope, rfa,
    species_list_body, transplant_row,
};
use predicates::prelude::*;
use std::env;
use std::fs;
use std::path::PathBuf;

fn temp_dir(name: &str) -> PathBuf {
    let mut path = env::temp_dir();
    path.push(format!("{}_reefadmin_api", name));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create temp dir");
    path
}

#[test]
fn area_show_groups_logs_per_species() {
    let transplants = paged_envelope(
        &format!(
            "[{},{},{}]",
            transplant_row(1, 5, "Kelp", "2025-09-01"),
            transplant_row(2, 7, "Sargassum", "2025-09-02"),
            transplant_row(3, 5, "Kelp", "2025-09-03"),
        ),
        3,
    );
    let growth = paged_envelope(&format!("[{}]", growth_row(11, 5, "Kelp", "2025-09-04")), 1);

    let server = StubServer::start(vec![
        Route::get("/api/dashboard/areas/7", &area_detail_body(7, "North Cove")),
        Route::get("/api/dashboard/areas/7/transplants", &transplants),
        Route::get("/api/dashboard/areas/7/growths", &growth),
        Route::get("/api/dashboard/areas/7/water-logs", &paged_envelope("[]", 0)),
        Route::get("/api/dashboard/areas/7/media-logs", &paged_envelope("[]", 0)),
    ]);

    let assert = rfa()
        .args(["--api", &server.base_url, "area", "7"])
        .assert()
        .success()
        .stdout(predicate::str::contains("North Cove"))
        .stdout(predicate::str::contains("Kelp (#5) - 2 records"))
        .stdout(predicate::str::contains("Sargassum (#7) - 1 records"));

    // First-seen order: the Kelp section renders before Sargassum.
    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).to_string();
    let kelp = stdout.find("Kelp (#5)").expect("kelp section");
    let sargassum = stdout.find("Sargassum (#7)").expect("sargassum section");
    assert!(kelp < sargassum);
}

#[test]
fn area_show_can_hide_one_species_locally() {
    let transplants = paged_envelope(
        &format!(
            "[{},{}]",
            transplant_row(1, 5, "Kelp", "2025-09-01"),
            transplant_row(2, 7, "Sargassum", "2025-09-02"),
        ),
        2,
    );

    let server = StubServer::start(vec![
        Route::get("/api/dashboard/areas/7", &area_detail_body(7, "North Cove")),
        Route::get("/api/dashboard/areas/7/transplants", &transplants),
    ]);

    rfa()
        .args([
            "--api",
            &server.base_url,
            "area",
            "7",
            "--logs",
            "transplant",
            "--without-species",
            "5",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Sargassum"))
        .stdout(predicate::str::contains("Kelp (#5)").not());

    // Display-only filter: nothing was deleted on the server.
    assert!(
        !server
            .hits()
            .iter()
            .any(|h| h.line.starts_with("DELETE"))
    );
}

#[test]
fn areas_list_renders_table_and_passes_filters() {
    let body = data_envelope(
        r#"{"content":[{"id":3,"name":"North Cove","restorationRegion":"POHANG","startDate":"2025-03-01","endDate":"2025-12-01","habitat":"ROCKY","depth":8.5,"areaSize":1200.0,"level":"GROWTH","attachmentStatus":"STABLE","lat":36.02,"lon":129.37}],"page":1,"size":20,"totalPages":4,"totalElements":61}"#,
    );

    let server = StubServer::start(vec![Route::get("/api/dashboard/areas", &body)]);

    rfa()
        .args([
            "--api",
            &server.base_url,
            "areas",
            "--region",
            "pohang",
            "--keyword",
            "cove",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("North Cove"))
        .stdout(predicate::str::contains("Pohang"))
        .stdout(predicate::str::contains("Growth"))
        .stdout(predicate::str::contains("Page 1/4 (61 areas)"));

    // Region codes are normalized to uppercase, blank filters omitted.
    let line = &server.hits()[0].line;
    assert!(line.contains("region=POHANG"));
    assert!(line.contains("keyword=cove"));
    assert!(!line.contains("habitat="));
}

#[test]
fn edit_log_patches_then_rerenders_sections() {
    let page = paged_envelope(
        &format!("[{}]", transplant_row(1, 5, "Kelp", "2025-09-05")),
        1,
    );

    let server = StubServer::start(vec![
        Route::patch(
            "/api/dashboard/areas/7/transplants/1",
            r#"{"success":true,"data":null}"#,
        ),
        Route::get("/api/dashboard/areas/7/transplants", &page),
    ]);

    rfa()
        .args([
            "--api",
            &server.base_url,
            "edit-log",
            "7",
            "--kind",
            "transplant",
            "--id",
            "1",
            "--date",
            "2025-09-05",
            "--species",
            "5",
            "--method",
            "ROPE",
            "--count",
            "55",
            "--status",
            "NORMAL",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("transplant log #1 updated"))
        .stdout(predicate::str::contains("Kelp (#5)"));

    let hits = server.hits();
    let patch = hits
        .iter()
        .find(|h| h.line.starts_with("PATCH /api/dashboard/areas/7/transplants/1"))
        .expect("patch request sent");
    assert!(patch.body.contains(r#""count":55"#));
    assert!(patch.body.contains(r#""attachmentStatus":"NORMAL""#));
}

#[test]
fn del_log_calls_the_kind_specific_endpoint() {
    let server = StubServer::start(vec![Route::delete(
        "/api/dashboard/areas/7/growths/11",
        r#"{"success":true,"data":null}"#,
    )]);

    rfa()
        .args([
            "--api",
            &server.base_url,
            "del-log",
            "7",
            "--kind",
            "growth",
            "--id",
            "11",
            "--yes",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("growth log #11 deleted"));

    assert!(
        server.hits()[0]
            .line
            .starts_with("DELETE /api/dashboard/areas/7/growths/11")
    );
}

#[test]
fn approve_single_submission_hits_single_endpoint() {
    let server = StubServer::start(vec![Route::post(
        "/api/admin/submissions/31/approve",
        r#"{"success":true,"data":null}"#,
    )]);

    rfa()
        .args(["--api", &server.base_url, "approve", "31"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 submission(s) approved"));
}

#[test]
fn approve_many_submissions_uses_bulk_endpoint() {
    let server = StubServer::start(vec![Route::post(
        "/api/admin/submissions/bulk/approve",
        r#"{"success":true,"data":null}"#,
    )]);

    rfa()
        .args(["--api", &server.base_url, "approve", "31", "32", "40"])
        .assert()
        .success()
        .stdout(predicate::str::contains("3 submission(s) approved"));

    assert!(server.hits()[0].body.contains("[31,32,40]"));
}

#[test]
fn reject_sends_reason_with_template() {
    let server = StubServer::start(vec![Route::post(
        "/api/admin/submissions/31/reject",
        r#"{"success":true,"data":null}"#,
    )]);

    rfa()
        .args([
            "--api",
            &server.base_url,
            "reject",
            "31",
            "--message",
            "missing photos",
            "--template",
            "R002",
        ])
        .assert()
        .success();

    let body = &server.hits()[0].body;
    assert!(body.contains(r#""message":"missing photos""#));
    assert!(body.contains(r#""templateCode":"R002""#));
}

#[test]
fn submission_detail_renders_activity_blocks() {
    let detail = data_envelope(
        r#"{"submissionId":31,"siteName":"North Cove","activityType":"TRANSPLANT","recordDate":"2025-09-14","divingRound":2,"workDescription":"replanted rope lines","submittedAt":[2025,9,14,9,30],"status":"PENDING","authorName":"D. Han","authorEmail":"dhan@reef.local","attachmentCount":4,"basicEnv":{"avgDepthM":8.0,"waterTempC":19.5,"visibilityStatus":"GOOD"},"participants":{"participantNames":"D. Han, K. Lim"},"transplantActivity":{"speciesType":"KAMTAE","methodType":"ROPE_LINE","healthStatus":"A"},"attachments":[{"attachmentId":1,"fileName":"site.jpg","fileUrl":"https://cdn.reef.local/site.jpg","mimeType":"image/jpeg","fileSize":120034,"uploadedAt":"2025-09-14"}],"auditLogs":[{"logId":9,"action":"SUBMITTED","performedBy":"D. Han","createdAt":"2025-09-14"}],"createdAt":"2025-09-14","modifiedAt":"2025-09-14"}"#,
    );

    let server = StubServer::start(vec![Route::get("/api/admin/submissions/31", &detail)]);

    rfa()
        .args(["--api", &server.base_url, "submission", "31"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Submission #31 - North Cove"))
        .stdout(predicate::str::contains("2025-09-14"))
        .stdout(predicate::str::contains("Transplant"))
        .stdout(predicate::str::contains("D. Han, K. Lim"))
        .stdout(predicate::str::contains("site.jpg"))
        .stdout(predicate::str::contains("SUBMITTED"));
}

#[test]
fn species_list_renders_registry() {
    let server = StubServer::start(vec![Route::get("/api/bio/species", &species_list_body())]);

    rfa()
        .args(["--api", &server.base_url, "species"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Kelp"))
        .stdout(predicate::str::contains("Sea trumpet"));
}

#[test]
fn submissions_list_maps_lenient_rows() {
    let body = data_envelope(
        r#"{"content":[
            {"submissionId":31,"siteName":"North Cove","submittedAt":"2025-09-14T09:30:00","activityType":"TRANSPLANT","authorName":"D. Han","attachmentCount":4,"status":"PENDING"},
            {"submissionId":"32","siteName":"East Wall","submittedAt":[2025,9,15],"activityType":"MONITORING","authorName":"J. Seo","status":"SOMETHING_NEW"}
        ],"page":0,"size":20,"totalPages":1,"totalElements":2}"#,
    );

    let server = StubServer::start(vec![Route::get("/api/admin/submissions", &body)]);

    rfa()
        .args(["--api", &server.base_url, "submissions"])
        .assert()
        .success()
        .stdout(predicate::str::contains("North Cove"))
        .stdout(predicate::str::contains("2025-09-14"))
        .stdout(predicate::str::contains("2025-09-15"))
        .stdout(predicate::str::contains("Transplant"))
        // Unknown status falls back to Pending instead of failing the page.
        .stdout(predicate::str::contains("Pending").count(2))
        .stdout(predicate::str::contains("2 submissions total"));
}

#[test]
fn submissions_retry_drops_status_filter_on_c001() {
    let error_body = r#"{"success":false,"code":"C001","message":"filter unavailable"}"#;
    let ok_body = data_envelope(
        r#"{"content":[{"submissionId":40,"siteName":"South Reef","submittedAt":"2025-09-20","activityType":"TRANSPLANT","authorName":"K. Lim","attachmentCount":1,"status":"PENDING"}],"totalElements":1}"#,
    );

    let server = StubServer::start(vec![
        Route::get("/api/admin/submissions", error_body)
            .with_query("status=")
            .with_status(500),
        Route::get("/api/admin/submissions", &ok_body),
    ]);

    rfa()
        .args([
            "--api",
            &server.base_url,
            "submissions",
            "--status",
            "PENDING",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("South Reef"));

    let hits = server.hits();
    let list_hits: Vec<_> = hits
        .iter()
        .filter(|h| h.line.contains("/api/admin/submissions"))
        .collect();
    assert_eq!(list_hits.len(), 2);
    assert!(list_hits[0].line.contains("status=PENDING"));
    assert!(!list_hits[1].line.contains("status="));
}

#[test]
fn submissions_other_errors_are_not_retried() {
    let error_body = r#"{"success":false,"code":"C999","message":"boom"}"#;

    let server = StubServer::start(vec![
        Route::get("/api/admin/submissions", error_body).with_status(500),
    ]);

    rfa()
        .args([
            "--api",
            &server.base_url,
            "submissions",
            "--status",
            "PENDING",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("boom"));

    assert_eq!(server.hits().len(), 1);
}

#[test]
fn add_log_posts_then_refetches_fresh_sections() {
    let page = paged_envelope(
        &format!(
            "[{},{}]",
            transplant_row(1, 5, "Kelp", "2025-09-01"),
            transplant_row(31, 5, "Kelp", "2025-09-10"),
        ),
        2,
    );

    let server = StubServer::start(vec![
        Route::get("/api/bio/species", &species_list_body()),
        Route::get("/api/dashboard/areas/7/transplants", &page),
        Route::post(
            "/api/dashboard/areas/7/transplants",
            &data_envelope(r#"{"id":31}"#),
        ),
    ]);

    rfa()
        .args([
            "--api",
            &server.base_url,
            "add-log",
            "7",
            "--kind",
            "transplant",
            "--date",
            "2025-09-10",
            "--species",
            "5",
            "--method",
            "ROPE",
            "--count",
            "40",
            "--size",
            "12.5",
            "--status",
            "GOOD",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Transplant log #31 recorded for Kelp."))
        .stdout(predicate::str::contains("Kelp (#5) - 2 records"));

    let hits = server.hits();
    let post = hits
        .iter()
        .find(|h| h.line.starts_with("POST /api/dashboard/areas/7/transplants"))
        .expect("create request sent");
    assert!(post.body.contains(r#""method":"ROPE""#));
    assert!(post.body.contains(r#""speciesId":5"#));
    assert!(post.body.contains(r#""recordDate":"2025-09-10""#));

    // Fetch, create, refetch: the list endpoint is hit twice.
    let gets = hits
        .iter()
        .filter(|h| h.line.starts_with("GET /api/dashboard/areas/7/transplants"))
        .count();
    assert_eq!(gets, 2);
}

#[test]
fn add_log_for_unknown_species_is_a_noop() {
    let server = StubServer::start(vec![Route::get("/api/bio/species", &species_list_body())]);

    rfa()
        .args([
            "--api",
            &server.base_url,
            "add-log",
            "7",
            "--kind",
            "transplant",
            "--date",
            "2025-09-10",
            "--species",
            "404",
            "--method",
            "ROPE",
            "--status",
            "GOOD",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("unknown species"));

    // Nothing was created.
    assert!(!server.hits().iter().any(|h| h.line.starts_with("POST")));
}

#[test]
fn server_error_envelope_is_surfaced() {
    let server = StubServer::start(vec![
        Route::get("/api/dashboard/areas/7", r#"{"code":"A404","message":"area not found"}"#)
            .with_status(404),
    ]);

    rfa()
        .args(["--api", &server.base_url, "area", "7"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("area not found"));
}

#[test]
fn export_csv_writes_server_named_file() {
    let dir = temp_dir("export_csv");
    let csv_body = "id,site\n31,North Cove\n40,South Reef\n";

    let server = StubServer::start(vec![
        Route::post("/api/admin/exports/download/by-ids", csv_body).with_header(
            "Content-Disposition",
            r#"attachment; filename="submissions_2_items.csv""#,
        ),
    ]);

    rfa()
        .current_dir(&dir)
        .args([
            "--api",
            &server.base_url,
            "export",
            "--format",
            "csv",
            "--ids",
            "31,40",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("submissions_2_items.csv"));

    let content =
        fs::read_to_string(dir.join("submissions_2_items.csv")).expect("read downloaded csv");
    assert_eq!(content, csv_body);

    let hits = server.hits();
    assert!(hits[0].body.contains(r#""format":"CSV""#));
    assert!(hits[0].body.contains("[31,40]"));
}

#[test]
fn export_pdf_sends_report_type_and_prompt() {
    let dir = temp_dir("export_pdf");

    let server = StubServer::start(vec![Route::post(
        "/api/admin/reports/drafts/by-ids/pdf",
        "%PDF-1.4 stub",
    )]);

    rfa()
        .current_dir(&dir)
        .args([
            "--api",
            &server.base_url,
            "export",
            "--format",
            "pdf",
            "--ids",
            "31",
            "--prompt",
            "focus on survival rates",
        ])
        .assert()
        .success();

    let body = &server.hits()[0].body;
    assert!(body.contains(r#""reportType":"INTERNAL_DRAFT""#));
    assert!(body.contains("focus on survival rates"));

    // No server filename: the single-id fallback applies.
    let content = fs::read(dir.join("draft-report_31.pdf")).expect("read downloaded pdf");
    assert_eq!(content, b"%PDF-1.4 stub");
}

#[test]
fn log_export_writes_grouped_csv_locally() {
    let dir = temp_dir("log_export");
    let out = dir.join("transplants.csv");

    let page = paged_envelope(
        &format!(
            "[{},{},{}]",
            transplant_row(1, 5, "Kelp", "2025-09-01"),
            transplant_row(2, 7, "Sargassum", "2025-09-02"),
            transplant_row(3, 5, "Kelp", "2025-09-03"),
        ),
        3,
    );

    let server = StubServer::start(vec![Route::get(
        "/api/dashboard/areas/7/transplants",
        &page,
    )]);

    rfa()
        .args([
            "--api",
            &server.base_url,
            "log-export",
            "7",
            "--kind",
            "transplant",
            "--file",
            out.to_str().expect("utf8 path"),
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    let lines: Vec<&str> = content.lines().collect();
    // Grouped order: both Kelp rows precede the Sargassum row.
    assert!(lines[1].contains("Kelp"));
    assert!(lines[2].contains("Kelp"));
    assert!(lines[3].contains("Sargassum"));
}
