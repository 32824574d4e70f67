use reefadmin::core::filters::{
    SortDir, StatusFilter, SubmissionFilters, to_zero_based_page,
};
use reefadmin::models::activity::ActivityType;
use reefadmin::models::review_status::ReviewStatus;

fn params_map(filters: &SubmissionFilters) -> Vec<(String, String)> {
    filters.to_params()
}

#[test]
fn empty_filters_produce_no_params() {
    let filters = SubmissionFilters::default();
    assert!(params_map(&filters).is_empty());
}

#[test]
fn all_status_is_omitted() {
    let filters = SubmissionFilters {
        status: StatusFilter::All,
        ..SubmissionFilters::default()
    };
    assert!(!params_map(&filters).iter().any(|(k, _)| k == "status"));
}

#[test]
fn concrete_status_becomes_uppercase_code() {
    let filters = SubmissionFilters {
        status: StatusFilter::Only(ReviewStatus::Pending),
        ..SubmissionFilters::default()
    };
    let params = params_map(&filters);
    assert!(params.contains(&("status".to_string(), "PENDING".to_string())));
}

#[test]
fn status_filter_parse_accepts_lowercase_and_all() {
    assert_eq!(StatusFilter::parse("all").unwrap(), StatusFilter::All);
    assert_eq!(
        StatusFilter::parse("approved").unwrap(),
        StatusFilter::Only(ReviewStatus::Approved)
    );
    assert!(StatusFilter::parse("bogus").is_err());
}

#[test]
fn blank_keyword_is_omitted_and_trimmed() {
    let blank = SubmissionFilters {
        keyword: Some("   ".to_string()),
        ..SubmissionFilters::default()
    };
    assert!(params_map(&blank).is_empty());

    let padded = SubmissionFilters {
        keyword: Some("  reef  ".to_string()),
        ..SubmissionFilters::default()
    };
    assert!(params_map(&padded).contains(&("keyword".to_string(), "reef".to_string())));
}

#[test]
fn dates_are_truncated_to_day_precision() {
    let filters = SubmissionFilters {
        date_from: Some("2025-09-01T08:30:00".to_string()),
        date_to: Some("2025-09-30".to_string()),
        ..SubmissionFilters::default()
    };
    let params = params_map(&filters);
    assert!(params.contains(&("startDate".to_string(), "2025-09-01".to_string())));
    assert!(params.contains(&("endDate".to_string(), "2025-09-30".to_string())));
}

#[test]
fn activity_and_sort_pass_through() {
    let filters = SubmissionFilters {
        activity: Some(ActivityType::GrazerRemoval),
        sort_by: Some("submittedAt".to_string()),
        sort_dir: Some(SortDir::Desc),
        ..SubmissionFilters::default()
    };
    let params = params_map(&filters);
    assert!(params.contains(&("activityType".to_string(), "GRAZER_REMOVAL".to_string())));
    assert!(params.contains(&("sortBy".to_string(), "submittedAt".to_string())));
    assert!(params.contains(&("sortDir".to_string(), "desc".to_string())));
}

#[test]
fn page_conversion_is_one_based_to_zero_based() {
    assert_eq!(to_zero_based_page(1), 0);
    assert_eq!(to_zero_based_page(3), 2);
    // Page 0 from a script must not underflow.
    assert_eq!(to_zero_based_page(0), 0);
}

#[test]
fn signature_distinguishes_filter_combinations() {
    let a = SubmissionFilters {
        status: StatusFilter::Only(ReviewStatus::Pending),
        ..SubmissionFilters::default()
    };
    let b = SubmissionFilters {
        status: StatusFilter::Only(ReviewStatus::Approved),
        ..SubmissionFilters::default()
    };
    assert_ne!(a.signature(), b.signature());
    assert_eq!(a.signature(), a.signature());
}

#[test]
fn sort_dir_parse_rejects_unknown() {
    assert_eq!(SortDir::parse("ASC").unwrap(), SortDir::Asc);
    assert!(SortDir::parse("sideways").is_err());
}
