use reefadmin::core::cache::{KeyScope, QueryCache, QueryKey};
use reefadmin::models::log_kind::LogKind;
use std::cell::Cell;
use std::time::Duration;

fn logs_key(area_id: i64, kind: LogKind) -> QueryKey {
    QueryKey::AreaLogs { area_id, kind }
}

#[test]
fn second_read_is_served_from_memory() {
    let mut cache = QueryCache::new(Duration::from_secs(60));
    let fetches = Cell::new(0u32);

    for _ in 0..3 {
        let value: Vec<i64> = cache
            .get_or_fetch(logs_key(1, LogKind::Transplant), || {
                fetches.set(fetches.get() + 1);
                Ok(vec![1, 2, 3])
            })
            .expect("fetch");
        assert_eq!(value, vec![1, 2, 3]);
    }

    assert_eq!(fetches.get(), 1);
    assert!(cache.is_fresh(&logs_key(1, LogKind::Transplant)));
}

#[test]
fn invalidation_forces_a_refetch() {
    let mut cache = QueryCache::new(Duration::from_secs(60));
    let fetches = Cell::new(0u32);

    let mut read = |cache: &mut QueryCache| -> Vec<i64> {
        cache
            .get_or_fetch(logs_key(1, LogKind::Growth), || {
                fetches.set(fetches.get() + 1);
                Ok(vec![fetches.get() as i64])
            })
            .expect("fetch")
    };

    assert_eq!(read(&mut cache), vec![1]);
    assert_eq!(read(&mut cache), vec![1]);

    let hit = cache.invalidate(&KeyScope::AreaLogs(1, LogKind::Growth));
    assert_eq!(hit, 1);
    assert!(!cache.is_fresh(&logs_key(1, LogKind::Growth)));

    // The next read reconciles against the authoritative fetch.
    assert_eq!(read(&mut cache), vec![2]);
}

#[test]
fn invalidation_scope_spares_other_entries() {
    let mut cache = QueryCache::new(Duration::from_secs(60));

    cache
        .get_or_fetch(logs_key(1, LogKind::Transplant), || Ok(1i64))
        .expect("fetch");
    cache
        .get_or_fetch(logs_key(1, LogKind::Growth), || Ok(2i64))
        .expect("fetch");
    cache
        .get_or_fetch(logs_key(2, LogKind::Transplant), || Ok(3i64))
        .expect("fetch");

    let hit = cache.invalidate(&KeyScope::AreaLogs(1, LogKind::Transplant));

    assert_eq!(hit, 1);
    assert!(!cache.is_fresh(&logs_key(1, LogKind::Transplant)));
    assert!(cache.is_fresh(&logs_key(1, LogKind::Growth)));
    assert!(cache.is_fresh(&logs_key(2, LogKind::Transplant)));
}

#[test]
fn area_scope_covers_detail_and_logs() {
    let mut cache = QueryCache::new(Duration::from_secs(60));

    cache
        .get_or_fetch(QueryKey::AreaDetail { area_id: 1 }, || Ok(1i64))
        .expect("fetch");
    cache
        .get_or_fetch(logs_key(1, LogKind::Media), || Ok(2i64))
        .expect("fetch");
    cache
        .get_or_fetch(QueryKey::Species, || Ok(3i64))
        .expect("fetch");

    let hit = cache.invalidate(&KeyScope::Area(1));

    assert_eq!(hit, 2);
    assert!(cache.is_fresh(&QueryKey::Species));
}

#[test]
fn areas_scope_covers_every_area_rooted_key() {
    let mut cache = QueryCache::new(Duration::from_secs(60));

    cache
        .get_or_fetch(QueryKey::Areas { page: 1 }, || Ok(1i64))
        .expect("fetch");
    cache
        .get_or_fetch(QueryKey::AreaDetail { area_id: 4 }, || Ok(2i64))
        .expect("fetch");
    cache
        .get_or_fetch(logs_key(4, LogKind::Growth), || Ok(3i64))
        .expect("fetch");
    cache
        .get_or_fetch(
            QueryKey::Submissions {
                page: 1,
                signature: String::new(),
            },
            || Ok(4i64),
        )
        .expect("fetch");

    let hit = cache.invalidate(&KeyScope::Areas);

    assert_eq!(hit, 3);
    assert!(cache.is_fresh(&QueryKey::Submissions {
        page: 1,
        signature: String::new(),
    }));
}

#[test]
fn zero_stale_time_always_refetches() {
    let mut cache = QueryCache::new(Duration::from_secs(0));
    let fetches = Cell::new(0u32);

    for _ in 0..2 {
        cache
            .get_or_fetch(QueryKey::Species, || {
                fetches.set(fetches.get() + 1);
                Ok(fetches.get())
            })
            .expect("fetch");
    }

    assert_eq!(fetches.get(), 2);
}

#[test]
fn fetch_errors_are_not_cached() {
    let mut cache = QueryCache::new(Duration::from_secs(60));

    let err: Result<i64, _> = cache.get_or_fetch(QueryKey::Species, || {
        Err(reefadmin::errors::AppError::Api("boom".to_string()))
    });
    assert!(err.is_err());
    assert!(!cache.is_fresh(&QueryKey::Species));

    let ok: i64 = cache
        .get_or_fetch(QueryKey::Species, || Ok(7))
        .expect("fetch after error");
    assert_eq!(ok, 7);
}
