use super::*;

const EMAIL: &str = "asha@example.in";

fn booking(id: i64, total: f64) -> BookingResponse {
    BookingResponse { booking_id: id, email: Some(EMAIL.into()), total_amount: Some(total), ..BookingResponse::default() }
}

fn cache() -> BookingCache<MemoryStore> {
    BookingCache::new(MemoryStore::default())
}

#[test]
fn record_upserts_by_booking_id() {
    let c = cache();
    c.record(&booking(1, 100.0), Some("Swift"), Some(EMAIL), 10);
    c.record(&booking(1, 150.0), None, None, 20);
    let entries = c.entries();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].booking.total_amount, Some(150.0));
    assert_eq!(entries[0].car_name.as_deref(), Some("Swift"));
    assert_eq!(entries[0].owner.as_deref(), Some(EMAIL));
    assert_eq!(entries[0].cached_at_ms, 20);
}

#[test]
fn garbage_payload_reads_as_empty() {
    let store = MemoryStore::default();
    store.set(CACHE_KEY, "{not json");
    assert!(BookingCache::new(store).entries().is_empty());
}

#[test]
fn live_fetch_is_written_through() {
    let c = cache();
    let resolved = c.resolve_one(Ok(booking(5, 900.0)), 5, 42).unwrap();
    assert_eq!(resolved.freshness, Freshness::Live);
    assert_eq!(c.get(5).map(|e| e.cached_at_ms), Some(42));
}

#[test]
fn transient_failure_serves_stale_copy() {
    let c = cache();
    c.record(&booking(5, 900.0), None, None, 42);
    let resolved = c.resolve_one(Err(ApiError::Network("offline".into())), 5, 99).unwrap();
    assert_eq!(resolved.value.booking_id, 5);
    assert_eq!(resolved.freshness, Freshness::Cached { cached_at_ms: 42 });
    assert!(resolved.freshness.is_stale());
}

#[test]
fn transient_failure_without_cache_is_an_error() {
    let c = cache();
    assert_eq!(c.resolve_one(Err(ApiError::Unavailable), 5, 99), Err(ApiError::Unavailable));
}

#[test]
fn not_found_evicts_instead_of_serving_stale() {
    let c = cache();
    c.record(&booking(5, 900.0), None, None, 42);
    let err = c.resolve_one(Err(ApiError::NotFound("gone".into())), 5, 99).unwrap_err();
    assert!(err.is_not_found());
    assert!(c.get(5).is_none());
}

#[test]
fn user_list_replaces_that_users_entries() {
    let c = cache();
    c.record(&booking(1, 100.0), Some("Swift"), Some(EMAIL), 1);
    c.record(&booking(2, 200.0), None, Some(EMAIL), 1);
    let other = BookingResponse { booking_id: 3, email: Some("ravi@example.in".into()), ..BookingResponse::default() };
    c.record(&other, None, Some("ravi@example.in"), 1);

    let resolved = c.resolve_for_user(Ok(vec![booking(1, 120.0)]), EMAIL, 50).unwrap();
    assert_eq!(resolved.freshness, Freshness::Live);

    assert!(c.get(2).is_none(), "server no longer lists booking 2");
    assert!(c.get(3).is_some(), "other users' entries untouched");
    let kept = c.get(1).unwrap();
    assert_eq!(kept.booking.total_amount, Some(120.0));
    assert_eq!(kept.car_name.as_deref(), Some("Swift"));
    assert_eq!(c.entries().len(), 2);
}

#[test]
fn user_list_falls_back_with_oldest_timestamp() {
    let c = cache();
    c.record(&booking(1, 100.0), None, Some(EMAIL), 30);
    c.record(&booking(2, 200.0), None, Some(EMAIL), 10);
    let resolved = c.resolve_for_user(Err(ApiError::from_status(502, "")), "ASHA@example.in", 99).unwrap();
    assert_eq!(resolved.value.len(), 2);
    assert_eq!(resolved.freshness, Freshness::Cached { cached_at_ms: 10 });
}

#[test]
fn user_list_hard_error_passes_through() {
    let c = cache();
    c.record(&booking(1, 100.0), None, Some(EMAIL), 30);
    let err = c.resolve_for_user(Err(ApiError::Unauthorized("expired".into())), EMAIL, 99).unwrap_err();
    assert_eq!(err, ApiError::Unauthorized("expired".into()));
}

#[test]
fn clear_drops_everything() {
    let c = cache();
    c.record(&booking(1, 100.0), None, None, 1);
    c.clear();
    assert!(c.entries().is_empty());
}
