use super::*;
use kurbo::Point;
use std::cell::Cell;

#[test]
fn identical_keys_compute_once_within_ttl() {
    let mut memo = Memoizer::<u32, u32>::new(8, Duration::from_secs(30));
    let calls = Cell::new(0);
    let t0 = Instant::now();
    let square = |k: &u32| {
        calls.set(calls.get() + 1);
        k * k
    };

    assert_eq!(memo.get_or_compute_at(3, t0, square), 9);
    assert_eq!(
        memo.get_or_compute_at(3, t0 + Duration::from_secs(29), square),
        9
    );
    assert_eq!(calls.get(), 1);
    assert_eq!(
        memo.stats(),
        CacheStats {
            hits: 1,
            misses: 1,
            evictions: 0
        }
    );
}

#[test]
fn expired_entries_recompute() {
    let mut memo = Memoizer::<&str, usize>::new(8, Duration::from_millis(30_000));
    let calls = Cell::new(0);
    let t0 = Instant::now();
    let len = |k: &&str| {
        calls.set(calls.get() + 1);
        k.len()
    };

    memo.get_or_compute_at("arc", t0, len);
    memo.get_or_compute_at("arc", t0 + Duration::from_millis(30_001), len);
    assert_eq!(calls.get(), 2);
    assert_eq!(memo.len(), 1);
}

#[test]
fn full_table_evicts_oldest_first() {
    let mut memo = Memoizer::<u32, u32>::new(2, Duration::from_secs(30));
    let t0 = Instant::now();
    memo.get_or_compute_at(1, t0, |k| *k);
    memo.get_or_compute_at(2, t0 + Duration::from_millis(1), |k| *k);
    // Hits do not refresh the stamp.
    memo.get_or_compute_at(1, t0 + Duration::from_millis(2), |k| *k);
    memo.get_or_compute_at(3, t0 + Duration::from_millis(3), |k| *k);

    assert_eq!(memo.len(), 2);
    assert!(!memo.contains(&1));
    assert!(memo.contains(&2));
    assert!(memo.contains(&3));
    assert_eq!(memo.stats().evictions, 1);
}

#[test]
fn same_stamp_breaks_ties_by_insertion_order() {
    let mut memo = Memoizer::<u32, u32>::new(2, Duration::from_secs(30));
    let t0 = Instant::now();
    memo.get_or_compute_at(7, t0, |k| *k);
    memo.get_or_compute_at(8, t0, |k| *k);
    memo.get_or_compute_at(9, t0, |k| *k);
    assert!(!memo.contains(&7));
    assert!(memo.contains(&8));
}

#[test]
fn zero_capacity_still_holds_one_entry() {
    let mut memo = Memoizer::<u32, u32>::new(0, Duration::from_secs(1));
    assert_eq!(memo.capacity(), 1);
    memo.get_or_compute(1, |k| *k);
    memo.get_or_compute(2, |k| *k);
    assert_eq!(memo.len(), 1);
}

#[test]
fn arc_key_ignores_sign_of_zero() {
    let a = ArcSpec::ChordAndAngle(Point::new(0.0, 1.0), Point::new(2.0, 1.0), 90.0);
    let b = ArcSpec::ChordAndAngle(Point::new(-0.0, 1.0), Point::new(2.0, 1.0), 90.0);
    assert_eq!(ArcKey::from(&a), ArcKey::from(&b));

    let c = ArcSpec::ThreePoint(Point::new(0.0, 1.0), Point::new(2.0, 1.0), Point::new(90.0, 0.0));
    assert_ne!(ArcKey::from(&a), ArcKey::from(&c));
}

#[test]
fn cached_solver_shares_solutions() {
    let mut cache = ArcCache::default();
    let spec = ArcSpec::ThreePoint(
        Point::new(0.0, 0.5),
        Point::new(5.5, 6.0),
        Point::new(0.0, 11.5),
    );
    let first = solve_arc_cached(&mut cache, &spec);
    let second = solve_arc_cached(&mut cache, &spec);
    assert!(first.is_some());
    assert_eq!(first, second);
    assert_eq!(cache.stats().misses, 1);
    assert_eq!(cache.stats().hits, 1);

    let bad = ArcSpec::ChordAndAngle(Point::new(1.0, 1.0), Point::new(1.0, 1.0), 90.0);
    assert_eq!(solve_arc_cached(&mut cache, &bad), None);
    assert_eq!(cache.len(), 2);
}
