//! Landing-view categorization

use std::cmp::Ordering;

use crate::config::BucketConfig;
use crate::models::{Bucket, BucketKind, EventRecord, SortKey};

use super::sort::sorted;

/// Category rows in display order.
const LANDING_ORDER: [BucketKind; 4] = [
    BucketKind::GoodReviews,
    BucketKind::Nearby,
    BucketKind::ManyPoints,
    BucketKind::All,
];

/// Build the landing-view rows from the visible set.
///
/// A named bucket is suppressed entirely when fewer than
/// `config.min_population` events qualify; "All events" always renders, even
/// empty. Previews are capped at `config.preview_len` with the full
/// qualifying count kept alongside.
pub fn build_buckets(events: &[EventRecord], config: &BucketConfig) -> Vec<Bucket> {
    LANDING_ORDER
        .iter()
        .filter_map(|&kind| {
            let qualifying = bucket_events(events, kind, None, config);
            if kind != BucketKind::All && qualifying.len() < config.min_population {
                return None;
            }
            let total = qualifying.len();
            let mut preview = qualifying;
            preview.truncate(config.preview_len);
            Some(Bucket {
                kind,
                events: preview,
                total,
            })
        })
        .collect()
}

/// Full qualifying set for one bucket, as shown on the "see all" screen.
///
/// Without an explicit key each bucket keeps its native order: rating for
/// good reviews, distance for nearby, price for many points, date for the
/// full list. Passing a key re-sorts the same qualifying set.
pub fn bucket_events(
    events: &[EventRecord],
    kind: BucketKind,
    sort: Option<SortKey>,
    config: &BucketConfig,
) -> Vec<EventRecord> {
    let qualifying = match kind {
        BucketKind::GoodReviews => sorted(events, Some(SortKey::Rating)),
        BucketKind::Nearby => {
            let mut near: Vec<EventRecord> = events
                .iter()
                .filter(|e| matches!(e.distance, Some(d) if d < config.nearby_distance_max))
                .cloned()
                .collect();
            near.sort_by(|a, b| {
                let da = a.distance.unwrap_or(f64::MAX);
                let db = b.distance.unwrap_or(f64::MAX);
                da.partial_cmp(&db).unwrap_or(Ordering::Equal)
            });
            near
        }
        BucketKind::ManyPoints => {
            let qualified: Vec<EventRecord> = events
                .iter()
                .filter(|e| e.price >= config.many_points_min)
                .cloned()
                .collect();
            sorted(&qualified, Some(SortKey::Points))
        }
        BucketKind::All => sorted(events, Some(SortKey::Date)),
    };

    match sort {
        Some(key) => sorted(&qualifying, Some(key)),
        None => qualifying,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Duration, Utc};
    use uuid::Uuid;

    use crate::models::CreatorSummary;

    fn base() -> DateTime<Utc> {
        "2031-05-01T12:00:00Z".parse().unwrap()
    }

    fn event(name: &str, price: i64, distance: Option<f64>) -> EventRecord {
        let start = base() + Duration::days(1);
        EventRecord {
            id: Uuid::new_v4(),
            name: name.to_string(),
            city: "Brno".to_string(),
            address: String::new(),
            start: Some(start),
            end: Some(start + Duration::hours(2)),
            price,
            creator: CreatorSummary {
                id: Uuid::new_v4(),
                display_name: "org".to_string(),
                points_as_creator: Some(4.0),
            },
            distance,
        }
    }

    fn config() -> BucketConfig {
        BucketConfig::default()
    }

    fn bucket_of(buckets: &[Bucket], kind: BucketKind) -> Option<&Bucket> {
        buckets.iter().find(|b| b.kind == kind)
    }

    #[test]
    fn test_gate_suppresses_bucket_below_five() {
        let events: Vec<EventRecord> = (0..4).map(|i| event(&format!("e{}", i), 80, None)).collect();
        let buckets = build_buckets(&events, &config());
        assert!(bucket_of(&buckets, BucketKind::ManyPoints).is_none());
    }

    #[test]
    fn test_gate_admits_bucket_at_exactly_five() {
        let events: Vec<EventRecord> = (0..5).map(|i| event(&format!("e{}", i), 80, None)).collect();
        let buckets = build_buckets(&events, &config());
        let many = bucket_of(&buckets, BucketKind::ManyPoints).expect("bucket shown");
        assert_eq!(many.events.len(), 5);
        assert_eq!(many.total, 5);
    }

    #[test]
    fn test_preview_capped_with_total_intact() {
        let events: Vec<EventRecord> = (0..8).map(|i| event(&format!("e{}", i), 80, None)).collect();
        let buckets = build_buckets(&events, &config());
        let many = bucket_of(&buckets, BucketKind::ManyPoints).expect("bucket shown");
        assert_eq!(many.events.len(), 5);
        assert_eq!(many.total, 8);
        assert_eq!(bucket_events(&events, BucketKind::ManyPoints, None, &config()).len(), 8);
    }

    #[test]
    fn test_all_bucket_always_present() {
        let buckets = build_buckets(&[], &config());
        assert_eq!(buckets.len(), 1);
        assert_eq!(buckets[0].kind, BucketKind::All);
        assert!(buckets[0].events.is_empty());
        assert_eq!(buckets[0].total, 0);
    }

    #[test]
    fn test_many_points_threshold_is_inclusive() {
        let mut events: Vec<EventRecord> =
            (0..6).map(|i| event(&format!("rich{}", i), 50, None)).collect();
        events.extend((0..3).map(|i| event(&format!("poor{}", i), 49, None)));

        let many = bucket_events(&events, BucketKind::ManyPoints, None, &config());
        assert_eq!(many.len(), 6);
        assert!(many.iter().all(|e| e.price >= 50));

        let all = bucket_events(&events, BucketKind::All, None, &config());
        assert_eq!(all.len(), 9);
    }

    #[test]
    fn test_nearby_excludes_missing_distance() {
        let mut events: Vec<EventRecord> =
            (0..5).map(|i| event(&format!("near{}", i), 20, Some(i as f64))).collect();
        events.push(event("unlocated", 20, None));
        events.push(event("far", 20, Some(25.0)));

        let nearby = bucket_events(&events, BucketKind::Nearby, None, &config());
        assert_eq!(nearby.len(), 5);
        assert!(nearby.iter().all(|e| e.distance.unwrap() < 10.0));
    }

    #[test]
    fn test_nearby_ordered_by_distance() {
        let events = vec![
            event("far", 20, Some(8.0)),
            event("close", 20, Some(0.5)),
            event("mid", 20, Some(3.0)),
            event("closer", 20, Some(1.0)),
            event("edge", 20, Some(9.9)),
        ];
        let nearby = bucket_events(&events, BucketKind::Nearby, None, &config());
        let names: Vec<&str> = nearby.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["close", "closer", "mid", "far", "edge"]);
    }

    #[test]
    fn test_see_all_resorts_on_demand() {
        let mut events: Vec<EventRecord> = (0..6i64)
            .map(|i| {
                let mut e = event(&format!("e{}", i), 50 + i, None);
                e.start = Some(base() + Duration::days(10 - i));
                e.end = e.start.map(|s| s + Duration::hours(2));
                e
            })
            .collect();
        events.rotate_left(2);

        let by_points = bucket_events(&events, BucketKind::ManyPoints, None, &config());
        assert!(by_points.windows(2).all(|w| w[0].price >= w[1].price));

        let by_date = bucket_events(&events, BucketKind::ManyPoints, Some(SortKey::Date), &config());
        assert!(by_date.windows(2).all(|w| w[0].start <= w[1].start));
    }
}
