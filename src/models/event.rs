//! Event model (volunteering actions, community events)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

/// Summary of the user who published an event.
///
/// Carried as a back-reference inside [`EventRecord`]; the engine only ever
/// reads it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatorSummary {
    pub id: Uuid,
    pub display_name: String,
    /// Rating proxy accumulated across past events; `None` until first rated.
    pub points_as_creator: Option<f64>,
}

/// One event as delivered by the event service.
///
/// Records are created fresh on every fetch and never mutated here; the
/// engine only computes views over a given snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventRecord {
    pub id: Uuid,
    pub name: String,
    pub city: String,
    pub address: String,
    /// Scheduled start; `None` when the upstream value was missing or unparsable.
    #[serde(default, deserialize_with = "lenient_datetime")]
    pub start: Option<DateTime<Utc>>,
    /// Scheduled end; same leniency as `start`.
    #[serde(default, deserialize_with = "lenient_datetime")]
    pub end: Option<DateTime<Utc>>,
    /// Points awarded for attendance.
    pub price: i64,
    pub creator: CreatorSummary,
    /// Distance from the viewer, present only when the location provider
    /// supplied one.
    #[serde(default)]
    pub distance: Option<f64>,
}

impl EventRecord {
    /// Event length in whole minutes.
    ///
    /// `None` when either endpoint is unusable or the pair is inverted, so a
    /// malformed record can never satisfy a duration filter.
    pub fn duration_minutes(&self) -> Option<i64> {
        let start = self.start?;
        let end = self.end?;
        let minutes = (end - start).num_minutes();
        if minutes < 0 {
            None
        } else {
            Some(minutes)
        }
    }

    /// Creator rating, when the creator has been rated at all.
    pub fn creator_rating(&self) -> Option<f64> {
        self.creator.points_as_creator
    }
}

/// Accept RFC 3339 timestamps, mapping anything unparsable to `None` so one
/// bad record cannot fail a whole snapshot.
fn lenient_datetime<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.and_then(|s| {
        DateTime::parse_from_rfc3339(&s)
            .ok()
            .map(|dt| dt.with_timezone(&Utc))
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn record(start: Option<&str>, end: Option<&str>) -> EventRecord {
        serde_json::from_value(serde_json::json!({
            "id": "7f2c1a90-3a65-4a84-9d9b-6c2f58b2a001",
            "name": "Park cleanup",
            "city": "Brno",
            "address": "Lužánky 1",
            "start": start,
            "end": end,
            "price": 20,
            "creator": {
                "id": "7f2c1a90-3a65-4a84-9d9b-6c2f58b2a002",
                "display_name": "spolek-zeleň",
                "points_as_creator": 4.5
            }
        }))
        .expect("record fixture")
    }

    #[test]
    fn test_parses_rfc3339_dates() {
        let e = record(Some("2031-05-01T10:00:00Z"), Some("2031-05-01T11:30:00Z"));
        assert_eq!(e.start, Some(Utc.with_ymd_and_hms(2031, 5, 1, 10, 0, 0).unwrap()));
        assert_eq!(e.duration_minutes(), Some(90));
    }

    #[test]
    fn test_malformed_date_becomes_none() {
        let e = record(Some("next tuesday"), Some("2031-05-01T11:30:00Z"));
        assert_eq!(e.start, None);
        assert_eq!(e.duration_minutes(), None);
    }

    #[test]
    fn test_missing_dates_tolerated() {
        let e = record(None, None);
        assert_eq!(e.start, None);
        assert_eq!(e.end, None);
        assert_eq!(e.duration_minutes(), None);
    }

    #[test]
    fn test_inverted_range_has_no_duration() {
        let e = record(Some("2031-05-01T11:30:00Z"), Some("2031-05-01T10:00:00Z"));
        assert_eq!(e.duration_minutes(), None);
    }

    #[test]
    fn test_distance_defaults_to_none() {
        let e = record(Some("2031-05-01T10:00:00Z"), Some("2031-05-01T11:30:00Z"));
        assert_eq!(e.distance, None);
    }
}
