use crate::models::indicators::entities::IndicatorCategory;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, TS)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[ts(export, export_to = "../frontend/src/types/generated/event.ts")]
pub enum EventType {
    // Role-stratified assignments across the whole period roster
    Periodic,
    // Complete directed graph over one proker's committee
    Proker,
}

impl EventType {
    pub const PERIODIC: &'static str = "PERIODIC";
    pub const PROKER: &'static str = "PROKER";
}

impl<'de> Deserialize<'de> for EventType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            EventType::PERIODIC => Ok(EventType::Periodic),
            EventType::PROKER => Ok(EventType::Proker),
            _ => Err(serde::de::Error::custom(format!(
                "Invalid event type: '{s}'. Supported types: PERIODIC, PROKER"
            ))),
        }
    }
}

impl std::fmt::Display for EventType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EventType::Periodic => write!(f, "{}", EventType::PERIODIC),
            EventType::Proker => write!(f, "{}", EventType::PROKER),
        }
    }
}

impl std::str::FromStr for EventType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PERIODIC" => Ok(EventType::Periodic),
            "PROKER" => Ok(EventType::Proker),
            _ => Err(format!("Invalid event type: {s}")),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/event.ts")]
pub struct Event {
    pub id: i64,
    pub name: String,
    pub event_type: EventType,
    pub period_id: i64,
    pub proker_id: Option<i64>,
    // Submission window, inclusive on both ends
    pub start_date: chrono::DateTime<chrono::Utc>,
    pub end_date: chrono::DateTime<chrono::Utc>,
    pub is_open: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl Event {
    /// Whether submissions are accepted at `now`: the open flag is set and
    /// `now` falls inside the inclusive date window.
    pub fn accepts_submissions(&self, now: chrono::DateTime<chrono::Utc>) -> bool {
        self.is_open && now >= self.start_date && now <= self.end_date
    }
}

// Indicator frozen into an event at creation time
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/event.ts")]
pub struct IndicatorSnapshot {
    pub id: i64,
    pub event_id: i64,
    pub indicator_id: i64,
    pub indicator_name: String,
    pub category: IndicatorCategory,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn event(is_open: bool, start: i64, end: i64) -> Event {
        Event {
            id: 1,
            name: "Evaluasi Tengah Periode".to_string(),
            event_type: EventType::Periodic,
            period_id: 1,
            proker_id: None,
            start_date: Utc.timestamp_opt(start, 0).unwrap(),
            end_date: Utc.timestamp_opt(end, 0).unwrap(),
            is_open,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_window_is_inclusive_on_both_ends() {
        let e = event(true, 100, 200);
        assert!(e.accepts_submissions(Utc.timestamp_opt(100, 0).unwrap()));
        assert!(e.accepts_submissions(Utc.timestamp_opt(200, 0).unwrap()));
        assert!(!e.accepts_submissions(Utc.timestamp_opt(99, 0).unwrap()));
        assert!(!e.accepts_submissions(Utc.timestamp_opt(201, 0).unwrap()));
    }

    #[test]
    fn test_closed_event_rejects_even_inside_window() {
        let e = event(false, 100, 200);
        assert!(!e.accepts_submissions(Utc.timestamp_opt(150, 0).unwrap()));
    }
}
