//! Intake record - one accepted "add" event.

use serde::{Deserialize, Serialize};
use crate::Time;

/// A single amount of water logged at a point in time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyRecord {
    /// When the amount was added
    #[serde(with = "record_time")]
    pub time: Time,

    /// Volume in millilitres, always positive
    #[serde(deserialize_with = "positive_amount")]
    pub amount: f64,
}

impl DailyRecord {
    /// Create a record.
    pub fn new(time: Time, amount: f64) -> Self {
        Self { time, amount }
    }
}

fn positive_amount<'de, D: serde::Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    let amount = f64::deserialize(deserializer)?;
    if amount > 0.0 && amount.is_finite() {
        Ok(amount)
    } else {
        Err(serde::de::Error::custom(format!("amount must be positive, got {amount}")))
    }
}

/// `YYYY-MM-DD HH:MM:SS` timestamps, as written to the state file.
mod record_time {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%Y-%m-%d %H:%M:%S";

    pub fn serialize<S: Serializer>(time: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&time.format(FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDateTime, D::Error> {
        let s = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&s, FORMAT).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(h: u32, m: u32, s: u32) -> Time {
        NaiveDate::from_ymd_opt(2026, 10, 18).unwrap().and_hms_opt(h, m, s).unwrap()
    }

    #[test]
    fn test_record_time_format() {
        let record = DailyRecord::new(at(9, 5, 7), 650.0);
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["time"], "2026-10-18 09:05:07");
        assert_eq!(json["amount"], 650.0);
    }

    #[test]
    fn test_record_parses_integer_amount() {
        let record: DailyRecord =
            serde_json::from_str(r#"{"time": "2026-10-18 21:00:00", "amount": 500}"#).unwrap();
        assert_eq!(record.time, at(21, 0, 0));
        assert_eq!(record.amount, 500.0);
    }

    #[test]
    fn test_record_rejects_non_positive_amount() {
        for amount in ["0", "-650"] {
            let json = format!(r#"{{"time": "2026-10-18 21:00:00", "amount": {amount}}}"#);
            let parsed: Result<DailyRecord, _> = serde_json::from_str(&json);
            assert!(parsed.is_err(), "amount {amount} accepted");
        }
    }

    #[test]
    fn test_record_rejects_iso_t_separator() {
        let parsed: Result<DailyRecord, _> =
            serde_json::from_str(r#"{"time": "2026-10-18T21:00:00", "amount": 500}"#);
        assert!(parsed.is_err());
    }
}
