use chrono::{DateTime, NaiveDate, Utc};

use crate::types::{FoundItem, FoundStatus, LostItem, LostStatus};

/// Fixed wall-clock timestamp so demos and tests are deterministic.
pub fn demo_timestamp() -> DateTime<Utc> {
    let Some(date) = NaiveDate::from_ymd_opt(2025, 1, 1) else {
        panic!("invalid demo date components");
    };
    let Some(date_time) = date.and_hms_opt(9, 0, 0) else {
        panic!("invalid demo time components");
    };
    DateTime::<Utc>::from_naive_utc_and_offset(date_time, Utc)
}

/// An open lost report with no category or description.
pub fn lost_item(id: &str, item_name: &str, location: &str, date: DateTime<Utc>) -> LostItem {
    LostItem {
        id: id.to_string(),
        item_name: item_name.to_string(),
        category: None,
        description: None,
        location_lost: location.to_string(),
        date_lost: date,
        status: LostStatus::Searching,
        matched_found_id: None,
    }
}

/// An open found report with no declared category.
pub fn found_item(id: &str, description: &str, location: &str, date: DateTime<Utc>) -> FoundItem {
    FoundItem {
        id: id.to_string(),
        description: description.to_string(),
        location_found: location.to_string(),
        date_found: date,
        status: FoundStatus::Found,
        category: None,
        matched_lost_id: None,
    }
}
