//! Common utilities for matcher benchmarks
//!
//! Deterministic synthetic lost/found collections. Records cycle through a
//! small vocabulary of item names, locations and colors so every size
//! produces a realistic mix of strong, weak and filtered-out pairs.

#![allow(dead_code)]

use chrono::{DateTime, Duration, TimeZone, Utc};
use lostfound::{FoundItem, FoundStatus, LostItem, LostStatus};

pub const ITEM_NAMES: &[&str] = &[
    "กุญแจ",
    "กระเป๋าสตางค์",
    "iphone 13",
    "หูฟัง airpods",
    "ขวดน้ำ",
    "บัตรนักศึกษา",
    "เสื้อกันหนาว",
    "เครื่องคิดเลข casio",
    "ร่ม",
    "กระเป๋าเป้",
];

pub const FOUND_DESCRIPTIONS: &[&str] = &[
    "พวงกุญแจ มีสามดอก",
    "กระเป๋าสตางค์หนัง",
    "โทรศัพท์ iphone จอแตก",
    "กล่องหูฟัง airpods",
    "กระบอกน้ำสแตนเลส",
    "บัตรนักศึกษา คณะวิศวะ",
    "เสื้อ hoodie",
    "เครื่องคิดเลข",
    "ร่มพับ",
    "เป้ jansport",
];

pub const LOCATIONS: &[&str] = &[
    "สนามกีฬา",
    "โรงอาหาร",
    "ห้องสมุด",
    "อาคาร 3",
    "ห้องน้ำชั้น 2",
    "canteen",
    "library",
    "ที่จอดรถ",
];

pub const COLORS: &[&str] = &["สีดำ", "สีขาว", "สีแดง", "black", "blue"];

pub fn base_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 1, 9, 0, 0)
        .single()
        .expect("valid base time")
}

/// `count` open lost reports spread over 60 days.
pub fn create_lost_items(count: usize) -> Vec<LostItem> {
    (0..count)
        .map(|i| LostItem {
            id: format!("lost-{i}"),
            item_name: ITEM_NAMES[i % ITEM_NAMES.len()].to_string(),
            category: None,
            description: Some(format!(
                "{} {}",
                COLORS[i % COLORS.len()],
                ITEM_NAMES[(i + 3) % ITEM_NAMES.len()]
            )),
            location_lost: LOCATIONS[i % LOCATIONS.len()].to_string(),
            date_lost: base_time() + Duration::hours((i as i64 * 7) % (60 * 24)),
            status: LostStatus::Searching,
            matched_found_id: None,
        })
        .collect()
}

/// `count` found reports spread over 60 days; every tenth is already returned.
pub fn create_found_items(count: usize) -> Vec<FoundItem> {
    (0..count)
        .map(|i| FoundItem {
            id: format!("found-{i}"),
            description: format!(
                "{} {}",
                FOUND_DESCRIPTIONS[i % FOUND_DESCRIPTIONS.len()],
                COLORS[(i + 1) % COLORS.len()]
            ),
            location_found: LOCATIONS[(i + 2) % LOCATIONS.len()].to_string(),
            date_found: base_time() + Duration::hours((i as i64 * 11) % (60 * 24)),
            status: if i % 10 == 9 {
                FoundStatus::Returned
            } else {
                FoundStatus::Found
            },
            category: None,
            matched_lost_id: None,
        })
        .collect()
}
