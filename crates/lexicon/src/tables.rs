//! Built-in keyword tables.
//!
//! Thai and English variants are listed side by side. All entries are
//! already normalized (lowercase, single spaces). English entries match whole
//! words; Thai entries match anywhere. Order matters: categories and areas
//! are scanned top to bottom and the first hit wins, so the more specific
//! groups come first (an ID card before a generic card, a wallet before a
//! generic bag, electronics before phones).

use crate::category::Category;
use crate::config::{AreaGroup, CategoryKeywords};

const CATEGORY_KEYWORDS: &[(Category, &[&str])] = &[
    (
        Category::IdCard,
        &[
            "บัตรประชาชน",
            "บัตรนักศึกษา",
            "บัตรนักเรียน",
            "บัตรพนักงาน",
            "id card",
            "student card",
            "student id",
        ],
    ),
    (
        Category::Wallet,
        &[
            "กระเป๋าสตางค์",
            "กระเป๋าเงิน",
            "ธนบัตร",
            "บัตร",
            "wallet",
            "purse",
            "money",
            "card",
        ],
    ),
    (
        Category::Electronics,
        &[
            "หูฟัง",
            "ที่ชาร์จ",
            "สายชาร์จ",
            "พาวเวอร์แบงค์",
            "แท็บเล็ต",
            "โน้ตบุ๊ค",
            "เมาส์",
            "earphone",
            "headphone",
            "airpods",
            "charger",
            "power bank",
            "powerbank",
            "ipad",
            "tablet",
            "laptop",
            "macbook",
            "keyboard",
            "mouse",
        ],
    ),
    (
        Category::Phone,
        &[
            "โทรศัพท์",
            "มือถือ",
            "สมาร์ทโฟน",
            "ไอโฟน",
            "iphone",
            "smartphone",
            "phone",
            "android",
        ],
    ),
    (
        Category::Keys,
        &["กุญแจ", "รีโมทรถ", "keychain", "keys", "key"],
    ),
    (
        Category::Bag,
        &["กระเป๋า", "เป้", "ถุงผ้า", "backpack", "bag", "tote"],
    ),
    (
        Category::Documents,
        &[
            "เอกสาร",
            "แฟ้ม",
            "พาสปอร์ต",
            "หนังสือเดินทาง",
            "document",
            "folder",
            "passport",
        ],
    ),
    (
        Category::WaterBottle,
        &["ขวดน้ำ", "กระบอกน้ำ", "แก้วน้ำ", "กระติก", "bottle", "tumbler"],
    ),
    (
        Category::Stationery,
        &[
            "สมุด",
            "ปากกา",
            "ดินสอ",
            "กล่องดินสอ",
            "หนังสือ",
            "เครื่องคิดเลข",
            "notebook",
            "pencil",
            "pen",
            "book",
            "calculator",
        ],
    ),
    (
        Category::Clothing,
        &[
            "เสื้อ",
            "กางเกง",
            "หมวก",
            "รองเท้า",
            "ถุงเท้า",
            "jacket",
            "hoodie",
            "shirt",
            "jersey",
            "hat",
            "shoe",
            "sock",
        ],
    ),
    (
        Category::Accessories,
        &[
            "นาฬิกา",
            "แว่น",
            "แหวน",
            "สร้อย",
            "กำไล",
            "ต่างหู",
            "ร่ม",
            "watch",
            "glasses",
            "necklace",
            "bracelet",
            "earring",
            "ring",
            "umbrella",
            "sunglasses",
            "smartwatch",
        ],
    ),
];

const AREA_KEYWORDS: &[(&str, &[&str])] = &[
    (
        "canteen",
        &["โรงอาหาร", "ศูนย์อาหาร", "canteen", "cafeteria", "food court"],
    ),
    (
        "sports_field",
        &[
            "สนามกีฬา",
            "สนามฟุตบอล",
            "สนามบาส",
            "สนาม",
            "โรงยิม",
            "ยิม",
            "stadium",
            "field",
            "gym",
        ],
    ),
    (
        "restroom",
        &["ห้องน้ำ", "สุขา", "toilet", "restroom", "bathroom", "wc"],
    ),
    ("library", &["ห้องสมุด", "หอสมุด", "library"]),
    ("building", &["อาคาร", "ตึก", "building", "bldg"]),
    (
        "classroom",
        &["ห้องเรียน", "ห้องแล็บ", "ห้องปฏิบัติการ", "classroom", "lab"],
    ),
    (
        "shop",
        &[
            "ร้านค้า",
            "สหกรณ์",
            "เซเว่น",
            "7-11",
            "7-eleven",
            "shop",
            "store",
            "mart",
        ],
    ),
    (
        "office",
        &["สำนักงาน", "ธุรการ", "ห้องพักครู", "ห้องครู", "office"],
    ),
    (
        "discipline_office",
        &["ห้องปกครอง", "ฝ่ายปกครอง", "งานปกครอง", "discipline"],
    ),
    ("dormitory", &["หอพัก", "หอใน", "dormitory", "dorm"]),
    (
        "parking",
        &["ที่จอดรถ", "ลานจอดรถ", "โรงจอดรถ", "parking", "car park"],
    ),
    (
        "lobby",
        &["ล็อบบี้", "โถง", "ทางเดิน", "lobby", "corridor", "hallway", "hall"],
    ),
];

const BRAND_KEYWORDS: &[&str] = &[
    "apple",
    "iphone",
    "ipad",
    "macbook",
    "airpods",
    "samsung",
    "galaxy",
    "xiaomi",
    "redmi",
    "huawei",
    "oppo",
    "vivo",
    "realme",
    "nokia",
    "sony",
    "jbl",
    "casio",
    "g-shock",
    "lenovo",
    "asus",
    "acer",
    "dell",
    "nike",
    "adidas",
    "converse",
    "puma",
    "uniqlo",
    "hydro flask",
    "ไอโฟน",
    "ซัมซุง",
    "แอปเปิ้ล",
];

const COLOR_KEYWORDS: &[&str] = &[
    "สีดำ",
    "สีขาว",
    "สีแดง",
    "สีน้ำเงิน",
    "สีฟ้า",
    "สีเขียว",
    "สีเหลือง",
    "สีชมพู",
    "สีม่วง",
    "สีส้ม",
    "สีน้ำตาล",
    "สีเทา",
    "สีทอง",
    "สีเงิน",
    "black",
    "white",
    "red",
    "blue",
    "green",
    "yellow",
    "pink",
    "purple",
    "orange",
    "brown",
    "gray",
    "grey",
    "gold",
    "silver",
];

fn owned(keywords: &[&str]) -> Vec<String> {
    keywords.iter().map(|k| (*k).to_string()).collect()
}

pub fn default_category_table() -> Vec<CategoryKeywords> {
    CATEGORY_KEYWORDS
        .iter()
        .map(|(category, keywords)| CategoryKeywords {
            category: *category,
            keywords: owned(keywords),
        })
        .collect()
}

pub fn default_area_groups() -> Vec<AreaGroup> {
    AREA_KEYWORDS
        .iter()
        .map(|(name, keywords)| AreaGroup {
            name: (*name).to_string(),
            keywords: owned(keywords),
        })
        .collect()
}

pub fn default_brand_keywords() -> Vec<String> {
    owned(BRAND_KEYWORDS)
}

pub fn default_color_keywords() -> Vec<String> {
    owned(COLOR_KEYWORDS)
}
