//! 演示数据目录
//!
//! 服务端返回的固定价格列表、支持语言列表以及演示商户资料。
//! 数据在启动时构建一次，之后只读。

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;

use crate::models::{BusinessType, TrendDirection, VerificationStatus, Vendor, VendorLocation};

/// 商品价格记录
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceRecord {
    pub id: String,
    pub commodity: String,
    pub variety: String,
    pub market: String,
    pub state: String,
    /// 单位价格（卢比）
    pub price: f64,
    pub unit: String,
    pub last_updated: DateTime<Utc>,
    pub trend: TrendDirection,
    /// 相对上一交易日的涨跌幅（百分比）
    pub change: f64,
}

/// 支持的语言
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Language {
    pub code: String,
    pub name: String,
    pub native_name: String,
}

/// 演示目录：价格与语言
#[derive(Debug, Clone)]
pub struct MockCatalog {
    prices: Vec<PriceRecord>,
    languages: Vec<Language>,
}

impl MockCatalog {
    /// 使用自定义数据构建目录
    pub fn new(prices: Vec<PriceRecord>, languages: Vec<Language>) -> Self {
        Self { prices, languages }
    }

    /// 内置演示数据
    pub fn demo() -> Self {
        Self::new(demo_prices(), demo_languages())
    }

    /// 按商品名称搜索
    ///
    /// 查询去除首尾空白后做大小写不敏感的子串匹配；空查询返回全部记录
    pub fn search(&self, query: &str) -> Vec<PriceRecord> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return self.prices.clone();
        }

        self.prices
            .iter()
            .filter(|record| record.commodity.to_lowercase().contains(&needle))
            .cloned()
            .collect()
    }

    pub fn prices(&self) -> &[PriceRecord] {
        &self.prices
    }

    pub fn languages(&self) -> &[Language] {
        &self.languages
    }

    /// 按语言代码查找
    pub fn language(&self, code: &str) -> Option<&Language> {
        self.languages.iter().find(|lang| lang.code == code)
    }
}

impl Default for MockCatalog {
    fn default() -> Self {
        Self::demo()
    }
}

/// 演示数据的统一更新时间
fn demo_timestamp() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0)
        .single()
        .unwrap_or_default()
}

#[allow(clippy::too_many_arguments)]
fn price(
    id: &str,
    commodity: &str,
    variety: &str,
    market: &str,
    state: &str,
    price: f64,
    trend: TrendDirection,
    change: f64,
) -> PriceRecord {
    PriceRecord {
        id: id.to_string(),
        commodity: commodity.to_string(),
        variety: variety.to_string(),
        market: market.to_string(),
        state: state.to_string(),
        price,
        unit: "quintal".to_string(),
        last_updated: demo_timestamp(),
        trend,
        change,
    }
}

fn demo_prices() -> Vec<PriceRecord> {
    use TrendDirection::{Falling, Rising, Stable};

    vec![
        price("1", "Rice", "Basmati", "Karnal", "Haryana", 4200.0, Rising, 2.5),
        price("2", "Wheat", "Sharbati", "Indore", "Madhya Pradesh", 2350.0, Stable, 0.0),
        price("3", "Onion", "Red", "Lasalgaon", "Maharashtra", 1800.0, Falling, -3.2),
        price("4", "Tomato", "Hybrid", "Kolar", "Karnataka", 1500.0, Rising, 5.1),
        price("5", "Potato", "Jyoti", "Agra", "Uttar Pradesh", 1200.0, Stable, 0.4),
        price("6", "Cotton", "Shankar-6", "Rajkot", "Gujarat", 6800.0, Falling, -1.8),
        price("7", "Soybean", "Yellow", "Latur", "Maharashtra", 4600.0, Rising, 1.2),
    ]
}

fn demo_languages() -> Vec<Language> {
    [
        ("en", "English", "English"),
        ("hi", "Hindi", "हिन्दी"),
        ("bn", "Bengali", "বাংলা"),
        ("te", "Telugu", "తెలుగు"),
        ("mr", "Marathi", "मराठी"),
        ("ta", "Tamil", "தமிழ்"),
        ("gu", "Gujarati", "ગુજરાતી"),
        ("kn", "Kannada", "ಕನ್ನಡ"),
        ("ml", "Malayalam", "മലയാളം"),
        ("pa", "Punjabi", "ਪੰਜਾਬੀ"),
        ("or", "Odia", "ଓଡ଼ିଆ"),
    ]
    .into_iter()
    .map(|(code, name, native_name)| Language {
        code: code.to_string(),
        name: name.to_string(),
        native_name: native_name.to_string(),
    })
    .collect()
}

/// 构建演示商户资料，`id` 取调用方传入的值
pub fn demo_vendor_profile(vendor_id: &str) -> Vendor {
    let joined = demo_timestamp();

    Vendor {
        id: vendor_id.to_string(),
        email: "demo.vendor@mandi.example".to_string(),
        phone_number: Some("+91-9876543210".to_string()),
        name: "Demo Vendor".to_string(),
        business_name: Some("Demo Agro Traders".to_string()),
        business_type: BusinessType::Farmer,
        location: Json(VendorLocation {
            state: "Maharashtra".to_string(),
            district: "Nashik".to_string(),
            market: Some("Lasalgaon".to_string()),
            pincode: Some("422306".to_string()),
            latitude: None,
            longitude: None,
        }),
        preferred_language: "hi".to_string(),
        secondary_languages: vec!["en".to_string(), "mr".to_string()],
        verification_status: VerificationStatus::Verified,
        trust_score: 4.5,
        total_trades: 42,
        is_active: true,
        last_active_at: Some(Utc::now()),
        created_at: joined,
        updated_at: joined,
    }
}
