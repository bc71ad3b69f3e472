use serde::{Deserialize, Serialize};

use crate::domain::common::ListedRecord;

// ============================================================================
// Record
// ============================================================================

/// Оффер поставщика
///
/// Цены хранятся в копейках/центах, JSON-поля (`sale_record`, `sale_info`,
/// `sku_info*`) приходят строками и показываются как есть.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Offer {
    pub id: i64,
    pub offer_id: i64,
    pub product_id: i64,
    #[serde(default)]
    pub model_id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub cover: String,
    pub pending: i32,
    #[serde(default)]
    pub deleted_at: Option<String>,
    #[serde(default)]
    pub tips: String,

    // Поставщик
    #[serde(default)]
    pub supplier: String,
    #[serde(default)]
    pub store_url: String,

    // Цены и продажи
    #[serde(default)]
    pub price: i64,
    #[serde(default)]
    pub better_price: i64,
    #[serde(default)]
    pub discount: i64,
    #[serde(default)]
    pub sale30: i64,
    #[serde(default)]
    pub sale_record: String,
    #[serde(default)]
    pub sale_info: String,

    // Сравнение версий
    #[serde(default)]
    pub sku_info: String,
    #[serde(default)]
    pub sku_info_use: String,
    #[serde(default)]
    pub detail_url: String,
    #[serde(default)]
    pub detail_url_use: String,

    // Технические поля
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
    #[serde(default)]
    pub promotion_end: Option<String>,
}

impl Offer {
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }

    pub fn has_tips(&self) -> bool {
        !self.tips.trim().is_empty()
    }
}

impl ListedRecord for Offer {
    const COLLECTION: &'static str = "offers";

    fn record_id(&self) -> i64 {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_minimal_offer() {
        let json = r#"{"id": 7, "offer_id": 100, "product_id": 200, "pending": -1, "deleted_at": null}"#;
        let offer: Offer = serde_json::from_str(json).unwrap();
        assert_eq!(offer.id, 7);
        assert_eq!(offer.pending, -1);
        assert!(!offer.is_deleted());
        assert!(!offer.has_tips());
    }

    #[test]
    fn test_mutation_path() {
        assert_eq!(Offer::mutation_path(7, "pid", "55"), "offers/pid/7/55");
        assert_eq!(Offer::show_path(), "offers/show");
    }
}
