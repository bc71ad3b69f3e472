use serde::{Deserialize, Serialize};

use crate::domain::common::ListedRecord;

/// Товар магазина
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
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
    /// 1 = вес инициализирован, 0 = нет
    #[serde(default)]
    pub inited_weight: i32,
    #[serde(default)]
    pub tips: String,

    // Статистика
    #[serde(default)]
    pub uv30: i64,
    #[serde(default)]
    pub sales30: i64,
    #[serde(default)]
    pub price: i64,
    /// Дополнительная скидка, %
    #[serde(default)]
    pub discount: i64,

    // Склад и продажи: JSON вида {"цвет": {"размер": количество}}
    #[serde(default)]
    pub stock_count: i64,
    #[serde(default)]
    pub stock_info: String,
    #[serde(default)]
    pub sale_count: i64,
    #[serde(default)]
    pub sale_info: String,

    // Вес в граммах
    #[serde(default)]
    pub sale_weight: i64,
    #[serde(default)]
    pub weight_cal_count: i64,
    #[serde(default)]
    pub weight: i64,

    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

impl Product {
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }

    pub fn is_weight_inited(&self) -> bool {
        self.inited_weight != 0
    }

    pub fn has_tips(&self) -> bool {
        !self.tips.trim().is_empty()
    }

    /// Средний вес единицы по продажам, кг
    pub fn average_sale_weight_kg(&self) -> f64 {
        if self.weight_cal_count == 0 {
            return 0.0;
        }
        self.sale_weight as f64 / 1000.0 / self.weight_cal_count as f64
    }
}

impl ListedRecord for Product {
    const COLLECTION: &'static str = "products";

    fn record_id(&self) -> i64 {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product() -> Product {
        serde_json::from_str(r#"{"id": 1, "offer_id": 2, "product_id": 3, "pending": 0}"#).unwrap()
    }

    #[test]
    fn test_average_sale_weight() {
        let mut p = product();
        assert_eq!(p.average_sale_weight_kg(), 0.0);
        p.sale_weight = 3000;
        p.weight_cal_count = 4;
        assert!((p.average_sale_weight_kg() - 0.75).abs() < 1e-9);
    }

    #[test]
    fn test_flags() {
        let mut p = product();
        assert!(!p.is_weight_inited());
        p.inited_weight = 1;
        assert!(p.is_weight_inited());
        p.tips = "  ".into();
        assert!(!p.has_tips());
    }
}
