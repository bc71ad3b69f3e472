use serde::{Deserialize, Serialize};

use crate::domain::common::ListedRecord;

/// Заказ (только чтение)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: i64,
    pub order_id: i64,
    #[serde(default)]
    pub lg_order_id: Option<String>,
    #[serde(default)]
    pub remark: Option<String>,
    /// Вес посылки, граммы
    #[serde(default)]
    pub weight: i64,
    #[serde(default)]
    pub product_num: i64,
    #[serde(default)]
    pub item_num: i64,
    #[serde(default)]
    pub used_stock: String,
    #[serde(default)]
    pub products: String,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

impl Order {
    /// Идентификатор логистики, пустая строка считается отсутствующей
    pub fn logistics_id(&self) -> Option<&str> {
        self.lg_order_id.as_deref().filter(|s| !s.is_empty())
    }
}

impl ListedRecord for Order {
    const COLLECTION: &'static str = "orders";

    fn record_id(&self) -> i64 {
        self.id
    }
}
