use serde::{Deserialize, Serialize};

/// Тело `POST <collection>/tips`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TipsUpdate {
    pub id: i64,
    pub tips: String,
}

/// Какое JSON-поле товара перезаписывается
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InfoColumn {
    StockInfo,
    SaleInfo,
}

/// Тело `POST products/update_info`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InfoUpdate {
    pub id: i64,
    pub column: InfoColumn,
    pub info: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_info_update_body() {
        let body = InfoUpdate {
            id: 3,
            column: InfoColumn::SaleInfo,
            info: "{}".into(),
        };
        assert_eq!(
            serde_json::to_string(&body).unwrap(),
            r#"{"id":3,"column":"sale_info","info":"{}"}"#
        );
    }
}
