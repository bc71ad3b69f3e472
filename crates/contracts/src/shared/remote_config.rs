use serde::{Deserialize, Deserializer, Serialize};

/// Имена настроек, запрашиваемых через `get/cfg` при старте
pub const REMOTE_CONFIG_KEYS: [&str; 5] = [
    "PRODUCT_URL_PATTERN",
    "ORDER_URL_PATTERN",
    "OFFER_URL_PATTERN",
    "LG_ORDER_URL_PATTERN",
    "SALE2STOCK",
];

/// Настройки отображения, получаемые с сервера один раз
///
/// Шаблоны ссылок содержат плейсхолдеры `{OFFER_ID}`, `{PRODUCT_ID}`,
/// `{ORDER_ID}`, `{LG_ORDER_ID}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RemoteConfig {
    #[serde(rename = "PRODUCT_URL_PATTERN", default)]
    pub product_url_pattern: String,
    #[serde(rename = "ORDER_URL_PATTERN", default)]
    pub order_url_pattern: String,
    #[serde(rename = "OFFER_URL_PATTERN", default)]
    pub offer_url_pattern: String,
    #[serde(rename = "LG_ORDER_URL_PATTERN", default)]
    pub lg_order_url_pattern: String,
    /// Множитель: рекомендуемый запас = продажи за 30 дней * SALE2STOCK
    #[serde(rename = "SALE2STOCK", default, deserialize_with = "number_or_string")]
    pub sale2stock: f64,
}

impl RemoteConfig {
    pub fn offer_url(&self, offer_id: i64) -> String {
        fill(&self.offer_url_pattern, "{OFFER_ID}", offer_id)
    }

    pub fn product_url(&self, product_id: i64) -> String {
        fill(&self.product_url_pattern, "{PRODUCT_ID}", product_id)
    }

    pub fn order_url(&self, order_id: i64) -> String {
        fill(&self.order_url_pattern, "{ORDER_ID}", order_id)
    }

    pub fn lg_order_url(&self, lg_order_id: &str) -> String {
        fill(&self.lg_order_url_pattern, "{LG_ORDER_ID}", lg_order_id)
    }
}

fn fill(pattern: &str, placeholder: &str, value: impl std::fmt::Display) -> String {
    pattern.replace(placeholder, &value.to_string())
}

// Сервер отдаёт SALE2STOCK то числом, то строкой
fn number_or_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(f64),
        Text(String),
        Null,
    }

    match Raw::deserialize(deserializer)? {
        Raw::Number(n) => Ok(n),
        Raw::Text(s) => s.trim().parse().map_err(serde::de::Error::custom),
        Raw::Null => Ok(0.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_templates() {
        let cfg = RemoteConfig {
            offer_url_pattern: "https://shop/offer/{OFFER_ID}.html".into(),
            lg_order_url_pattern: "https://lg/{LG_ORDER_ID}".into(),
            ..Default::default()
        };
        assert_eq!(cfg.offer_url(42), "https://shop/offer/42.html");
        assert_eq!(cfg.lg_order_url("LP00"), "https://lg/LP00");
        assert_eq!(cfg.product_url(1), "");
    }

    #[test]
    fn test_sale2stock_accepts_string() {
        let cfg: RemoteConfig = serde_json::from_str(r#"{"SALE2STOCK":"1.5"}"#).unwrap();
        assert_eq!(cfg.sale2stock, 1.5);
        let cfg: RemoteConfig = serde_json::from_str(r#"{"SALE2STOCK":2}"#).unwrap();
        assert_eq!(cfg.sale2stock, 2.0);
    }
}
