use serde::{Deserialize, Serialize};

use crate::domain::common::paged_filter::DEFAULT_PER_PAGE;
use crate::domain::common::{PagedFilter, PendingState};

/// Фильтры списка офферов (тело запроса `offers/show`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OfferFilter {
    pub page: u32,
    pub per_page: u32,
    pub offer_id: i64,
    pub product_id: i64,
    pub model_id: String,
    pub supplier: String,
    pub pending: i32,
    pub deleted: bool,
}

impl Default for OfferFilter {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: DEFAULT_PER_PAGE,
            offer_id: 0,
            product_id: 0,
            model_id: String::new(),
            supplier: String::new(),
            pending: PendingState::Any.code(),
            deleted: false,
        }
    }
}

impl PagedFilter for OfferFilter {
    fn page(&self) -> u32 {
        self.page
    }

    fn set_page(&mut self, page: u32) {
        self.page = page;
    }

    fn per_page(&self) -> u32 {
        self.per_page
    }

    fn set_per_page(&mut self, per_page: u32) {
        self.per_page = per_page;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_body_key_order() {
        let body = serde_json::to_string(&OfferFilter::default()).unwrap();
        assert_eq!(
            body,
            r#"{"page":1,"per_page":20,"offer_id":0,"product_id":0,"model_id":"","supplier":"","pending":999,"deleted":false}"#
        );
    }
}
