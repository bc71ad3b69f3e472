use serde::{Deserialize, Serialize};

use crate::domain::common::paged_filter::DEFAULT_PER_PAGE;
use crate::domain::common::{PagedFilter, PendingState};

/// Фильтр по инициализации веса: -1 все, 1 инициализирован, 0 нет
pub const INITED_WEIGHT_ANY: i32 = -1;

/// Фильтры списка товаров (тело запроса `products/show`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductFilter {
    pub page: u32,
    pub per_page: u32,
    pub offer_id: i64,
    pub product_id: i64,
    pub inited_weight: i32,
    pub pending: i32,
    pub deleted: bool,
}

impl Default for ProductFilter {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: DEFAULT_PER_PAGE,
            offer_id: 0,
            product_id: 0,
            inited_weight: INITED_WEIGHT_ANY,
            pending: PendingState::Any.code(),
            deleted: false,
        }
    }
}

impl PagedFilter for ProductFilter {
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
