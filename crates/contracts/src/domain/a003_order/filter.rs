use serde::{Deserialize, Serialize};

use crate::domain::common::paged_filter::DEFAULT_PER_PAGE;
use crate::domain::common::PagedFilter;

/// Фильтры списка заказов (тело запроса `orders/show`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderFilter {
    pub page: u32,
    pub per_page: u32,
    pub order_id: i64,
    pub product_id: i64,
}

impl Default for OrderFilter {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: DEFAULT_PER_PAGE,
            order_id: 0,
            product_id: 0,
        }
    }
}

impl PagedFilter for OrderFilter {
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
