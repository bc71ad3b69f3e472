use contracts::domain::a002_product::aggregate::Product;
use contracts::domain::a002_product::filter::ProductFilter;

use crate::shared::notifications::use_notifications;
use crate::shared::remote_state::QueryEngine;

pub type ProductQuery = QueryEngine<ProductFilter, Product>;

pub fn create_state() -> ProductQuery {
    QueryEngine::new(use_notifications())
}
