use contracts::domain::a003_order::aggregate::Order;
use contracts::domain::a003_order::filter::OrderFilter;

use crate::shared::notifications::use_notifications;
use crate::shared::remote_state::QueryEngine;

pub type OrderQuery = QueryEngine<OrderFilter, Order>;

pub fn create_state() -> OrderQuery {
    QueryEngine::new(use_notifications())
}
