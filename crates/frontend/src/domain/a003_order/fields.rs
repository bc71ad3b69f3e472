//! Keys of the orders filter; order records are read-only

use contracts::domain::a003_order::filter::OrderFilter;

use crate::shared::remote_state::Field;

pub fn order_id() -> Field<OrderFilter, i64> {
    Field::new("order_id", |f: &OrderFilter| f.order_id, |f, v| f.order_id = v)
}

pub fn product_id() -> Field<OrderFilter, i64> {
    Field::new("product_id", |f: &OrderFilter| f.product_id, |f, v| f.product_id = v)
}
