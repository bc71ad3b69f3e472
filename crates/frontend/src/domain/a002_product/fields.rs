//! Editable fields of a product card and keys of the products filter

use contracts::domain::a002_product::aggregate::Product;
use contracts::domain::a002_product::filter::ProductFilter;
use contracts::domain::common::PendingState;

use crate::shared::remote_state::Field;

pub fn pending() -> Field<Product, i32> {
    Field::new("pending", |p: &Product| p.pending, |p, v| p.pending = v)
}

pub fn deleted_at() -> Field<Product, Option<String>> {
    Field::new("deleted_at", |p: &Product| p.deleted_at.clone(), |p, v| p.deleted_at = v)
}

/// Stored as 1/0
pub fn inited_weight() -> Field<Product, bool> {
    Field::new("inited_weight", |p: &Product| p.is_weight_inited(), |p, v| {
        p.inited_weight = i32::from(v)
    })
}

pub fn tips() -> Field<Product, String> {
    Field::new("tips", |p: &Product| p.tips.clone(), |p, v| p.tips = v)
}

pub fn offer_id() -> Field<Product, i64> {
    Field::new("offer_id", |p: &Product| p.offer_id, |p, v| p.offer_id = v)
}

pub fn discount() -> Field<Product, i64> {
    Field::new("discount", |p: &Product| p.discount, |p, v| p.discount = v)
}

pub fn stock_info() -> Field<Product, String> {
    Field::new("stock_info", |p: &Product| p.stock_info.clone(), |p, v| p.stock_info = v)
}

pub fn sale_info() -> Field<Product, String> {
    Field::new("sale_info", |p: &Product| p.sale_info.clone(), |p, v| p.sale_info = v)
}

pub fn pending_label(state: PendingState) -> &'static str {
    match state {
        PendingState::Any => "Все",
        PendingState::Normal => "Норма",
        PendingState::NeedsReview => "На проверке",
        PendingState::Withdrawn => "К снятию",
    }
}

pub fn pending_options() -> Vec<(i64, String)> {
    PendingState::record_states()
        .into_iter()
        .map(|s| (i64::from(s.code()), pending_label(s).to_string()))
        .collect()
}

pub fn pending_filter_options() -> Vec<(i64, String)> {
    let any = PendingState::Any;
    std::iter::once((i64::from(any.code()), pending_label(any).to_string()))
        .chain(pending_options())
        .collect()
}

pub fn inited_weight_filter_options() -> Vec<(i64, String)> {
    vec![
        (-1, "Все".to_string()),
        (1, "Вес задан".to_string()),
        (0, "Вес не задан".to_string()),
    ]
}

pub mod filter {
    use super::*;

    pub fn offer_id() -> Field<ProductFilter, i64> {
        Field::new("offer_id", |f: &ProductFilter| f.offer_id, |f, v| f.offer_id = v)
    }

    pub fn product_id() -> Field<ProductFilter, i64> {
        Field::new("product_id", |f: &ProductFilter| f.product_id, |f, v| f.product_id = v)
    }

    pub fn inited_weight() -> Field<ProductFilter, i32> {
        Field::new("inited_weight", |f: &ProductFilter| f.inited_weight, |f, v| f.inited_weight = v)
    }

    pub fn pending() -> Field<ProductFilter, i32> {
        Field::new("pending", |f: &ProductFilter| f.pending, |f, v| f.pending = v)
    }

    pub fn deleted() -> Field<ProductFilter, bool> {
        Field::new("deleted", |f: &ProductFilter| f.deleted, |f, v| f.deleted = v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product() -> Product {
        serde_json::from_str(r#"{"id": 1, "offer_id": 2, "product_id": 3, "pending": 0}"#).unwrap()
    }

    #[test]
    fn test_inited_weight_is_stored_as_flag() {
        let mut p = product();
        inited_weight().set(&mut p, true);
        assert_eq!(p.inited_weight, 1);
        inited_weight().set(&mut p, false);
        assert_eq!(p.inited_weight, 0);
        assert!(!inited_weight().get(&p));
    }

    #[test]
    fn test_withdrawn_label_differs_from_offers() {
        assert_eq!(pending_label(PendingState::Withdrawn), "К снятию");
        assert_eq!(pending_filter_options().len(), 4);
    }
}
