//! Editable fields of an offer card and keys of the offers filter

use contracts::domain::a001_offer::aggregate::Offer;
use contracts::domain::a001_offer::filter::OfferFilter;
use contracts::domain::common::PendingState;

use crate::shared::remote_state::Field;

pub fn pending() -> Field<Offer, i32> {
    Field::new("pending", |o: &Offer| o.pending, |o, v| o.pending = v)
}

pub fn deleted_at() -> Field<Offer, Option<String>> {
    Field::new("deleted_at", |o: &Offer| o.deleted_at.clone(), |o, v| o.deleted_at = v)
}

pub fn tips() -> Field<Offer, String> {
    Field::new("tips", |o: &Offer| o.tips.clone(), |o, v| o.tips = v)
}

pub fn product_id() -> Field<Offer, i64> {
    Field::new("product_id", |o: &Offer| o.product_id, |o, v| o.product_id = v)
}

pub fn model_id() -> Field<Offer, String> {
    Field::new("model_id", |o: &Offer| o.model_id.clone(), |o, v| o.model_id = v)
}

pub fn pending_label(state: PendingState) -> &'static str {
    match state {
        PendingState::Any => "Все",
        PendingState::Normal => "Норма",
        PendingState::NeedsReview => "На проверке",
        PendingState::Withdrawn => "Не выставлен",
    }
}

/// Options of the per-card status select
pub fn pending_options() -> Vec<(i64, String)> {
    PendingState::record_states()
        .into_iter()
        .map(|s| (i64::from(s.code()), pending_label(s).to_string()))
        .collect()
}

/// Options of the filter status select, `Any` first
pub fn pending_filter_options() -> Vec<(i64, String)> {
    let any = PendingState::Any;
    std::iter::once((i64::from(any.code()), pending_label(any).to_string()))
        .chain(pending_options())
        .collect()
}

pub mod filter {
    use super::*;

    pub fn offer_id() -> Field<OfferFilter, i64> {
        Field::new("offer_id", |f: &OfferFilter| f.offer_id, |f, v| f.offer_id = v)
    }

    pub fn product_id() -> Field<OfferFilter, i64> {
        Field::new("product_id", |f: &OfferFilter| f.product_id, |f, v| f.product_id = v)
    }

    pub fn model_id() -> Field<OfferFilter, String> {
        Field::new("model_id", |f: &OfferFilter| f.model_id.clone(), |f, v| f.model_id = v)
    }

    pub fn supplier() -> Field<OfferFilter, String> {
        Field::new("supplier", |f: &OfferFilter| f.supplier.clone(), |f, v| f.supplier = v)
    }

    pub fn pending() -> Field<OfferFilter, i32> {
        Field::new("pending", |f: &OfferFilter| f.pending, |f, v| f.pending = v)
    }

    pub fn deleted() -> Field<OfferFilter, bool> {
        Field::new("deleted", |f: &OfferFilter| f.deleted, |f, v| f.deleted = v)
    }
}
