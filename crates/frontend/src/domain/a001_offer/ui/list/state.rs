use contracts::domain::a001_offer::aggregate::Offer;
use contracts::domain::a001_offer::filter::OfferFilter;

use crate::shared::notifications::use_notifications;
use crate::shared::remote_state::QueryEngine;

pub type OfferQuery = QueryEngine<OfferFilter, Offer>;

/// Default filters; the first page is requested right away
pub fn create_state() -> OfferQuery {
    QueryEngine::new(use_notifications())
}
