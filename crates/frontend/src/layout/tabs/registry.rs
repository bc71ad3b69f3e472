//! Tab content registry - маппинг TabKey → View

use leptos::prelude::*;

use super::TabKey;
use crate::domain::a001_offer::ui::list::OfferList;
use crate::domain::a002_product::ui::list::ProductList;
use crate::domain::a003_order::ui::list::OrderList;

/// Рендерит контент таба по его ключу.
pub fn render_tab_content(key: TabKey) -> AnyView {
    log::debug!("mount tab '{}'", key.as_str());
    match key {
        TabKey::Offers => view! { <OfferList /> }.into_any(),
        TabKey::Products => view! { <ProductList /> }.into_any(),
        TabKey::Orders => view! { <OrderList /> }.into_any(),
    }
}
