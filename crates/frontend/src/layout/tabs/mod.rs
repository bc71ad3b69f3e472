//! Tabs of the dashboard
//!
//! Содержит:
//! - `registry` - маппинг TabKey → View
//! - `tab_labels` - заголовки табов
//!
//! Only the active tab is mounted; switching unmounts the previous screen
//! together with its session and filters.

pub mod registry;
pub mod tab_labels;

use leptos::prelude::*;

use self::registry::render_tab_content;
use self::tab_labels::tab_label;
use crate::layout::global_context::use_global_context;
use crate::shared::icons::icon;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TabKey {
    #[default]
    Offers,
    Products,
    Orders,
}

impl TabKey {
    pub const ALL: [TabKey; 3] = [TabKey::Offers, TabKey::Products, TabKey::Orders];

    pub fn as_str(self) -> &'static str {
        match self {
            TabKey::Offers => "offers",
            TabKey::Products => "products",
            TabKey::Orders => "orders",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tab| tab.as_str() == key)
    }
}

#[component]
pub fn TabBar() -> impl IntoView {
    let ctx = use_global_context();

    view! {
        <nav class="tabs">
            {TabKey::ALL
                .into_iter()
                .map(|key| {
                    view! {
                        <button
                            class="tabs__tab"
                            class:tabs__tab--active=move || ctx.active.get() == key
                            on:click=move |_| ctx.activate_tab(key)
                        >
                            {icon(key.as_str())}
                            {tab_label(key)}
                        </button>
                    }
                })
                .collect_view()}
        </nav>
    }
}

/// Content of the active tab, remounted on every switch
#[component]
pub fn TabContent() -> impl IntoView {
    let ctx = use_global_context();

    view! { <div class="tabs__item">{move || render_tab_content(ctx.active.get())}</div> }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_keys() {
        for tab in TabKey::ALL {
            assert_eq!(TabKey::from_key(tab.as_str()), Some(tab));
        }
        assert_eq!(TabKey::from_key("a001_connection_1c"), None);
        assert_eq!(TabKey::default(), TabKey::Offers);
    }
}
