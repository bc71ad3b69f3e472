use leptos::prelude::*;
use std::collections::HashMap;
use web_sys::window;

use crate::layout::tabs::TabKey;

/// Query parameter holding the active tab
const TAB_PARAM: &str = "tab";

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub active: RwSignal<TabKey>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            active: RwSignal::new(TabKey::default()),
        }
    }

    pub fn activate_tab(&self, key: TabKey) {
        if self.active.get_untracked() != key {
            log::debug!("activate tab '{}'", key.as_str());
            self.active.set(key);
        }
    }

    /// Restore the active tab from `?tab=` and keep the URL in sync with it
    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        if let Some(key) = tab_from_query(&search) {
            self.active.set(key);
        }

        let this = *self;
        Effect::new(move |_| {
            let new_url = format!("?{}", tab_query(this.active.get()));

            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();

            // Only update URL if it actually changed
            if current_search != new_url {
                if let Some(w) = window() {
                    if let Ok(history) = w.history() {
                        let _ = history.replace_state_with_url(
                            &wasm_bindgen::JsValue::NULL,
                            "",
                            Some(&new_url),
                        );
                    }
                }
            }
        });
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_global_context() -> AppGlobalContext {
    expect_context::<AppGlobalContext>()
}

fn tab_from_query(search: &str) -> Option<TabKey> {
    let params: HashMap<String, String> =
        serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
    params.get(TAB_PARAM).and_then(|key| TabKey::from_key(key))
}

fn tab_query(key: TabKey) -> String {
    serde_qs::to_string(&HashMap::from([(TAB_PARAM, key.as_str())])).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_query_round_trip() {
        assert_eq!(tab_query(TabKey::Products), "tab=products");
        assert_eq!(tab_from_query("?tab=orders"), Some(TabKey::Orders));
        assert_eq!(tab_from_query("?tab=unknown"), None);
        assert_eq!(tab_from_query(""), None);
    }
}
