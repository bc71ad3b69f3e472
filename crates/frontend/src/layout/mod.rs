pub mod global_context;
pub mod tabs;

use leptos::prelude::*;

use self::tabs::{TabBar, TabContent};

/// Main application shell: tab bar on top, active screen below
#[component]
pub fn Shell() -> impl IntoView {
    view! {
        <div class="app-layout">
            <TabBar />
            <div class="app-main">
                <TabContent />
            </div>
        </div>
    }
}
