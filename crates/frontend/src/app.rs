use crate::layout::global_context::AppGlobalContext;
use crate::layout::Shell;
use crate::shared::config::ConfigContext;
use crate::shared::notifications::{Notifications, ToastHost};
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Toasts are shared by every screen
    let notifications = Notifications::new();
    provide_context(notifications);

    // URL templates and SALE2STOCK, loaded once
    ConfigContext::provide(notifications);

    let ctx = AppGlobalContext::new();
    provide_context(ctx);
    ctx.init_router_integration();

    view! {
        <Shell />
        <ToastHost />
    }
}
