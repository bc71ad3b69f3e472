pub mod card;
pub mod state;

use contracts::domain::a003_order::aggregate::Order;
use leptos::prelude::*;

use self::card::OrderCard;
use self::state::create_state;
use crate::domain::a003_order::fields;
use crate::shared::components::bound::BoundInput;
use crate::shared::components::json_drawer::JsonDrawer;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::icons::icon;
use crate::shared::remote_state::ControlKind;
use crate::shared::session::UiSession;

#[component]
#[allow(non_snake_case)]
pub fn OrderList() -> impl IntoView {
    UiSession::provide();
    let query = create_state();
    let filter = query.state.filter;

    let page = Signal::derive(move || filter.with(|f| f.page));
    let per_page = Signal::derive(move || filter.with(|f| f.per_page));
    let pager = move || {
        view! {
            <PaginationControls
                page=page
                per_page=per_page
                total=query.state.total
                on_page_change=Callback::new(move |p| query.go_to_page(p))
                on_page_size_change=Callback::new(move |n| query.resize(n))
            />
        }
    };

    view! {
        <div class="list-screen">
            <div class="filter-bar">
                <label class="filter-bar__field">
                    "order_id"
                    <BoundInput binding=query.bind(ControlKind::Integer, fields::order_id()) />
                </label>
                <label class="filter-bar__field">
                    "product_id"
                    <BoundInput binding=query.bind(ControlKind::Integer, fields::product_id()) />
                </label>
                <button class="button button--primary" on:click=move |_| query.refresh()>
                    {icon("refresh")}
                    " Обновить"
                </button>
                {move || query.state.loading.get().then(|| view! { <span class="loading">"Загрузка..."</span> })}
            </div>
            {pager()}
            <div class="card-grid">
                <For
                    each=move || query.state.rows.get()
                    key=|order: &Order| (order.id, order.updated_at.clone())
                    children=move |order| view! { <OrderCard order=order /> }
                />
            </div>
            {pager()}
            <JsonDrawer />
        </div>
    }
}
