pub mod card;
pub mod state;

use contracts::domain::a001_offer::aggregate::Offer;
use leptos::prelude::*;

use self::card::OfferCard;
use self::state::create_state;
use crate::domain::a001_offer::{api, fields};
use crate::shared::components::bound::{BoundInput, BoundSelect, BoundSwitch};
use crate::shared::components::confirm_prompt::ConfirmPrompt;
use crate::shared::components::json_drawer::JsonDrawer;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::icons::icon;
use crate::shared::remote_state::ControlKind;
use crate::shared::session::UiSession;

#[component]
#[allow(non_snake_case)]
pub fn OfferList() -> impl IntoView {
    let session = UiSession::provide();
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
                    "offer_id"
                    <BoundInput binding=query.bind(ControlKind::Integer, fields::filter::offer_id()) />
                </label>
                <label class="filter-bar__field">
                    "product_id"
                    <BoundInput binding=query.bind(ControlKind::Integer, fields::filter::product_id()) />
                </label>
                <label class="filter-bar__field">
                    "Артикул"
                    <BoundInput binding=query.bind(ControlKind::Text, fields::filter::model_id()) />
                </label>
                <label class="filter-bar__field">
                    "Поставщик"
                    <BoundInput binding=query.bind(ControlKind::Text, fields::filter::supplier()) />
                </label>
                <label class="filter-bar__field">
                    "Статус"
                    <BoundSelect
                        binding=query.bind(ControlKind::EnumInteger, fields::filter::pending())
                        options=fields::pending_filter_options()
                    />
                </label>
                <label class="filter-bar__field">
                    "Удалённые"
                    <BoundSwitch binding=query.bind(ControlKind::Boolean, fields::filter::deleted()) class="toggle--danger" />
                </label>
                <button class="button button--primary" on:click=move |_| query.refresh()>
                    {icon("refresh")}
                    " Обновить"
                </button>
                <button
                    class="button button--secondary"
                    on:click=move |_| {
                        session.confirm_then(
                            "Принять все изменения цены со скидкой?",
                            "Изменения цены приняты",
                            api::accept_all_price_changes,
                        )
                    }
                >
                    "Принять все изменения цены"
                </button>
                <button
                    class="button button--secondary"
                    on:click=move |_| {
                        session.confirm_then(
                            "Пропустить все товары с низкими продажами?",
                            "Низкие продажи пропущены",
                            api::accept_all_low_sales,
                        )
                    }
                >
                    "Пропустить низкие продажи"
                </button>
                {move || query.state.loading.get().then(|| view! { <span class="loading">"Загрузка..."</span> })}
            </div>
            {pager()}
            <div class="card-grid">
                <For
                    each=move || query.state.rows.get()
                    key=|offer: &Offer| (offer.id, offer.updated_at.clone())
                    children=move |offer| view! { <OfferCard row=query.row(offer) /> }
                />
            </div>
            {pager()}
            <JsonDrawer />
            <ConfirmPrompt />
        </div>
    }
}
