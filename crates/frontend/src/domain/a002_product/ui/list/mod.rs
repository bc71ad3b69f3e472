pub mod card;
pub mod state;

use contracts::domain::a002_product::aggregate::Product;
use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;

use self::card::ProductCard;
use self::state::create_state;
use crate::domain::a002_product::{api, fields};
use crate::shared::components::bound::{BoundInput, BoundSelect, BoundSwitch};
use crate::shared::components::confirm_prompt::ConfirmPrompt;
use crate::shared::components::json_drawer::JsonDrawer;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::icons::icon;
use crate::shared::remote_state::{Binding, ControlKind};
use crate::shared::session::UiSession;

fn selected_file(input: NodeRef<html::Input>) -> Option<web_sys::File> {
    input.get_untracked()?.files()?.get(0)
}

fn reset_file_input(input: NodeRef<html::Input>) {
    if let Some(el) = input.get_untracked() {
        el.set_value("");
    }
}

#[component]
#[allow(non_snake_case)]
pub fn ProductList() -> impl IntoView {
    let session = UiSession::provide();
    let notifications = session.notifications;
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

    // Discount of the downloadable spreadsheet; local to the screen
    let discount = RwSignal::new(0_i64);
    let discount_binding = Binding::new(ControlKind::Integer, move || discount.get(), move |v: i64| discount.set(v));

    let sheet_input = NodeRef::<html::Input>::new();
    let on_sheet_selected = move |_| {
        let Some(file) = selected_file(sheet_input) else {
            return;
        };
        session.ask_or_else(
            format!("Загрузить скидки из файла {}?", file.name()),
            move || {
                let Some(file) = selected_file(sheet_input) else {
                    return;
                };
                spawn_local(async move {
                    match api::upload_discount_sheet(file).await {
                        Ok(()) => {
                            notifications.info("Файл загружен");
                            query.refresh();
                        }
                        Err(e) => {
                            log::warn!("discount sheet upload failed: {}", e);
                            notifications.error(e.to_string());
                        }
                    }
                    reset_file_input(sheet_input);
                });
            },
            move || reset_file_input(sheet_input),
        );
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
                    "Статус"
                    <BoundSelect
                        binding=query.bind(ControlKind::EnumInteger, fields::filter::pending())
                        options=fields::pending_filter_options()
                    />
                </label>
                <label class="filter-bar__field">
                    "Вес"
                    <BoundSelect
                        binding=query.bind(ControlKind::EnumInteger, fields::filter::inited_weight())
                        options=fields::inited_weight_filter_options()
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
                <label class="filter-bar__field">
                    "Скидка, %"
                    <BoundInput binding=discount_binding class="filter-bar__input--short" />
                </label>
                <a class="button button--secondary" href=move || api::discount_sheet_url(discount.get())>
                    {icon("download")}
                    " Скачать"
                </a>
                <label class="button button--secondary">
                    {icon("upload")}
                    " Загрузить .xlsx"
                    <input
                        node_ref=sheet_input
                        type="file"
                        accept=".xlsx"
                        class="visually-hidden"
                        on:change=on_sheet_selected
                    />
                </label>
                <button
                    class="button button--secondary"
                    on:click=move |_| {
                        session.confirm_then(
                            "Пересчитать наличие всех товаров?",
                            "Наличие пересчитано",
                            api::refresh_available,
                        )
                    }
                >
                    "Пересчитать наличие"
                </button>
                {move || query.state.loading.get().then(|| view! { <span class="loading">"Загрузка..."</span> })}
            </div>
            {pager()}
            <div class="card-grid">
                <For
                    each=move || query.state.rows.get()
                    key=|product: &Product| (product.id, product.updated_at.clone())
                    children=move |product| view! { <ProductCard row=query.row(product) /> }
                />
            </div>
            {pager()}
            <JsonDrawer />
            <ConfirmPrompt />
        </div>
    }
}
