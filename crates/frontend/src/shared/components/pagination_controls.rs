use contracts::domain::common::paged_filter::PAGE_SIZE_OPTIONS;
use leptos::prelude::*;

use crate::shared::components::bound::{BoundInput, BoundSelect};
use crate::shared::icons::icon;
use crate::shared::remote_state::pagination::{page_strip, total_pages, visible_range};
use crate::shared::remote_state::{Binding, ControlKind};

/// PaginationControls component - row range, page strip, page size and jump
#[component]
pub fn PaginationControls(
    /// Current page (1-based)
    #[prop(into)]
    page: Signal<u32>,

    /// Current page size
    #[prop(into)]
    per_page: Signal<u32>,

    /// Total count of rows on the server
    #[prop(into)]
    total: Signal<u64>,

    /// Callback when page changes
    on_page_change: Callback<u32>,

    /// Callback when page size changes
    on_page_size_change: Callback<u32>,
) -> impl IntoView {
    let pages = move || total_pages(total.get(), per_page.get());

    let jump = Binding::new(ControlKind::Integer, move || page.get(), move |p: u32| on_page_change.run(p));
    let size = Binding::new(
        ControlKind::EnumInteger,
        move || per_page.get(),
        move |n: u32| on_page_size_change.run(n),
    );
    let size_options = PAGE_SIZE_OPTIONS
        .iter()
        .map(|n| (i64::from(*n), format!("{}/стр.", n)))
        .collect::<Vec<_>>();

    view! {
        <div class="pagination-controls">
            <span class="pagination-info">
                {move || {
                    let (first, last) = visible_range(page.get(), per_page.get(), total.get());
                    format!("{}–{} из {}", first, last, total.get())
                }}
            </span>
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(1)
                disabled=move || !page_strip(page.get(), pages()).first_enabled
                title="Первая страница"
            >
                {icon("chevrons-left")}
            </button>
            {move || {
                let strip = page_strip(page.get(), pages());
                let link = move |p: u32| view! {
                    <button class="pagination-btn" on:click=move |_| on_page_change.run(p)>{p}</button>
                };
                view! {
                    {strip.before.into_iter().map(link).collect_view()}
                    <button class="pagination-btn pagination-btn--current">{strip.current}</button>
                    {strip.after.into_iter().map(link).collect_view()}
                }
            }}
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(pages().max(1))
                disabled=move || !page_strip(page.get(), pages()).last_enabled
                title="Последняя страница"
            >
                {icon("chevrons-right")}
            </button>
            <BoundSelect binding=size options=size_options class="pagination-size" />
            <span class="pagination-jump">"Перейти к"</span>
            <BoundInput binding=jump placeholder="стр." class="pagination-jump__input" />
        </div>
    }
}
