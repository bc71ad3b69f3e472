use leptos::html;
use leptos::prelude::*;

use crate::shared::components::bound::BoundInput;
use crate::shared::icons::icon;
use crate::shared::remote_state::{Binding, ControlKind};
use crate::shared::session::{use_session, AdvicePanel};
use crate::shared::stock_summary::advise_stock;
use crate::shared::text_diff::{change_counts, DiffLine, LineOp};

/// Side drawer showing one JSON document of a row, or a comparison of two
///
/// Editable documents are handed back to the opener when the drawer closes.
#[component]
pub fn JsonDrawer() -> impl IntoView {
    let session = use_session();
    let editor = NodeRef::<html::Textarea>::new();

    let close = move || {
        let text = editor
            .get_untracked()
            .map(|el| el.value())
            .unwrap_or_default();
        session.close_viewer(text);
    };

    move || {
        session.viewer.get().map(|state| {
            let readonly = !state.is_editable();
            view! {
                <div class="drawer-backdrop" on:click=move |_| close()></div>
                <aside class="drawer">
                    <header class="drawer__header">
                        <h3 class="drawer__title">{state.title.clone()}</h3>
                        <button class="drawer__close" title="Закрыть" on:click=move |_| close()>
                            {icon("close")}
                        </button>
                    </header>
                    {match state.diff.clone() {
                        Some(lines) => view! { <DiffView lines=lines /> }.into_any(),
                        None => view! {
                            <textarea
                                node_ref=editor
                                class="drawer__editor"
                                readonly=readonly
                                spellcheck="false"
                                prop:value=state.text.clone()
                            ></textarea>
                        }
                        .into_any(),
                    }}
                    {state.advice.map(|advice| view! { <AdviceView advice=advice /> })}
                </aside>
            }
        })
    }
}

#[component]
fn DiffView(lines: Vec<DiffLine>) -> impl IntoView {
    let (removed, added) = change_counts(&lines);
    view! {
        <div class="drawer__summary">{format!("-{} / +{} строк", removed, added)}</div>
        <pre class="drawer__diff">
            {lines
                .into_iter()
                .map(|line| {
                    let class = match line.op {
                        LineOp::Same => "diff__line",
                        LineOp::Removed => "diff__line diff__line--removed",
                        LineOp::Added => "diff__line diff__line--added",
                    };
                    view! { <div class=class>{line.op.marker()}{line.text}</div> }
                })
                .collect_view()}
        </pre>
    }
}

#[component]
fn AdviceView(advice: AdvicePanel) -> impl IntoView {
    let total = RwSignal::new(advice.advise_total);
    let binding = Binding::new(ControlKind::Integer, move || total.get(), move |v: i64| total.set(v));
    let detail = advice.sale_detail.clone();
    let sale_sum = advice.sale_sum;

    let advised = move || match advise_stock(&detail, sale_sum, total.get()) {
        Ok(text) => text,
        Err(e) => format!("Ошибка разбора продаж: {}", e),
    };

    view! {
        <div class="drawer__summary">{advice.summary}</div>
        <div class="drawer__advise">
            "Рекомендуемый запас: "
            <BoundInput binding=binding class="drawer__advise-input" />
        </div>
        <pre class="drawer__advised">{advised}</pre>
    }
}
