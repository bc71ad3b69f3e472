use leptos::prelude::*;

/// Key/value pill; becomes a link when `href` is set, clickable when
/// `on_click` is set
#[component]
pub fn KvBadge(
    #[prop(into)] k: String,
    #[prop(into)] v: Signal<String>,
    #[prop(optional, into)] href: MaybeProp<String>,
    #[prop(optional)] on_click: Option<Callback<()>>,
) -> impl IntoView {
    let key = k.clone();
    move || match href.get().filter(|h| !h.is_empty()) {
        Some(link) => view! {
            <a class="kv kv--link" href=link target="_blank">
                <span class="kv__key">{key.clone()}</span>
                <span class="kv__value">{move || v.get()}</span>
            </a>
        }
        .into_any(),
        None => view! {
            <div
                class="kv"
                class:kv--clickable=on_click.is_some()
                on:click=move |_| {
                    if let Some(cb) = on_click {
                        cb.run(());
                    }
                }
            >
                <span class="kv__key">{key.clone()}</span>
                <span class="kv__value">{move || v.get()}</span>
            </div>
        }
        .into_any(),
    }
}

/// Key pill with an editable value
#[component]
pub fn KvField(
    #[prop(into)] k: String,
    #[prop(optional, into)] href: MaybeProp<String>,
    children: Children,
) -> impl IntoView {
    let key = move || match href.get().filter(|h| !h.is_empty()) {
        Some(link) => view! { <a class="kv__key kv__key--link" href=link target="_blank">{k.clone()}</a> }.into_any(),
        None => view! { <span class="kv__key">{k.clone()}</span> }.into_any(),
    };
    view! {
        <div class="kv kv--field">
            {key}
            <span class="kv__value">{children()}</span>
        </div>
    }
}
