use contracts::domain::a001_offer::aggregate::Offer;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a001_offer::{api, fields};
use crate::shared::components::bound::{BoundInput, BoundSelect, BoundSwitch, BoundTextArea, ControlRef};
use crate::shared::components::kv_badge::{KvBadge, KvField};
use crate::shared::config::use_config;
use crate::shared::date_utils::{format_cents, format_short_datetime};
use crate::shared::remote_state::{ControlKind, ListRow, RecordCell};
use crate::shared::session::{use_session, ViewerState};
use crate::shared::text_diff::pretty_json;

/// One offer with its inline editors
#[component]
#[allow(non_snake_case)]
pub fn OfferCard(row: ListRow<Offer>) -> impl IntoView {
    let session = use_session();
    let config = use_config();
    let edits = session.edits();

    let offer = row.mounted().clone();
    let id = offer.id;
    let record = {
        let row = row.clone();
        Memo::new(move |_| row.observe(|o| o.clone()))
    };

    let pending_ctl = ControlRef::select();
    let deleted_ctl = ControlRef::input(ControlKind::Boolean);
    let tips_ctl = ControlRef::textarea();
    let product_ctl = ControlRef::input(ControlKind::Integer);
    let model_ctl = ControlRef::input(ControlKind::Text);

    let pending = edits.bind(ControlKind::EnumInteger, row.clone(), fields::pending(), pending_ctl, move |v| {
        api::set_pending(id, v)
    });
    let deleted = edits.bind(
        ControlKind::Boolean,
        row.clone(),
        fields::deleted_at(),
        deleted_ctl,
        move |marker: Option<String>| api::set_deleted(id, marker.is_some()),
    );
    let tips = edits.bind(ControlKind::Text, row.clone(), fields::tips(), tips_ctl, move |v| {
        api::set_tips_text(id, v)
    });
    let product_id = edits.bind(ControlKind::Integer, row.clone(), fields::product_id(), product_ctl, move |v| {
        api::set_product_id(id, v)
    });
    let model_id = edits.bind(ControlKind::Text, row, fields::model_id(), model_ctl, move |v| {
        api::set_model_id(id, v)
    });

    let deleted_label = move || {
        record.with(|o| match &o.deleted_at {
            Some(at) => format_short_datetime(at),
            None => "в работе".to_string(),
        })
    };

    let sale_record = offer.sale_record.clone();
    let open_sale_record = Callback::new(move |_: ()| {
        session.open_viewer(ViewerState::read_only("Продажи за 30 дней", sale_record.clone()));
    });
    let sale_info = offer.sale_info.clone();

    let sku_published = pretty_json(&offer.sku_info_use);
    let sku_current = pretty_json(&offer.sku_info);
    let open_sku_diff = Callback::new(move |_: ()| {
        session.open_viewer(ViewerState::diff("SKU: опубликовано / сейчас", &sku_published, &sku_current));
    });
    let detail_urls = (offer.detail_url_use.clone(), offer.detail_url.clone());
    let open_detail_diff = Callback::new(move |_: ()| {
        let (published_url, current_url) = detail_urls.clone();
        spawn_local(async move {
            match api::fetch_details(&published_url, &current_url).await {
                Ok((published, current)) => {
                    session.open_viewer(ViewerState::diff("Описание: опубликовано / сейчас", &published, &current))
                }
                Err(e) => {
                    log::warn!("offer {} description diff failed: {}", id, e);
                    session.notifications.error(e.to_string());
                }
            }
        });
    });

    let offer_id = offer.offer_id;
    let offer_href = Signal::derive(move || config.with(|c| c.offer_url(offer_id)));
    let product_href = Signal::derive(move || config.with(|c| c.product_url(record.with(|o| o.product_id))));

    view! {
        <div class="card">
            <h6 class="card__title">{offer.title.clone()}</h6>
            <div class="card__body">
                <img class="card__cover" src=offer.cover.clone() alt="cover" />
                <div class="card__controls">
                    <div class:card__warn=move || record.with(|o| o.pending != 0)>
                        <BoundSelect
                            binding=pending
                            options=fields::pending_options()
                            node_ref=pending_ctl.select_ref()
                        />
                    </div>
                    <div class="card__deleted">
                        <BoundSwitch binding=deleted node_ref=deleted_ctl.input_ref() class="toggle--danger" />
                        <span
                            class="card__deleted-label"
                            class:card__deleted-label--on=move || record.with(|o| o.is_deleted())
                        >
                            {deleted_label}
                        </span>
                    </div>
                    <div class:card__warn=move || record.with(|o| o.has_tips())>
                        <BoundTextArea binding=tips node_ref=tips_ctl.textarea_ref() placeholder="tips" />
                    </div>
                </div>
            </div>
            <div class="card__badges">
                <KvBadge k="id" v=id.to_string() />
                <KvBadge k="offer_id" v=offer_id.to_string() href=offer_href />
                <KvField k="product_id" href=product_href>
                    <BoundInput binding=product_id node_ref=product_ctl.input_ref() class="kv__input" />
                </KvField>
                <KvBadge k="Продажи 30 дн." v=offer.sale30.to_string() on_click=open_sale_record />
                <button
                    class="button button--primary button--xs"
                    on:click=move |_| session.open_viewer(ViewerState::read_only("Обзор продаж", sale_info.clone()))
                >
                    "Обзор продаж"
                </button>
                <KvField k="model_id">
                    <BoundInput binding=model_id node_ref=model_ctl.input_ref() class="kv__input kv__input--short" />
                </KvField>
                <KvBadge k="Цена" v=format_cents(offer.price) />
                <KvBadge k="Со скидкой" v=format_cents(offer.better_price) />
                <KvBadge k="Скидка" v=format!("{}%", offer.discount) />
                <KvBadge k="SKU" v="DIFF".to_string() on_click=open_sku_diff />
                <KvBadge k="Описание" v="DIFF".to_string() on_click=open_detail_diff />
                <KvBadge k="Поставщик" v=offer.supplier.clone() href=offer.store_url.clone() />
                <KvBadge k="Создан" v=format_short_datetime(&offer.created_at) />
                <KvBadge k="Обновлён" v=format_short_datetime(&offer.updated_at) />
                {offer.promotion_end.as_deref().map(|end| {
                    view! { <KvBadge k="Акция до" v=format_short_datetime(end) /> }
                })}
            </div>
        </div>
    }
}
