use contracts::domain::a002_product::aggregate::Product;
use contracts::shared::requests::InfoColumn;
use leptos::prelude::*;

use crate::domain::a002_product::{api, fields};
use crate::shared::components::bound::{BoundInput, BoundSelect, BoundSwitch, BoundTextArea, ControlRef};
use crate::shared::components::kv_badge::{KvBadge, KvField};
use crate::shared::config::use_config;
use crate::shared::date_utils::{format_cents, format_grams_as_kg, format_short_datetime};
use crate::shared::remote_state::{ControlKind, Field, ListRow, RecordCell};
use crate::shared::session::{use_session, AdvicePanel, ViewerState};
use crate::shared::stock_summary::summarize;

/// Summary and advice shown under a product's JSON documents
pub fn advice_panel(product: &Product, sale2stock: f64) -> AdvicePanel {
    let summary = match summarize(&product.stock_info) {
        Ok(summary) => summary.to_pretty_json(),
        Err(e) => format!("Ошибка разбора склада: {}", e),
    };
    AdvicePanel {
        summary,
        sale_detail: product.sale_info.clone(),
        sale_sum: product.sale_count,
        advise_total: (product.sales30 as f64 * sale2stock).round() as i64,
    }
}

fn info_field(column: InfoColumn) -> (&'static str, Field<Product, String>) {
    match column {
        InfoColumn::StockInfo => ("Склад", fields::stock_info()),
        InfoColumn::SaleInfo => ("Продажи", fields::sale_info()),
    }
}

/// Average weight line: total kg / weighed units = kg per unit
fn weight_line(product: &Product) -> String {
    format!(
        "{} кг / {} = {:.3}",
        format_grams_as_kg(product.sale_weight as f64),
        product.weight_cal_count,
        product.average_sale_weight_kg()
    )
}

#[component]
#[allow(non_snake_case)]
pub fn ProductCard(row: ListRow<Product>) -> impl IntoView {
    let session = use_session();
    let config = use_config();
    let edits = session.edits();

    let product = row.mounted().clone();
    let id = product.id;
    let product_id = product.product_id;
    let record = {
        let row = row.clone();
        Memo::new(move |_| row.observe(|p| p.clone()))
    };

    let pending_ctl = ControlRef::select();
    let deleted_ctl = ControlRef::input(ControlKind::Boolean);
    let weight_ctl = ControlRef::input(ControlKind::Boolean);
    let tips_ctl = ControlRef::textarea();
    let offer_ctl = ControlRef::input(ControlKind::Integer);
    let discount_ctl = ControlRef::input(ControlKind::Integer);

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
    let inited_weight = edits.bind(ControlKind::Boolean, row.clone(), fields::inited_weight(), weight_ctl, move |v| {
        api::set_inited_weight(id, v)
    });
    let tips = edits.bind(ControlKind::Text, row.clone(), fields::tips(), tips_ctl, move |v| {
        api::set_tips_text(id, v)
    });
    let offer_id = edits.bind(ControlKind::Integer, row.clone(), fields::offer_id(), offer_ctl, move |v| {
        api::set_offer_id(id, v)
    });
    let discount = edits.bind(ControlKind::Integer, row.clone(), fields::discount(), discount_ctl, move |v| {
        api::set_discount(id, v)
    });

    // Editable JSON documents: a changed text is written back when the drawer closes
    let open_info = {
        let row = row.clone();
        Callback::new(move |column: InfoColumn| {
            let (title, field) = info_field(column);
            let snapshot = row.read(|p| p.clone());
            let original = field.get(&snapshot);
            let advice = advice_panel(&snapshot, config.with(|c| c.sale2stock));
            let edits = session.edits();
            let initial = original.clone();
            let row = row.clone();
            let on_close = Callback::new(move |text: String| {
                if text != original {
                    edits.dispatch(&row, field, text, (), move |info| api::update_info(id, column, info));
                }
            });
            session.open_viewer(ViewerState::editable(title, initial, on_close).with_advice(advice));
        })
    };

    let clear_stock = move |_| {
        let row = row.clone();
        session.ask("Очистить складские данные товара?", move || {
            session
                .edits()
                .dispatch(&row, fields::stock_info(), String::new(), (), move |_| api::clear_stock_info(id));
        });
    };

    let deleted_label = move || {
        record.with(|p| match &p.deleted_at {
            Some(at) => format_short_datetime(at),
            None => "в работе".to_string(),
        })
    };

    let offer_href = Signal::derive(move || config.with(|c| c.offer_url(record.with(|p| p.offer_id))));
    let product_href = Signal::derive(move || config.with(|c| c.product_url(product_id)));
    let stock_count = Signal::derive(move || {
        record.with(|p| if p.stock_info.is_empty() { "нет".to_string() } else { p.stock_count.to_string() })
    });

    view! {
        <div class="card">
            <h6 class="card__title">{product.title.clone()}</h6>
            <div class="card__body">
                <img class="card__cover" src=product.cover.clone() alt="cover" />
                <div class="card__controls">
                    <div class:card__warn=move || record.with(|p| p.pending != 0)>
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
                            class:card__deleted-label--on=move || record.with(|p| p.is_deleted())
                        >
                            {deleted_label}
                        </span>
                    </div>
                    <label class="card__flag">
                        <BoundSwitch binding=inited_weight node_ref=weight_ctl.input_ref() />
                        " Вес задан"
                    </label>
                    <div class:card__warn=move || record.with(|p| p.has_tips())>
                        <BoundTextArea binding=tips node_ref=tips_ctl.textarea_ref() placeholder="tips" />
                    </div>
                </div>
            </div>
            <div class="card__badges">
                <KvBadge k="id" v=id.to_string() />
                <KvField k="offer_id" href=offer_href>
                    <BoundInput binding=offer_id node_ref=offer_ctl.input_ref() class="kv__input" />
                </KvField>
                <KvBadge k="product_id" v=product_id.to_string() href=product_href />
                <KvBadge k="UV 30 дн." v=product.uv30.to_string() />
                <KvBadge k="Продажи 30 дн." v=product.sales30.to_string() />
                <KvBadge k="Цена" v=format_cents(product.price) />
                <KvField k="Скидка, %">
                    <BoundInput binding=discount node_ref=discount_ctl.input_ref() class="kv__input kv__input--short" />
                </KvField>
                <KvBadge
                    k="Склад"
                    v=stock_count
                    on_click=Callback::new(move |_: ()| open_info.run(InfoColumn::StockInfo))
                />
                <KvBadge
                    k="Продано"
                    v=product.sale_count.to_string()
                    on_click=Callback::new(move |_: ()| open_info.run(InfoColumn::SaleInfo))
                />
                <button class="button button--danger button--xs" on:click=clear_stock>
                    "Очистить склад"
                </button>
                <KvBadge k="Вес" v=weight_line(&product) />
                <KvBadge k="Вес ед., г" v=product.weight.to_string() />
                <KvBadge k="Создан" v=format_short_datetime(&product.created_at) />
                <KvBadge k="Обновлён" v=format_short_datetime(&product.updated_at) />
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(json: &str) -> Product {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_advice_panel_defaults() {
        let p = product(
            r#"{"id": 1, "offer_id": 2, "product_id": 3, "pending": 0,
                "sales30": 7, "sale_count": 4,
                "stock_info": "{\"red\":{\"S\":1,\"M\":2}}", "sale_info": "{\"red\":{\"S\":4}}"}"#,
        );
        let panel = advice_panel(&p, 1.5);
        assert_eq!(panel.advise_total, 11);
        assert_eq!(panel.sale_sum, 4);
        assert_eq!(panel.sale_detail, p.sale_info);
        assert!(panel.summary.contains("\"red\": 3"));
    }

    #[test]
    fn test_advice_panel_reports_broken_stock() {
        let p = product(r#"{"id": 1, "offer_id": 2, "product_id": 3, "pending": 0, "stock_info": "{oops"}"#);
        assert!(advice_panel(&p, 1.0).summary.starts_with("Ошибка разбора склада"));
    }

    #[test]
    fn test_weight_line() {
        let p = product(
            r#"{"id": 1, "offer_id": 2, "product_id": 3, "pending": 0, "sale_weight": 3000, "weight_cal_count": 4}"#,
        );
        assert_eq!(weight_line(&p), "3.00 кг / 4 = 0.750");
    }
}
