use contracts::domain::a003_order::aggregate::Order;
use leptos::prelude::*;

use crate::shared::components::kv_badge::KvBadge;
use crate::shared::config::use_config;
use crate::shared::date_utils::{format_grams_as_kg, format_short_datetime};
use crate::shared::session::{use_session, ViewerState};

#[component]
#[allow(non_snake_case)]
pub fn OrderCard(order: Order) -> impl IntoView {
    let session = use_session();
    let config = use_config();

    let order_id = order.order_id;
    let lg_order_id = order.logistics_id().map(str::to_string);
    let order_href = Signal::derive(move || config.with(|c| c.order_url(order_id)));
    let lg_id = lg_order_id.clone();
    let lg_href = Signal::derive(move || {
        lg_id
            .as_deref()
            .map(|lg| config.with(|c| c.lg_order_url(lg)))
            .unwrap_or_default()
    });

    let used_stock = order.used_stock.clone();
    let open_used_stock = Callback::new(move |_: ()| {
        session.open_viewer(ViewerState::read_only("Использованный склад", used_stock.clone()));
    });

    view! {
        <div class="card">
            <h6 class="card__title card__title--center">{order_id}</h6>
            <div class="card__badges">
                <KvBadge k="id" v=order.id.to_string() />
                <KvBadge k="order_id" v=order_id.to_string() href=order_href />
                <KvBadge k="lg_order_id" v=lg_order_id.unwrap_or_else(|| "нет".to_string()) href=lg_href />
                <KvBadge k="Примечание" v=order.remark.clone().filter(|r| !r.is_empty()).unwrap_or_else(|| "пусто".to_string()) />
                <KvBadge k="Вес посылки" v=format!("{} кг", format_grams_as_kg(order.weight as f64)) />
                <KvBadge k="Состав" v=format!("{} поз. / {} шт.", order.product_num, order.item_num) />
                <KvBadge k="Склад" v="детали".to_string() on_click=open_used_stock />
                <KvBadge k="Создан" v=format_short_datetime(&order.created_at) />
                <KvBadge k="Обновлён" v=format_short_datetime(&order.updated_at) />
                <p class="card__note">{order.products.clone()}</p>
            </div>
        </div>
    }
}
