//! Tab labels - заголовки табов

use super::TabKey;

pub fn tab_label(key: TabKey) -> &'static str {
    match key {
        TabKey::Offers => "Офферы",
        TabKey::Products => "Товары",
        TabKey::Orders => "Заказы",
    }
}
