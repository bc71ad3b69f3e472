use serde::{de::DeserializeOwned, Serialize};

/// Трейт для записей, которые сервер отдаёт постранично
///
/// Каждая сущность живёт в своей коллекции: `<COLLECTION>/show` отдаёт страницу,
/// `<COLLECTION>/<поле>/<id>/<значение>` меняет одно поле.
pub trait ListedRecord: Clone + PartialEq + Serialize + DeserializeOwned + std::fmt::Debug + 'static {
    /// Имя коллекции и ключ массива строк в ответе (например, "offers")
    const COLLECTION: &'static str;

    /// Стабильный идентификатор записи
    fn record_id(&self) -> i64;

    /// Путь запроса списка относительно префикса API
    fn show_path() -> String {
        format!("{}/show", Self::COLLECTION)
    }

    /// Путь изменения одного поля записи `id` (значение уже закодировано)
    fn mutation_path(id: i64, field: &str, encoded_value: &str) -> String {
        format!("{}/{}/{}/{}", Self::COLLECTION, field, id, encoded_value)
    }
}
