use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::common::ListedRecord;

/// Код успешного ответа в поле `status`
pub const STATUS_OK: i32 = 0;

/// Обёртка ответа сервера: `{status, msg?, data?}`
///
/// `status == 0`: успех, иначе `msg` содержит текст ошибки для пользователя.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiEnvelope<D> {
    pub status: i32,
    #[serde(default)]
    pub msg: Option<String>,
    #[serde(default = "Option::default")]
    pub data: Option<D>,
}

impl<D> ApiEnvelope<D> {
    pub fn is_ok(&self) -> bool {
        self.status == STATUS_OK
    }

    /// Разворачивает ответ; при ошибке возвращает сообщение сервера
    pub fn into_result(self) -> Result<Option<D>, String> {
        if self.is_ok() {
            Ok(self.data)
        } else {
            Err(self
                .msg
                .filter(|m| !m.is_empty())
                .unwrap_or_else(|| format!("status {}", self.status)))
        }
    }
}

/// Страница списка после разбора: строки, общее число и страница,
/// которую сервер фактически отдал (может быть скорректирована)
#[derive(Debug, Clone, PartialEq)]
pub struct ListPage<T> {
    pub total: u64,
    pub page: u32,
    pub rows: Vec<T>,
}

/// Сырые данные ответа `<collection>/show`
///
/// Массив строк лежит под ключом, совпадающим с именем коллекции.
#[derive(Debug, Clone, Deserialize)]
pub struct RawListData {
    pub total: u64,
    pub page: u32,
    #[serde(flatten)]
    pub rest: Map<String, Value>,
}

impl RawListData {
    pub fn into_page<T: ListedRecord>(mut self) -> Result<ListPage<T>, serde_json::Error> {
        let rows = match self.rest.remove(T::COLLECTION) {
            None | Some(Value::Null) => Vec::new(),
            Some(value) => serde_json::from_value(value)?,
        };
        Ok(ListPage {
            total: self.total,
            page: self.page,
            rows,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Item {
        id: i64,
    }

    impl ListedRecord for Item {
        const COLLECTION: &'static str = "items";

        fn record_id(&self) -> i64 {
            self.id
        }
    }

    #[test]
    fn test_ok_envelope_into_page() {
        let json = r#"{"status":0,"data":{"total":57,"page":2,"items":[{"id":1},{"id":2}]}}"#;
        let env: ApiEnvelope<RawListData> = serde_json::from_str(json).unwrap();
        let page = env.into_result().unwrap().unwrap().into_page::<Item>().unwrap();
        assert_eq!(page.total, 57);
        assert_eq!(page.page, 2);
        assert_eq!(page.rows, vec![Item { id: 1 }, Item { id: 2 }]);
    }

    #[test]
    fn test_error_envelope_carries_message() {
        let json = r#"{"status":3,"msg":"bad page"}"#;
        let env: ApiEnvelope<RawListData> = serde_json::from_str(json).unwrap();
        assert_eq!(env.into_result().unwrap_err(), "bad page");
    }

    #[test]
    fn test_error_envelope_without_message() {
        let json = r#"{"status":-1}"#;
        let env: ApiEnvelope<Value> = serde_json::from_str(json).unwrap();
        assert_eq!(env.into_result().unwrap_err(), "status -1");
    }

    #[test]
    fn test_missing_rows_is_empty_page() {
        let json = r#"{"total":0,"page":1,"items":null}"#;
        let raw: RawListData = serde_json::from_str(json).unwrap();
        let page = raw.into_page::<Item>().unwrap();
        assert!(page.rows.is_empty());
    }
}
