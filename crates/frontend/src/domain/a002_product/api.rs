//! Field mutations, bulk actions and the discount spreadsheet of the
//! products collection

use contracts::domain::a002_product::aggregate::Product;
use contracts::shared::requests::{InfoColumn, InfoUpdate};

use crate::shared::api::{encode_segment, get_ack, post_ack, set_field, set_tips, upload_file, ApiError};
use crate::shared::api_utils::api_url;
use crate::shared::date_utils::now_rfc3339;
use crate::shared::remote_state::Ack;

pub async fn set_pending(id: i64, pending: i32) -> Result<Ack<i32>, ApiError> {
    set_field::<Product>(id, "pending", pending).await?;
    Ok(Ack::Echo)
}

pub async fn set_deleted(id: i64, deleted: bool) -> Result<Ack<Option<String>>, ApiError> {
    set_field::<Product>(id, "delete", deleted).await?;
    Ok(Ack::Canonical(deleted.then(now_rfc3339)))
}

pub async fn set_inited_weight(id: i64, inited: bool) -> Result<Ack<bool>, ApiError> {
    set_field::<Product>(id, "inited_weight", inited).await?;
    Ok(Ack::Echo)
}

pub async fn set_tips_text(id: i64, tips: String) -> Result<Ack<String>, ApiError> {
    set_tips::<Product>(id, tips).await?;
    Ok(Ack::Echo)
}

pub async fn set_offer_id(id: i64, offer_id: i64) -> Result<Ack<i64>, ApiError> {
    set_field::<Product>(id, "oid", offer_id).await?;
    Ok(Ack::Echo)
}

pub async fn set_discount(id: i64, discount: i64) -> Result<Ack<i64>, ApiError> {
    set_field::<Product>(id, "discount", discount).await?;
    Ok(Ack::Echo)
}

/// Overwrite one JSON document of a product
pub async fn update_info(id: i64, column: InfoColumn, info: String) -> Result<Ack<String>, ApiError> {
    post_ack("products/update_info", &InfoUpdate { id, column, info }).await?;
    Ok(Ack::Echo)
}

/// Drop the stock document; the server leaves it empty
pub async fn clear_stock_info(id: i64) -> Result<Ack<String>, ApiError> {
    get_ack(&format!("products/clear_stock_info/{}", id)).await?;
    Ok(Ack::Canonical(String::new()))
}

/// Recalculate availability of every product
pub async fn refresh_available() -> Result<(), ApiError> {
    get_ack("products/available").await
}

pub async fn upload_discount_sheet(file: web_sys::File) -> Result<(), ApiError> {
    upload_file("products/upload_xlsx", &file).await
}

/// Link to the spreadsheet of products at `discount` percent
pub fn discount_sheet_url(discount: i64) -> String {
    api_url(&format!("products/dl_discount_xslx/{}", encode_segment(discount)))
}
