//! Field mutations and bulk actions of the offers collection

use contracts::domain::a001_offer::aggregate::Offer;

use crate::shared::api::{get_ack, get_text, set_field, set_tips, ApiError};
use crate::shared::date_utils::now_rfc3339;
use crate::shared::remote_state::Ack;
use crate::shared::text_diff::break_tags;

pub async fn set_pending(id: i64, pending: i32) -> Result<Ack<i32>, ApiError> {
    set_field::<Offer>(id, "pending", pending).await?;
    Ok(Ack::Echo)
}

/// The server stamps the deletion time itself; ours is close enough to show
pub async fn set_deleted(id: i64, deleted: bool) -> Result<Ack<Option<String>>, ApiError> {
    set_field::<Offer>(id, "delete", deleted).await?;
    Ok(Ack::Canonical(deleted.then(now_rfc3339)))
}

pub async fn set_tips_text(id: i64, tips: String) -> Result<Ack<String>, ApiError> {
    set_tips::<Offer>(id, tips).await?;
    Ok(Ack::Echo)
}

pub async fn set_product_id(id: i64, product_id: i64) -> Result<Ack<i64>, ApiError> {
    set_field::<Offer>(id, "pid", product_id).await?;
    Ok(Ack::Echo)
}

pub async fn set_model_id(id: i64, model_id: String) -> Result<Ack<String>, ApiError> {
    set_field::<Offer>(id, "mid", model_id).await?;
    Ok(Ack::Echo)
}

/// Accept every pending discount price change
pub async fn accept_all_price_changes() -> Result<(), ApiError> {
    get_ack("offers/allbetterpricechnageisok").await
}

/// Accept every low-sales warning
pub async fn accept_all_low_sales() -> Result<(), ApiError> {
    get_ack("offers/alllowsalesisok").await
}

/// Markup of a product description
///
/// The description host answers with a script assignment wrapping
/// `{"content": "<html>"}`; the markup comes back one tag per line.
pub fn detail_content(body: &str) -> Result<String, ApiError> {
    let start = body.find('{');
    let end = body.rfind('}');
    let json = match (start, end) {
        (Some(start), Some(end)) if start < end => &body[start..=end],
        _ => return Err(ApiError::Decode("description has no JSON object".to_string())),
    };
    let value: serde_json::Value = serde_json::from_str(json).map_err(|e| ApiError::Decode(e.to_string()))?;
    value
        .get("content")
        .and_then(|c| c.as_str())
        .map(break_tags)
        .ok_or_else(|| ApiError::Decode("description has no content".to_string()))
}

/// Published and current descriptions of an offer, ready to compare
pub async fn fetch_details(published_url: &str, current_url: &str) -> Result<(String, String), ApiError> {
    let published = detail_content(&get_text(published_url).await?)?;
    let current = detail_content(&get_text(current_url).await?)?;
    Ok((published, current))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_content_unwraps_script() {
        let body = r#"var offer_details={"content":"<p>a</p><p>b</p>"};"#;
        assert_eq!(detail_content(body).unwrap(), "<p>a</p>\n<p>b</p>");
    }

    #[test]
    fn test_detail_content_rejects_garbage() {
        assert!(matches!(detail_content("404"), Err(ApiError::Decode(_))));
        assert!(matches!(detail_content(r#"x={"other":1};"#), Err(ApiError::Decode(_))));
    }
}
