use axum::{extract::Path, Json};
use serde_json::json;

use crate::domain::a001_sales_entry;
use contracts::domain::a001_sales_entry::aggregate::{SalesEntry, SalesEntryDto, SalesEntryId};
use contracts::domain::common::AggregateId;

/// Parse a route parameter into an entry id; a malformed id is a 400.
fn parse_id(id: &str) -> Result<SalesEntryId, axum::http::StatusCode> {
    SalesEntryId::from_string(id).map_err(|_| axum::http::StatusCode::BAD_REQUEST)
}

/// GET /api/sales
pub async fn list_all() -> Result<Json<Vec<SalesEntry>>, axum::http::StatusCode> {
    match a001_sales_entry::service::list_all().await {
        Ok(v) => Ok(Json(v)),
        Err(_) => Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR),
    }
}

/// GET /api/sales/:id
pub async fn get_by_id(
    Path(id): Path<String>,
) -> Result<Json<SalesEntry>, axum::http::StatusCode> {
    let id = parse_id(&id)?;
    match a001_sales_entry::service::get_by_id(id.value()).await {
        Ok(Some(v)) => Ok(Json(v)),
        Ok(None) => Err(axum::http::StatusCode::NOT_FOUND),
        Err(_) => Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR),
    }
}

/// POST /api/sales
pub async fn create(
    Json(dto): Json<SalesEntryDto>,
) -> Result<Json<serde_json::Value>, axum::http::StatusCode> {
    match a001_sales_entry::service::create(dto).await {
        Ok(id) => Ok(Json(json!({"id": id.to_string()}))),
        Err(_) => Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR),
    }
}

/// PUT /api/sales/:id
pub async fn update(
    Path(id): Path<String>,
    Json(dto): Json<SalesEntryDto>,
) -> Result<Json<serde_json::Value>, axum::http::StatusCode> {
    let entry_id = parse_id(&id)?;
    // The path identifies the entry; any id inside the draft is ignored.
    match a001_sales_entry::service::update(entry_id.value(), dto).await {
        Ok(true) => Ok(Json(json!({"id": id}))),
        Ok(false) => Err(axum::http::StatusCode::NOT_FOUND),
        Err(_) => Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR),
    }
}

/// DELETE /api/sales/:id
pub async fn delete(Path(id): Path<String>) -> Result<(), axum::http::StatusCode> {
    let id = parse_id(&id)?;
    match a001_sales_entry::service::delete(id.value()).await {
        Ok(true) => Ok(()),
        Ok(false) => Err(axum::http::StatusCode::NOT_FOUND),
        Err(_) => Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR),
    }
}

/// POST /api/sales/testdata
pub async fn insert_test_data() -> axum::http::StatusCode {
    match a001_sales_entry::service::insert_test_data().await {
        Ok(_) => axum::http::StatusCode::OK,
        Err(_) => axum::http::StatusCode::INTERNAL_SERVER_ERROR,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_id_rejects_malformed_input() {
        assert_eq!(
            parse_id("not-a-uuid").unwrap_err(),
            axum::http::StatusCode::BAD_REQUEST
        );
        assert!(parse_id("0c6e9f41-6f44-4d6c-9f3a-54a4f6a3c111").is_ok());
    }
}
