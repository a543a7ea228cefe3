use crate::shared::api_utils::api_url;
use contracts::domain::a001_sales_entry::aggregate::{SalesEntry, SalesEntryDto};
use gloo_net::http::Request;

/// Decode a list response body
///
/// The cache is only ever replaced with a sequence payload: anything else
/// in the body (an error object, an HTML page, invalid JSON) yields an
/// empty collection rather than a failure.
fn parse_collection(text: &str) -> Result<Vec<SalesEntry>, String> {
    let value: serde_json::Value = match serde_json::from_str(text) {
        Ok(value) => value,
        Err(_) => return Ok(Vec::new()),
    };
    if !value.is_array() {
        return Ok(Vec::new());
    }
    serde_json::from_value(value).map_err(|e| format!("Failed to parse response: {}", e))
}

/// Fetch the full sales entry collection
pub async fn fetch_all() -> Result<Vec<SalesEntry>, String> {
    let response = Request::get(&api_url("/api/sales"))
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    let text = response
        .text()
        .await
        .map_err(|e| format!("Failed to read response: {}", e))?;

    parse_collection(&text)
}

/// Create a new entry from the draft (no identifier)
pub async fn create(dto: &SalesEntryDto) -> Result<(), String> {
    let response = Request::post(&api_url("/api/sales"))
        .json(dto)
        .map_err(|e| format!("Failed to encode request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }
    Ok(())
}

/// Update an existing entry with the full draft payload
pub async fn update(id: &str, dto: &SalesEntryDto) -> Result<(), String> {
    let response = Request::put(&api_url(&format!("/api/sales/{}", id)))
        .json(dto)
        .map_err(|e| format!("Failed to encode request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }
    Ok(())
}

/// Delete the entry with the given identifier
pub async fn delete(id: &str) -> Result<(), String> {
    let response = Request::delete(&api_url(&format!("/api/sales/{}", id)))
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_collection_array() {
        let entries = parse_collection("[]").unwrap();
        assert!(entries.is_empty());
    }

    #[test]
    fn test_parse_collection_non_sequence_payload_is_empty() {
        // an error object instead of a list resets the cache, it is not a failure
        let entries = parse_collection(r#"{"error":"boom"}"#).unwrap();
        assert!(entries.is_empty());

        let entries = parse_collection("null").unwrap();
        assert!(entries.is_empty());
    }

    #[test]
    fn test_parse_collection_invalid_json_is_empty() {
        // a body that is not JSON at all degrades the same way
        assert!(parse_collection("<html>").unwrap().is_empty());
        assert!(parse_collection("").unwrap().is_empty());
    }
}
