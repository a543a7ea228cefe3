use crate::domain::common::{AggregateId, AggregateRoot, BaseAggregate, EntityMetadata};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================

/// Unique identifier of a sales entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SalesEntryId(pub Uuid);

impl SalesEntryId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl AggregateId for SalesEntryId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(SalesEntryId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Field keys
// ============================================================================

// JSON field names, shared by serde renames and validation error keys.
pub const FIELD_DATE: &str = "date";
pub const FIELD_ORDER_CODE: &str = "orderCode";
pub const FIELD_CUSTOMER_NAME: &str = "customerName";
pub const FIELD_SALE_AMOUNT: &str = "saleAmount";

// ============================================================================
// Aggregate Root
// ============================================================================

/// One recorded sale (date, order code, customer, amount)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalesEntry {
    #[serde(flatten)]
    pub base: BaseAggregate<SalesEntryId>,

    /// Sale date (YYYY-MM-DD)
    pub date: String,

    #[serde(rename = "orderCode")]
    pub order_code: String,

    #[serde(rename = "customerName")]
    pub customer_name: String,

    /// Digit-only amount string
    #[serde(rename = "saleAmount")]
    pub sale_amount: String,
}

impl SalesEntry {
    /// Create a new entry for insertion into the database
    pub fn new_for_insert(
        date: String,
        order_code: String,
        customer_name: String,
        sale_amount: String,
        comment: Option<String>,
    ) -> Self {
        let mut base = BaseAggregate::new(SalesEntryId::new_v4());
        base.comment = comment;

        Self {
            base,
            date,
            order_code,
            customer_name,
            sale_amount,
        }
    }

    /// Get the ID as a string
    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    /// Apply draft data to the aggregate
    pub fn update(&mut self, dto: &SalesEntryDto) {
        self.date = dto.date.clone();
        self.order_code = dto.order_code.clone();
        self.customer_name = dto.customer_name.clone();
        self.sale_amount = dto.sale_amount.clone();
    }

    /// Hook before writing to storage
    pub fn before_write(&mut self) {
        self.base.touch();
        self.base.metadata.increment_version();
    }
}

impl AggregateRoot for SalesEntry {
    type Id = SalesEntryId;

    fn id(&self) -> Self::Id {
        self.base.id
    }

    fn metadata(&self) -> &EntityMetadata {
        &self.base.metadata
    }

    fn metadata_mut(&mut self) -> &mut EntityMetadata {
        &mut self.base.metadata
    }

    fn aggregate_index() -> &'static str {
        "a001"
    }

    fn collection_name() -> &'static str {
        "sales_entry"
    }

    fn element_name() -> &'static str {
        "Sales entry"
    }

    fn list_name() -> &'static str {
        "Sales entries"
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// Draft for creating/updating a sales entry
///
/// Serializes with the same field names as the aggregate, so a draft is
/// sent as a request body without remapping. `id` is absent on unsaved
/// drafts and present while editing an existing entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct SalesEntryDto {
    pub id: Option<String>,

    pub date: String,

    #[serde(rename = "orderCode")]
    pub order_code: String,

    #[serde(rename = "customerName")]
    pub customer_name: String,

    #[serde(rename = "saleAmount")]
    pub sale_amount: String,
}

impl SalesEntryDto {
    /// Validate the draft
    ///
    /// All four checks run regardless of earlier failures; the result maps
    /// each failing field to its message and is empty iff the draft is valid.
    pub fn validate(&self) -> ValidationErrors {
        let mut errors = ValidationErrors::new();
        if self.date.is_empty() {
            errors.insert(FIELD_DATE, "Date is required");
        }
        if self.customer_name.is_empty() {
            errors.insert(FIELD_CUSTOMER_NAME, "Customer name is required");
        }
        if self.sale_amount.is_empty() {
            errors.insert(FIELD_SALE_AMOUNT, "Sale amount is required");
        }
        if self.order_code.is_empty() {
            errors.insert(FIELD_ORDER_CODE, "Order code is required");
        }
        errors
    }
}

/// Strip everything that is not an ASCII digit
///
/// Empty input stays empty; grouping punctuation from the display form
/// never reaches stored state.
pub fn sanitize_amount(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

// ============================================================================
// Validation errors
// ============================================================================

/// Field-keyed validation messages, in check order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValidationErrors {
    entries: Vec<(String, String)>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == field)
            .map(|(_, v)| v.as_str())
    }

    /// Set the message for a field, replacing any previous one
    pub fn insert(&mut self, field: &str, message: &str) {
        self.clear(field);
        self.entries.push((field.to_string(), message.to_string()));
    }

    /// Remove the message for a field, if any
    pub fn clear(&mut self, field: &str) {
        self.entries.retain(|(k, _)| k != field);
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_draft() -> SalesEntryDto {
        SalesEntryDto {
            id: None,
            date: "2024-01-01".into(),
            order_code: "A1".into(),
            customer_name: "X".into(),
            sale_amount: "1000".into(),
        }
    }

    #[test]
    fn test_valid_draft_has_no_errors() {
        assert!(valid_draft().validate().is_empty());
    }

    #[test]
    fn test_each_missing_field_is_reported() {
        let mut draft = valid_draft();
        draft.date = String::new();
        let errors = draft.validate();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get(FIELD_DATE), Some("Date is required"));

        let mut draft = valid_draft();
        draft.customer_name = String::new();
        let errors = draft.validate();
        assert_eq!(
            errors.get(FIELD_CUSTOMER_NAME),
            Some("Customer name is required")
        );

        let mut draft = valid_draft();
        draft.sale_amount = String::new();
        let errors = draft.validate();
        assert_eq!(
            errors.get(FIELD_SALE_AMOUNT),
            Some("Sale amount is required")
        );

        let mut draft = valid_draft();
        draft.order_code = String::new();
        let errors = draft.validate();
        assert_eq!(errors.get(FIELD_ORDER_CODE), Some("Order code is required"));
    }

    #[test]
    fn test_checks_do_not_short_circuit() {
        let errors = SalesEntryDto::default().validate();
        assert_eq!(errors.len(), 4);
        assert!(errors.get(FIELD_DATE).is_some());
        assert!(errors.get(FIELD_CUSTOMER_NAME).is_some());
        assert!(errors.get(FIELD_SALE_AMOUNT).is_some());
        assert!(errors.get(FIELD_ORDER_CODE).is_some());
    }

    #[test]
    fn test_sanitize_amount() {
        assert_eq!(sanitize_amount("12a3b"), "123");
        assert_eq!(sanitize_amount(""), "");
        assert_eq!(sanitize_amount("1 234 567"), "1234567");
        assert_eq!(sanitize_amount("abc"), "");
    }

    #[test]
    fn test_clear_removes_single_field() {
        let mut errors = SalesEntryDto::default().validate();
        errors.clear(FIELD_DATE);
        assert_eq!(errors.len(), 3);
        assert!(errors.get(FIELD_DATE).is_none());
        // clearing an absent field is a no-op
        errors.clear(FIELD_DATE);
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn test_id_round_trips_through_string_form() {
        let id = SalesEntryId::new_v4();
        let parsed = SalesEntryId::from_string(&id.as_string()).unwrap();
        assert_eq!(parsed, id);
        assert!(SalesEntryId::from_string("not-a-uuid").is_err());
    }

    #[test]
    fn test_before_write_touches_and_bumps_version() {
        let mut entry = SalesEntry::new_for_insert(
            "2024-01-01".into(),
            "A1".into(),
            "X".into(),
            "1000".into(),
            None,
        );
        assert_eq!(entry.metadata().version, 0);
        let created_at = entry.metadata().created_at;

        entry.before_write();
        assert_eq!(entry.metadata().version, 1);
        assert_eq!(entry.metadata().created_at, created_at);
        assert!(entry.metadata().updated_at >= created_at);

        entry.before_write();
        assert_eq!(entry.metadata().version, 2);
    }

    #[test]
    fn test_aggregate_names() {
        assert_eq!(SalesEntry::full_name(), "a001_sales_entry");
        assert_eq!(SalesEntry::element_name(), "Sales entry");
        assert_eq!(SalesEntry::list_name(), "Sales entries");

        let entry = SalesEntry::new_for_insert(
            "2024-01-01".into(),
            "A1".into(),
            "X".into(),
            "1000".into(),
            None,
        );
        assert_eq!(entry.id(), entry.base.id);
    }

    #[test]
    fn test_dto_serializes_with_json_field_names() {
        let json = serde_json::to_value(valid_draft()).unwrap();
        assert!(json.get("orderCode").is_some());
        assert!(json.get("customerName").is_some());
        assert!(json.get("saleAmount").is_some());
        assert!(json.get("date").is_some());
    }
}
