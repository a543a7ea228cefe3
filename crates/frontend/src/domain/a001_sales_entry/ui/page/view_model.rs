use super::model;
use contracts::domain::a001_sales_entry::aggregate::{
    sanitize_amount, SalesEntry, SalesEntryDto, ValidationErrors, FIELD_CUSTOMER_NAME, FIELD_DATE,
    FIELD_ORDER_CODE, FIELD_SALE_AMOUNT,
};
use contracts::domain::a001_sales_entry::reporting;
use contracts::domain::common::AggregateRoot;
use leptos::prelude::*;

/// Form fields the page edits
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormField {
    Date,
    OrderCode,
    CustomerName,
    SaleAmount,
}

impl FormField {
    /// JSON field name; also the key of the field's validation error
    pub fn key(self) -> &'static str {
        match self {
            FormField::Date => FIELD_DATE,
            FormField::OrderCode => FIELD_ORDER_CODE,
            FormField::CustomerName => FIELD_CUSTOMER_NAME,
            FormField::SaleAmount => FIELD_SALE_AMOUNT,
        }
    }
}

/// Fresh draft: today's date, every other field empty
fn default_draft() -> SalesEntryDto {
    SalesEntryDto {
        date: chrono::Utc::now().date_naive().format("%Y-%m-%d").to_string(),
        ..Default::default()
    }
}

/// Copy an entry into a draft verbatim, including its identifier
fn draft_from_entry(entry: &SalesEntry) -> SalesEntryDto {
    SalesEntryDto {
        id: Some(entry.to_string_id()),
        date: entry.date.clone(),
        order_code: entry.order_code.clone(),
        customer_name: entry.customer_name.clone(),
        sale_amount: entry.sale_amount.clone(),
    }
}

fn find_entry<'a>(entries: &'a [SalesEntry], id: &str) -> Option<&'a SalesEntry> {
    entries.iter().find(|entry| entry.to_string_id() == id)
}

/// Store one field input and optimistically clear its error message
///
/// The amount field keeps digits only; every other field is stored
/// verbatim. The error clear is independent of re-validation.
fn apply_input(
    draft: &mut SalesEntryDto,
    errors: &mut ValidationErrors,
    field: FormField,
    raw: &str,
) {
    match field {
        FormField::Date => draft.date = raw.to_string(),
        FormField::OrderCode => draft.order_code = raw.to_string(),
        FormField::CustomerName => draft.customer_name = raw.to_string(),
        FormField::SaleAmount => draft.sale_amount = sanitize_amount(raw),
    }
    errors.clear(field.key());
}

/// ViewModel for the sales entry page
///
/// Owns the form draft, the cached entry collection, and the validation
/// errors. Edit mode is encoded by the presence of `id` on the draft.
#[derive(Clone, Copy)]
pub struct SalesEntryPageViewModel {
    pub form: RwSignal<SalesEntryDto>,
    pub entries: RwSignal<Vec<SalesEntry>>,
    pub errors: RwSignal<ValidationErrors>,
}

impl SalesEntryPageViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(default_draft()),
            entries: RwSignal::new(Vec::new()),
            errors: RwSignal::new(ValidationErrors::new()),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.form.with(|f| f.id.is_some())
    }

    /// Store one field input, clearing the field's error message
    pub fn input(&self, field: FormField, raw: String) {
        let errors = self.errors;
        self.form.update(|draft| {
            errors.update(|errors| apply_input(draft, errors, field, &raw));
        });
    }

    /// Replace the cached collection from the server
    pub fn load(&self) {
        let entries = self.entries;
        wasm_bindgen_futures::spawn_local(async move {
            match model::fetch_all().await {
                Ok(v) => entries.set(v),
                Err(e) => log::error!("Error fetching sales entries: {}", e),
            }
        });
    }

    /// Validate and save the draft
    ///
    /// An invalid draft sets the error mapping and issues no network call.
    /// On success the collection is refetched wholesale and the draft
    /// resets to defaults (which also leaves edit mode); on failure every
    /// piece of state is left untouched.
    pub fn submit(&self) {
        let draft = self.form.get();
        let errors = draft.validate();
        if !errors.is_empty() {
            self.errors.set(errors);
            return;
        }
        self.errors.set(ValidationErrors::new());

        let vm = *self;
        wasm_bindgen_futures::spawn_local(async move {
            let result = match draft.id.as_deref() {
                Some(id) => model::update(id, &draft).await,
                None => model::create(&draft).await,
            };
            match result {
                Ok(()) => {
                    vm.form.set(default_draft());
                    vm.refetch().await;
                }
                Err(e) => log::error!("Error saving entry: {}", e),
            }
        });
    }

    /// Delete an entry, then refetch the collection
    pub fn delete(&self, id: String) {
        let prompt = format!("Delete this {}?", SalesEntry::element_name().to_lowercase());
        let confirmed = web_sys::window()
            .map(|w| w.confirm_with_message(&prompt).unwrap_or(false))
            .unwrap_or(false);
        if !confirmed {
            return;
        }

        let vm = *self;
        wasm_bindgen_futures::spawn_local(async move {
            match model::delete(&id).await {
                Ok(()) => vm.refetch().await,
                Err(e) => log::error!("Error deleting entry: {}", e),
            }
        });
    }

    /// Copy the identified entry into the form for editing
    ///
    /// Linear scan over the cached collection; an unknown id changes
    /// nothing.
    pub fn begin_edit(&self, id: &str) {
        let draft = self
            .entries
            .with(|entries| find_entry(entries, id).map(draft_from_entry));
        if let Some(draft) = draft {
            self.form.set(draft);
        }
    }

    /// Drop the draft and leave edit mode
    pub fn cancel_edit(&self) {
        self.form.set(default_draft());
        self.errors.set(ValidationErrors::new());
    }

    /// Total sales for the current calendar month
    pub fn monthly_total(&self) -> f64 {
        self.entries.with(|entries| {
            reporting::monthly_total(entries, chrono::Utc::now().date_naive())
        })
    }

    /// Commission on the current month's total, at the default rate
    pub fn commission(&self) -> f64 {
        reporting::commission(
            self.monthly_total(),
            reporting::DEFAULT_COMMISSION_RATE_PERCENT,
        )
    }

    async fn refetch(&self) {
        match model::fetch_all().await {
            Ok(v) => self.entries.set(v),
            Err(e) => log::error!("Error fetching sales entries: {}", e),
        }
    }
}

impl Default for SalesEntryPageViewModel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id_and_code: &str, date: &str, amount: &str) -> SalesEntry {
        let mut entry = SalesEntry::new_for_insert(
            date.to_string(),
            id_and_code.to_string(),
            "Customer".to_string(),
            amount.to_string(),
            None,
        );
        entry.customer_name = format!("Customer {}", id_and_code);
        entry
    }

    #[test]
    fn test_default_draft_is_today_with_empty_fields() {
        let draft = default_draft();
        let today = chrono::Utc::now().date_naive().format("%Y-%m-%d").to_string();
        assert_eq!(draft.date, today);
        assert!(draft.id.is_none());
        assert!(draft.order_code.is_empty());
        assert!(draft.customer_name.is_empty());
        assert!(draft.sale_amount.is_empty());
    }

    #[test]
    fn test_draft_from_entry_copies_id() {
        let e = entry("A1", "2024-01-01", "1000");
        let draft = draft_from_entry(&e);
        assert_eq!(draft.id, Some(e.to_string_id()));
        assert_eq!(draft.date, "2024-01-01");
        assert_eq!(draft.order_code, "A1");
        assert_eq!(draft.sale_amount, "1000");
    }

    #[test]
    fn test_find_entry_miss_is_none() {
        let entries = vec![entry("A1", "2024-01-01", "1000")];
        assert!(find_entry(&entries, "no-such-id").is_none());
        let hit = find_entry(&entries, &entries[0].to_string_id());
        assert!(hit.is_some());
    }

    #[test]
    fn test_apply_input_strips_amount_digits() {
        let mut draft = SalesEntryDto::default();
        let mut errors = ValidationErrors::new();
        apply_input(&mut draft, &mut errors, FormField::SaleAmount, "12a3b");
        assert_eq!(draft.sale_amount, "123");
        apply_input(&mut draft, &mut errors, FormField::SaleAmount, "");
        assert_eq!(draft.sale_amount, "");
    }

    #[test]
    fn test_apply_input_stores_other_fields_verbatim() {
        let mut draft = SalesEntryDto::default();
        let mut errors = ValidationErrors::new();
        apply_input(&mut draft, &mut errors, FormField::OrderCode, " A-1 ");
        assert_eq!(draft.order_code, " A-1 ");
        apply_input(&mut draft, &mut errors, FormField::CustomerName, "X");
        assert_eq!(draft.customer_name, "X");
    }

    #[test]
    fn test_apply_input_clears_only_its_own_error() {
        let mut draft = SalesEntryDto::default();
        let mut errors = draft.validate();
        assert_eq!(errors.len(), 4);

        apply_input(&mut draft, &mut errors, FormField::CustomerName, "X");
        assert!(errors.get(FIELD_CUSTOMER_NAME).is_none());
        assert_eq!(errors.len(), 3);

        // the clear is optimistic: emptying a field still clears its error
        apply_input(&mut draft, &mut errors, FormField::CustomerName, "");
        assert!(errors.get(FIELD_CUSTOMER_NAME).is_none());
    }

    #[test]
    fn test_begin_edit_unknown_id_changes_nothing() {
        let vm = SalesEntryPageViewModel::new();
        vm.entries.set(vec![entry("A1", "2024-01-01", "1000")]);
        let before_form = vm.form.get();
        let before_errors = vm.errors.get();

        vm.begin_edit("no-such-id");

        assert_eq!(vm.form.get(), before_form);
        assert_eq!(vm.errors.get(), before_errors);
        assert!(!vm.is_edit_mode());
    }

    #[test]
    fn test_begin_edit_copies_entry_into_form() {
        let vm = SalesEntryPageViewModel::new();
        let e = entry("A1", "2024-01-01", "1000");
        let id = e.to_string_id();
        vm.entries.set(vec![e]);

        vm.begin_edit(&id);

        assert!(vm.is_edit_mode());
        assert_eq!(vm.form.get().id, Some(id));
        assert_eq!(vm.form.get().sale_amount, "1000");

        vm.cancel_edit();
        assert!(!vm.is_edit_mode());
        assert!(vm.form.get().order_code.is_empty());
    }
}
