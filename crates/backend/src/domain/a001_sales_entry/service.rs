use super::repository;
use contracts::domain::a001_sales_entry::aggregate::{SalesEntry, SalesEntryDto};
use uuid::Uuid;

/// Create a new sales entry
pub async fn create(dto: SalesEntryDto) -> anyhow::Result<Uuid> {
    validate_dto(&dto)?;

    let mut aggregate = SalesEntry::new_for_insert(
        dto.date,
        dto.order_code,
        dto.customer_name,
        dto.sale_amount,
        None,
    );

    // Before write
    aggregate.before_write();

    repository::insert(&aggregate).await
}

/// Update an existing sales entry with the full draft payload
///
/// Returns `Ok(false)` when no live entry has this id, so the handler can
/// distinguish a missing row from a failed write.
pub async fn update(id: Uuid, dto: SalesEntryDto) -> anyhow::Result<bool> {
    validate_dto(&dto)?;

    let mut aggregate = match repository::get_by_id(id).await? {
        Some(aggregate) => aggregate,
        None => return Ok(false),
    };

    aggregate.update(&dto);

    // Before write
    aggregate.before_write();

    repository::update(&aggregate).await?;
    Ok(true)
}

/// Soft delete a sales entry
pub async fn delete(id: Uuid) -> anyhow::Result<bool> {
    repository::soft_delete(id).await
}

/// Get a sales entry by ID
pub async fn get_by_id(id: Uuid) -> anyhow::Result<Option<SalesEntry>> {
    repository::get_by_id(id).await
}

/// List all live sales entries
pub async fn list_all() -> anyhow::Result<Vec<SalesEntry>> {
    repository::list_all().await
}

/// Draft checks shared by create and update
///
/// Field presence follows the client-side rules; the digit check guards
/// the stored invariant against callers other than our own frontend.
fn validate_dto(dto: &SalesEntryDto) -> anyhow::Result<()> {
    let errors = dto.validate();
    if !errors.is_empty() {
        let joined = errors
            .iter()
            .map(|(_, message)| message)
            .collect::<Vec<_>>()
            .join("; ");
        anyhow::bail!("Validation failed: {}", joined);
    }
    if !dto.sale_amount.chars().all(|c| c.is_ascii_digit()) {
        anyhow::bail!("Validation failed: Sale amount must contain only digits");
    }
    Ok(())
}

/// Seed a few entries for manual testing
pub async fn insert_test_data() -> anyhow::Result<()> {
    let month = chrono::Utc::now().format("%Y-%m");
    let data = vec![
        SalesEntryDto {
            id: None,
            date: format!("{}-01", month),
            order_code: "ORD-1001".into(),
            customer_name: "Acme Trading".into(),
            sale_amount: "1250000".into(),
        },
        SalesEntryDto {
            id: None,
            date: format!("{}-05", month),
            order_code: "ORD-1002".into(),
            customer_name: "Blue Harbor Ltd".into(),
            sale_amount: "480000".into(),
        },
        SalesEntryDto {
            id: None,
            date: format!("{}-12", month),
            order_code: "ORD-1003".into(),
            customer_name: "Nguyen & Sons".into(),
            sale_amount: "3600000".into(),
        },
    ];

    for dto in data {
        create(dto).await?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(date: &str, order_code: &str, customer: &str, amount: &str) -> SalesEntryDto {
        SalesEntryDto {
            id: None,
            date: date.into(),
            order_code: order_code.into(),
            customer_name: customer.into(),
            sale_amount: amount.into(),
        }
    }

    #[tokio::test]
    async fn test_crud_round_trip() {
        let db_file = std::env::temp_dir().join(format!("sales-test-{}.db", Uuid::new_v4()));
        crate::shared::data::db::initialize_database(Some(db_file.to_str().unwrap()))
            .await
            .unwrap();

        // an empty draft is rejected before any write happens
        assert!(create(SalesEntryDto::default()).await.is_err());
        // so is a non-digit amount
        assert!(create(draft("2024-01-01", "A1", "X", "12.50")).await.is_err());
        assert!(list_all().await.unwrap().is_empty());

        // create
        let id = create(draft("2024-01-01", "A1", "X", "1000")).await.unwrap();
        let listed = list_all().await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].order_code, "A1");
        assert_eq!(listed[0].sale_amount, "1000");

        // update the amount, list reflects it
        assert!(update(id, draft("2024-01-01", "A1", "X", "2000"))
            .await
            .unwrap());
        let listed = list_all().await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].sale_amount, "2000");

        // a missing entry is reported as not found, not as a failure,
        // and leaves no side effects
        assert!(!update(Uuid::new_v4(), draft("2024-01-01", "A1", "X", "1"))
            .await
            .unwrap());
        assert_eq!(list_all().await.unwrap().len(), 1);

        // delete, list no longer includes it
        assert!(delete(id).await.unwrap());
        assert!(list_all().await.unwrap().is_empty());
        assert!(get_by_id(id).await.unwrap().is_none());

        let _ = std::fs::remove_file(&db_file);
    }
}
