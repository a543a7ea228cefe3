use super::EntityMetadata;

/// Trait for aggregate roots
///
/// Instance accessors plus the static metadata every aggregate class
/// declares about itself (index, collection, UI names).
pub trait AggregateRoot {
    /// Identifier type of the aggregate
    type Id;

    /// Record ID
    fn id(&self) -> Self::Id;

    /// Lifecycle metadata
    fn metadata(&self) -> &EntityMetadata;

    /// Mutable lifecycle metadata
    fn metadata_mut(&mut self) -> &mut EntityMetadata;

    /// Aggregate index in the system (for example "a001")
    fn aggregate_index() -> &'static str;

    /// Collection name for the database (for example "sales_entry")
    fn collection_name() -> &'static str;

    /// UI name, singular
    fn element_name() -> &'static str;

    /// UI name, plural
    fn list_name() -> &'static str;

    /// Full aggregate name (for example "a001_sales_entry")
    fn full_name() -> String {
        format!("{}_{}", Self::aggregate_index(), Self::collection_name())
    }
}
