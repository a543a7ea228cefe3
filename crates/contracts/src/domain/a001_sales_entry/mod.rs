pub mod aggregate;
pub mod reporting;
