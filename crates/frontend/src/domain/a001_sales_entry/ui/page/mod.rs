//! Sales Entry page UI module
//!
//! Simplified MVVM pattern implementation:
//! - model.rs: API functions (fetch, save, delete)
//! - view_model.rs: ViewModel with commands and state management
//! - view.rs: Leptos component (pure UI)

mod model;
mod view;
mod view_model;

pub use view::SalesEntryPage;
pub use view_model::SalesEntryPageViewModel;
