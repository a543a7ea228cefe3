use crate::domain::a001_sales_entry::ui::page::SalesEntryPage;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Single-page application: the sales entry page is the whole UI.
    view! {
        <SalesEntryPage />
    }
}
