use super::view_model::{FormField, SalesEntryPageViewModel};
use crate::shared::components::table::number_format::{
    format_amount, format_money, format_number_int,
};
use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;
use contracts::domain::a001_sales_entry::aggregate::{
    FIELD_CUSTOMER_NAME, FIELD_DATE, FIELD_ORDER_CODE, FIELD_SALE_AMOUNT,
};
use contracts::domain::a001_sales_entry::reporting::DEFAULT_COMMISSION_RATE_PERCENT;
use leptos::prelude::*;

fn field_error(vm: SalesEntryPageViewModel, field: &'static str) -> impl IntoView {
    move || {
        vm.errors
            .with(|errors| errors.get(field).map(|m| m.to_string()))
            .map(|m| view! { <div class="field-error">{m}</div> })
    }
}

#[component]
#[allow(non_snake_case)]
pub fn SalesEntryPage() -> impl IntoView {
    let vm = SalesEntryPageViewModel::new();
    vm.load();

    view! {
        <div class="page-container sales-entry-page">
            <div class="page-header">
                <h2>{"Sales Commission"}</h2>
                <button
                    class="btn btn-secondary"
                    on:click=move |_| vm.load()
                >
                    {icon("refresh")}
                    {"Refresh"}
                </button>
            </div>

            <div class="details-form">
                <div class="form-group">
                    <label for="date">{"Date"}</label>
                    <input
                        type="date"
                        id="date"
                        prop:value=move || vm.form.get().date
                        on:input=move |ev| vm.input(FormField::Date, event_target_value(&ev))
                    />
                    {field_error(vm, FIELD_DATE)}
                </div>

                <div class="form-group">
                    <label for="order_code">{"Order code"}</label>
                    <input
                        type="text"
                        id="order_code"
                        prop:value=move || vm.form.get().order_code
                        on:input=move |ev| vm.input(FormField::OrderCode, event_target_value(&ev))
                        placeholder="Enter the order code"
                    />
                    {field_error(vm, FIELD_ORDER_CODE)}
                </div>

                <div class="form-group">
                    <label for="customer_name">{"Customer name"}</label>
                    <input
                        type="text"
                        id="customer_name"
                        prop:value=move || vm.form.get().customer_name
                        on:input=move |ev| {
                            vm.input(FormField::CustomerName, event_target_value(&ev))
                        }
                        placeholder="Enter the customer name"
                    />
                    {field_error(vm, FIELD_CUSTOMER_NAME)}
                </div>

                <div class="form-group">
                    <label for="sale_amount">{"Sale amount"}</label>
                    <input
                        type="text"
                        id="sale_amount"
                        inputmode="numeric"
                        prop:value=move || vm.form.with(|f| format_amount(&f.sale_amount))
                        on:input=move |ev| vm.input(FormField::SaleAmount, event_target_value(&ev))
                        placeholder="Digits only"
                    />
                    {field_error(vm, FIELD_SALE_AMOUNT)}
                </div>

                <div class="details-actions">
                    <button
                        class="btn btn-primary"
                        on:click=move |_| vm.submit()
                    >
                        {icon("save")}
                        {move || if vm.is_edit_mode() { "Update Entry" } else { "Add Entry" }}
                    </button>
                    <Show when=move || vm.is_edit_mode()>
                        <button
                            class="btn btn-secondary"
                            on:click=move |_| vm.cancel_edit()
                        >
                            {icon("cancel")}
                            {"Cancel"}
                        </button>
                    </Show>
                </div>
            </div>

            <table class="data-table">
                <thead>
                    <tr>
                        <th>{"Date"}</th>
                        <th>{"Order code"}</th>
                        <th>{"Customer"}</th>
                        <th class="numeric">{"Amount"}</th>
                        <th>{"Actions"}</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        vm.entries
                            .get()
                            .into_iter()
                            .map(|entry| {
                                let id = entry.to_string_id();
                                let edit_id = id.clone();
                                let delete_id = id.clone();
                                view! {
                                    <tr>
                                        <td>{format_date(&entry.date)}</td>
                                        <td>{entry.order_code.clone()}</td>
                                        <td>{entry.customer_name.clone()}</td>
                                        <td class="numeric">{format_amount(&entry.sale_amount)}</td>
                                        <td class="actions">
                                            <button
                                                class="btn-icon"
                                                title="Edit"
                                                on:click=move |_| vm.begin_edit(&edit_id)
                                            >
                                                {icon("edit")}
                                            </button>
                                            <button
                                                class="btn-icon btn-danger"
                                                title="Delete"
                                                on:click=move |_| vm.delete(delete_id.clone())
                                            >
                                                {icon("delete")}
                                            </button>
                                        </td>
                                    </tr>
                                }
                            })
                            .collect_view()
                    }}
                </tbody>
            </table>

            <div class="totals-footer">
                <div class="total-line">
                    <span>{"Total price sold this month: "}</span>
                    <span class="numeric">{move || format_number_int(vm.monthly_total())}</span>
                </div>
                <div class="total-line">
                    <span>
                        {format!(
                            "Total price commission this month ({}%): ",
                            DEFAULT_COMMISSION_RATE_PERCENT
                        )}
                    </span>
                    <span class="numeric">{move || format_money(vm.commission())}</span>
                </div>
            </div>
        </div>
    }
}
