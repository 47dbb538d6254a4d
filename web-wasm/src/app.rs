//! Main application component

use leptos::prelude::*;

use crate::components::{
    bulk_entry::BulkEntry,
    suggest_input::{SuggestInput, SuggestionKind},
    toast::{Toast, ToastHost},
};

/// Bulk-entry page: router lookup, the scan batch form, the toast host.
#[component]
pub fn App() -> impl IntoView {
    let toast = RwSignal::new(None::<Toast>);
    let lookup = RwSignal::new(String::new());

    view! {
        <div class="container">
            <header class="page-header">
                <h1>"Stock Scan"</h1>
                <p class="text-muted">"Scan serial numbers and create routers in one batch"</p>
            </header>

            <section class="router-lookup">
                <SuggestInput
                    id="router-lookup"
                    label="Find a router"
                    placeholder="Serial number or IMEI prefix..."
                    kind=SuggestionKind::Router
                    value=lookup
                />
            </section>

            <BulkEntry toast=toast />

            <ToastHost toast=toast />
        </div>
    }
}
