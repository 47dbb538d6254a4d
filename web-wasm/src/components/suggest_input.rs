//! Autosuggest input component
//!
//! A text input with a suggestion panel underneath, scoped to one entity
//! kind. One fetch per input event; an empty field hides the panel with
//! no network call; overlapping responses are sequenced by a
//! [`QueryGuard`] so the panel always reflects the latest query.

use leptos::prelude::*;
use leptos::task::spawn_local;
use stock_scan_common::{QueryAction, QueryGuard, Suggestion};

use crate::api;

/// Which suggestion endpoint backs this input.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum SuggestionKind {
    /// Router serial/IMEI prefix search
    Router,
    /// Category name prefix search
    Category,
}

async fn fetch(kind: SuggestionKind, value: String) -> stock_scan_common::Result<Vec<Suggestion>> {
    match kind {
        SuggestionKind::Router => api::routers::router_suggestions(&value).await,
        SuggestionKind::Category => api::categories::category_suggestions(&value).await,
    }
}

#[component]
pub fn SuggestInput(
    id: &'static str,
    label: &'static str,
    placeholder: &'static str,
    kind: SuggestionKind,
    value: RwSignal<String>,
) -> impl IntoView {
    let (suggestions, set_suggestions) = signal(Vec::<Suggestion>::new());
    let guard = RwSignal::new(QueryGuard::new());

    let on_input = move |ev| {
        let query = event_target_value(&ev);
        value.set(query.clone());

        let action = guard
            .try_update(|g| g.begin(&query))
            .unwrap_or(QueryAction::Clear);
        match action {
            QueryAction::Clear => set_suggestions.set(Vec::new()),
            QueryAction::Fetch(query_id) => {
                spawn_local(async move {
                    let rows = match fetch(kind, query).await {
                        Ok(rows) => rows,
                        Err(err) => {
                            // A failed lookup only hides the panel
                            web_sys::console::error_1(&err.to_string().into());
                            Vec::new()
                        }
                    };
                    // Drop the response if a newer query has been typed
                    if guard.with_untracked(|g| g.admit(query_id)) {
                        set_suggestions.set(rows);
                    }
                });
            }
        }
    };

    view! {
        <div class="form-group suggest-group">
            <label for=id>{label}</label>
            <input
                type="text"
                id=id
                placeholder=placeholder
                autocomplete="off"
                prop:value=move || value.get()
                on:input=on_input
            />
            <Show when=move || !suggestions.get().is_empty()>
                <ul class="suggestion-panel">
                    <For
                        each=move || suggestions.get()
                        key=|s| s.label.clone()
                        children=move |s: Suggestion| {
                            let picked = s.target.clone().unwrap_or_else(|| s.label.clone());
                            view! {
                                <li
                                    class="suggestion-item"
                                    on:click=move |_| {
                                        value.set(picked.clone());
                                        set_suggestions.set(Vec::new());
                                    }
                                >
                                    {s.label.clone()}
                                </li>
                            }
                        }
                    />
                </ul>
            </Show>
        </div>
    }
}
