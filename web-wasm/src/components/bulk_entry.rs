//! Bulk-entry view
//!
//! Owns the scan batch and everything rendered from it. Two explicit entry
//! points feed the batch (no input-event sniffing): the scanner field
//! validates every value-growing input event as a candidate complete
//! serial, and the paste area takes whole whitespace-separated lists. A
//! rejected scan keeps the field content and refocuses it; the paste area
//! is cleared only when every chunk validated. Submission sends the batch
//! once; success clears it, toasts and reloads, failure leaves all state
//! in place for correction.

use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;
use stock_scan_common::{build_request, ScanBatch, ScanOutcome};

use crate::api;
use crate::components::suggest_input::{SuggestInput, SuggestionKind};
use crate::components::toast::{show_toast, Toast, ToastKind, ERROR_TOAST_MS, SUCCESS_TOAST_MS};

fn reload_view() {
    if let Some(window) = web_sys::window() {
        let _ = window.location().reload();
    }
}

#[component]
pub fn BulkEntry(toast: RwSignal<Option<Toast>>) -> impl IntoView {
    let batch = RwSignal::new(ScanBatch::new());
    let category = RwSignal::new(String::new());

    let scan_value = RwSignal::new(String::new());
    let paste_value = RwSignal::new(String::new());
    // Field length after the previous input event; shrinking means deletion
    let last_len = RwSignal::new(0usize);

    let scan_error = RwSignal::new(None::<String>);
    let scan_notice = RwSignal::new(None::<String>);
    let (submitting, set_submitting) = signal(false);

    let scan_ref = NodeRef::<html::Input>::new();
    let focus_scan = move || {
        if let Some(input) = scan_ref.get() {
            let _ = input.focus();
        }
    };

    // Single-scan entry point: every value-growing input event is a
    // candidate complete serial (scanners insert the whole code at once).
    let on_scan_input = move |ev| {
        let raw = event_target_value(&ev);
        let prev_len = last_len.get_untracked();
        last_len.set(raw.len());
        scan_value.set(raw.clone());

        if raw.len() <= prev_len || raw.trim().is_empty() {
            return;
        }

        match batch.try_update(|b| b.push_scan(&raw)) {
            Some(Ok(ScanOutcome::Added)) => {
                scan_error.set(None);
                scan_notice.set(None);
                scan_value.set(String::new());
                last_len.set(0);
                focus_scan();
            }
            Some(Ok(ScanOutcome::Duplicate)) => {
                // Re-scanning a unit is a no-op, not an error
                scan_error.set(None);
                scan_notice.set(Some(format!("{} is already in the batch", raw.trim())));
                scan_value.set(String::new());
                last_len.set(0);
                focus_scan();
            }
            Some(Err(err)) => {
                // Keep the value so the user can correct it
                scan_notice.set(None);
                scan_error.set(Some(err.user_message()));
                focus_scan();
            }
            None => {}
        }
    };

    // Batch-paste entry point: one whitespace-separated list at a time.
    let on_paste_add = move |_| {
        let text = paste_value.get_untracked();
        let report = batch.try_update(|b| b.push_paste(&text)).unwrap_or_default();

        if report.all_valid() {
            paste_value.set(String::new());
            scan_error.set(None);
            if report.added > 0 || report.duplicates > 0 {
                scan_notice.set(Some(format!(
                    "{} added, {} already scanned",
                    report.added, report.duplicates
                )));
            }
        } else {
            scan_notice.set(None);
            scan_error.set(Some(format!(
                "{} added, rejected: {}",
                report.added,
                report.rejected.join(", ")
            )));
        }
    };

    let on_submit = move |_| {
        let request = match batch.with_untracked(|b| build_request(b, &category.get_untracked())) {
            Ok(request) => request,
            Err(err) => {
                spawn_local(show_toast(toast, err.user_message(), ToastKind::Error, ERROR_TOAST_MS));
                return;
            }
        };

        set_submitting.set(true);
        spawn_local(async move {
            match api::routers::create_bulk(&request).await {
                Ok(message) => {
                    batch.update(|b| b.clear());
                    // Let the user read the confirmation, then reload
                    show_toast(toast, message, ToastKind::Success, SUCCESS_TOAST_MS).await;
                    reload_view();
                }
                Err(err) => {
                    // Batch and fields stay intact for correction and retry
                    show_toast(toast, err.user_message(), ToastKind::Error, ERROR_TOAST_MS).await;
                    set_submitting.set(false);
                }
            }
        });
    };

    let chip_serials = move || {
        batch.with(|b| {
            b.serials()
                .iter()
                .map(|s| s.as_str().to_string())
                .collect::<Vec<_>>()
        })
    };

    view! {
        <section class="bulk-entry">
            <h2>"Bulk router entry"</h2>

            <SuggestInput
                id="bulk-category"
                label="Category"
                placeholder="Start typing a category name..."
                kind=SuggestionKind::Category
                value=category
            />

            <div class="form-group">
                <label for="scan-input">"Scan serial numbers"</label>
                <input
                    type="text"
                    id="scan-input"
                    placeholder="Scan a code..."
                    autocomplete="off"
                    node_ref=scan_ref
                    prop:value=move || scan_value.get()
                    on:input=on_scan_input
                />
                {move || scan_error.get().map(|msg| view! { <p class="field-error">{msg}</p> })}
                {move || scan_notice.get().map(|msg| view! { <p class="field-notice">{msg}</p> })}
            </div>

            <div class="form-group">
                <label for="paste-input">"Or paste a list"</label>
                <textarea
                    id="paste-input"
                    placeholder="One code per line or space-separated"
                    prop:value=move || paste_value.get()
                    on:input=move |ev| paste_value.set(event_target_value(&ev))
                />
                <button class="btn btn-secondary btn-small" on:click=on_paste_add>
                    "Add list"
                </button>
            </div>

            <Show
                when=move || batch.with(|b| !b.is_empty())
                fallback=|| view! { <p class="text-muted">"No serial numbers scanned yet"</p> }
            >
                <ul class="scan-chips">
                    <For
                        each=chip_serials
                        key=|serial| serial.clone()
                        children=move |serial: String| {
                            let removed = serial.clone();
                            view! {
                                <li class="scan-chip">
                                    <span>{serial.clone()}</span>
                                    <button
                                        class="chip-remove"
                                        on:click=move |_| batch.update(|b| b.remove(&removed))
                                    >
                                        "×"
                                    </button>
                                </li>
                            }
                        }
                    />
                </ul>
            </Show>

            <div class="bulk-actions">
                <span class="scan-count">
                    {move || format!("{} scanned", batch.with(|b| b.len()))}
                </span>
                <button
                    class="btn btn-primary"
                    disabled=move || submitting.get() || batch.with(|b| b.is_empty())
                    on:click=on_submit
                >
                    {move || if submitting.get() { "Submitting..." } else { "Create routers" }}
                </button>
            </div>
        </section>
    }
}
