//! Toast notifications
//!
//! The notification API is awaitable: [`show_toast`] resolves once the
//! toast has been visible for the requested duration, so callers sequence
//! follow-up work (like a view reload) after the user has seen the
//! message. A duration of 0 resolves immediately and leaves the toast up.

use gloo::timers::future::TimeoutFuture;
use leptos::prelude::*;

/// Display time before a success continuation runs.
pub const SUCCESS_TOAST_MS: u32 = 1500;
/// Display time for error toasts.
pub const ERROR_TOAST_MS: u32 = 4000;

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    fn class(self) -> &'static str {
        match self {
            ToastKind::Success => "toast-success",
            ToastKind::Error => "toast-error",
        }
    }
}

/// One visible notification.
#[derive(Clone, PartialEq)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
}

/// Show a toast, await its display time, then dismiss it.
pub async fn show_toast(host: RwSignal<Option<Toast>>, message: String, kind: ToastKind, visible_ms: u32) {
    host.set(Some(Toast { message, kind }));
    if visible_ms > 0 {
        TimeoutFuture::new(visible_ms).await;
        host.set(None);
    }
}

#[component]
pub fn ToastHost(
    /// Shared slot; `None` renders nothing
    toast: RwSignal<Option<Toast>>,
) -> impl IntoView {
    view! {
        <div class="toast-container">
            {move || {
                toast.get().map(|t| {
                    view! {
                        <div class=format!("toast {}", t.kind.class())>
                            {t.message}
                        </div>
                    }
                })
            }}
        </div>
    }
}
