//! Per-screen UI session
//!
//! Holds the JSON viewer drawer, the confirm prompt and the edit channel for
//! one list screen. Created when the screen mounts and provided through
//! context to its rows, so every row shares one drawer and nothing outlives
//! the screen.

use std::future::Future;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::api::ApiError;
use crate::shared::notifications::{use_notifications, Notifications};
use crate::shared::remote_state::{BrowserScheduler, MutationChannel};
use crate::shared::text_diff::{diff_lines, DiffLine};

/// Optimistic edits of the rows on screen
pub type EditChannel = MutationChannel<Notifications, BrowserScheduler>;

/// Stock summary and advised stock shown under the product JSON editor
#[derive(Debug, Clone, PartialEq)]
pub struct AdvicePanel {
    /// Per-colour and per-size totals of the stock document
    pub summary: String,
    /// Sales document the advice is distributed over
    pub sale_detail: String,
    pub sale_sum: i64,
    /// Initial advised total: `sales30 * SALE2STOCK`
    pub advise_total: i64,
}

#[derive(Clone)]
pub struct ViewerState {
    pub title: String,
    pub text: String,
    /// Called with the final text when an editable drawer closes
    pub on_close: Option<Callback<String>>,
    pub advice: Option<AdvicePanel>,
    /// Line diff shown instead of the text
    pub diff: Option<Vec<DiffLine>>,
}

impl ViewerState {
    pub fn read_only(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            text: text.into(),
            on_close: None,
            advice: None,
            diff: None,
        }
    }

    pub fn editable(title: impl Into<String>, text: impl Into<String>, on_close: Callback<String>) -> Self {
        Self {
            title: title.into(),
            text: text.into(),
            on_close: Some(on_close),
            advice: None,
            diff: None,
        }
    }

    /// Read-only comparison of `left` (before) against `right` (after)
    pub fn diff(title: impl Into<String>, left: &str, right: &str) -> Self {
        Self {
            title: title.into(),
            text: String::new(),
            on_close: None,
            advice: None,
            diff: Some(diff_lines(left, right)),
        }
    }

    pub fn with_advice(mut self, advice: AdvicePanel) -> Self {
        self.advice = Some(advice);
        self
    }

    pub fn is_editable(&self) -> bool {
        self.on_close.is_some()
    }
}

#[derive(Clone)]
pub struct ConfirmRequest {
    pub message: String,
    pub on_confirm: Callback<()>,
    pub on_cancel: Option<Callback<()>>,
}

#[derive(Clone, Copy)]
pub struct UiSession {
    pub viewer: RwSignal<Option<ViewerState>>,
    pub confirm: RwSignal<Option<ConfirmRequest>>,
    pub notifications: Notifications,
    edits: StoredValue<EditChannel>,
}

impl UiSession {
    /// Create the session for the current screen and put it in context
    pub fn provide() -> Self {
        let notifications = use_notifications();
        let session = Self {
            viewer: RwSignal::new(None),
            confirm: RwSignal::new(None),
            notifications,
            edits: StoredValue::new(MutationChannel::new(notifications, BrowserScheduler)),
        };
        provide_context(session);
        session
    }

    pub fn edits(&self) -> EditChannel {
        self.edits.get_value()
    }

    pub fn open_viewer(&self, state: ViewerState) {
        self.viewer.set(Some(state));
    }

    /// Close the drawer, handing the edited text to its callback
    pub fn close_viewer(&self, final_text: String) {
        if let Some(state) = self.viewer.get_untracked() {
            self.viewer.set(None);
            if let Some(on_close) = state.on_close {
                on_close.run(final_text);
            }
        }
    }

    pub fn ask(&self, message: impl Into<String>, on_confirm: impl Fn() + Send + Sync + 'static) {
        self.confirm.set(Some(ConfirmRequest {
            message: message.into(),
            on_confirm: Callback::new(move |_: ()| on_confirm()),
            on_cancel: None,
        }));
    }

    pub fn ask_or_else(
        &self,
        message: impl Into<String>,
        on_confirm: impl Fn() + Send + Sync + 'static,
        on_cancel: impl Fn() + Send + Sync + 'static,
    ) {
        self.confirm.set(Some(ConfirmRequest {
            message: message.into(),
            on_confirm: Callback::new(move |_: ()| on_confirm()),
            on_cancel: Some(Callback::new(move |_: ()| on_cancel())),
        }));
    }

    /// Ask first, then run `action` and report the outcome as a toast
    pub fn confirm_then<F, Fut>(&self, message: impl Into<String>, done: &'static str, action: F)
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<(), ApiError>> + 'static,
    {
        let notifications = self.notifications;
        self.ask(message, move || {
            let request = action();
            spawn_local(async move {
                match request.await {
                    Ok(()) => notifications.info(done),
                    Err(e) => {
                        log::warn!("confirmed action failed: {}", e);
                        notifications.error(e.to_string());
                    }
                }
            });
        });
    }

    pub fn answer(&self, accepted: bool) {
        if let Some(request) = self.confirm.get_untracked() {
            self.confirm.set(None);
            if accepted {
                request.on_confirm.run(());
            } else if let Some(on_cancel) = request.on_cancel {
                on_cancel.run(());
            }
        }
    }
}

pub fn use_session() -> UiSession {
    expect_context::<UiSession>()
}
