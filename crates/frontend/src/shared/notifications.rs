//! Transient toasts
//!
//! Provided once by `App`; every screen surfaces failures through it.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use uuid::Uuid;

use crate::shared::api::ApiError;
use crate::shared::icons::icon;
use crate::shared::remote_state::ErrorSink;

pub const TOAST_HIDE_AFTER_MS: u32 = 3000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Info,
    Error,
}

impl ToastLevel {
    fn class(self) -> &'static str {
        match self {
            ToastLevel::Info => "toast toast--info",
            ToastLevel::Error => "toast toast--error",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: Uuid,
    pub level: ToastLevel,
    pub message: String,
}

#[derive(Clone, Copy)]
pub struct Notifications {
    toasts: RwSignal<Vec<Toast>>,
}

impl Notifications {
    pub fn new() -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
        }
    }

    pub fn info(&self, message: impl Into<String>) {
        self.push(ToastLevel::Info, message.into());
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(ToastLevel::Error, message.into());
    }

    pub fn dismiss(&self, id: Uuid) {
        self.toasts.try_update(|list| list.retain(|t| t.id != id));
    }

    fn push(&self, level: ToastLevel, message: String) {
        let id = Uuid::new_v4();
        self.toasts.update(|list| list.push(Toast { id, level, message }));
        let this = *self;
        spawn_local(async move {
            TimeoutFuture::new(TOAST_HIDE_AFTER_MS).await;
            this.dismiss(id);
        });
    }
}

impl Default for Notifications {
    fn default() -> Self {
        Self::new()
    }
}

impl ErrorSink for Notifications {
    fn surface(&self, error: &ApiError) {
        self.error(error.to_string());
    }
}

pub fn use_notifications() -> Notifications {
    expect_context::<Notifications>()
}

#[component]
pub fn ToastHost() -> impl IntoView {
    let notifications = use_notifications();

    view! {
        <div class="toast-host">
            <For
                each=move || notifications.toasts.get()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div class=toast.level.class() role="alert">
                            <span class="toast__message">{toast.message}</span>
                            <button
                                class="toast__close"
                                title="Закрыть"
                                on:click=move |_| notifications.dismiss(id)
                            >
                                {icon("close")}
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
