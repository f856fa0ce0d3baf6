//! Process-wide notification service.
//!
//! One `NotifyService` is provided at the application root and injected via
//! context wherever a toast is needed. The queue is bounded; pushing beyond
//! the bound drops the oldest entries. Each toast is auto-dismissed after a
//! fixed delay or manually via its close button.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

const MAX_TOASTS: usize = 5;
const AUTO_DISMISS_MS: u32 = 5000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Warning,
    Danger,
}

impl Severity {
    pub fn css_suffix(self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Success => "success",
            Severity::Warning => "warning",
            Severity::Danger => "danger",
        }
    }
}

/// Inline alert content, scoped to a card or modal. Replaced when the next
/// operation starts, dismissed by user action.
#[derive(Debug, Clone, PartialEq)]
pub struct AlertData {
    pub severity: Severity,
    pub message: String,
}

impl AlertData {
    pub fn info(message: impl Into<String>) -> Self {
        Self { severity: Severity::Info, message: message.into() }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self { severity: Severity::Success, message: message.into() }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self { severity: Severity::Warning, message: message.into() }
    }

    pub fn danger(message: impl Into<String>) -> Self {
        Self { severity: Severity::Danger, message: message.into() }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub severity: Severity,
    pub message: String,
}

#[derive(Clone, Copy)]
pub struct NotifyService {
    toasts: RwSignal<Vec<Toast>>,
    next_id: StoredValue<u64>,
}

impl NotifyService {
    pub fn new() -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(0),
        }
    }

    pub fn toasts(&self) -> RwSignal<Vec<Toast>> {
        self.toasts
    }

    pub fn push(&self, severity: Severity, message: impl Into<String>) {
        let id = self
            .next_id
            .try_update_value(|n| {
                *n += 1;
                *n
            })
            .unwrap_or(0);
        let toast = Toast { id, severity, message: message.into() };
        self.toasts.update(|queue| push_bounded(queue, toast, MAX_TOASTS));

        let toasts = self.toasts;
        spawn_local(async move {
            TimeoutFuture::new(AUTO_DISMISS_MS).await;
            let _ = toasts.try_update(|queue| queue.retain(|t| t.id != id));
        });
    }

    pub fn info(&self, message: impl Into<String>) {
        self.push(Severity::Info, message);
    }

    pub fn success(&self, message: impl Into<String>) {
        self.push(Severity::Success, message);
    }

    pub fn warning(&self, message: impl Into<String>) {
        self.push(Severity::Warning, message);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(Severity::Danger, message);
    }

    pub fn dismiss(&self, id: u64) {
        self.toasts.update(|queue| queue.retain(|t| t.id != id));
    }
}

impl Default for NotifyService {
    fn default() -> Self {
        Self::new()
    }
}

fn push_bounded(queue: &mut Vec<Toast>, toast: Toast, max: usize) {
    queue.push(toast);
    if queue.len() > max {
        let overflow = queue.len() - max;
        queue.drain(0..overflow);
    }
}

pub fn use_notify() -> NotifyService {
    use_context::<NotifyService>().expect("NotifyService not provided in context")
}

#[component]
pub fn ToastHost() -> impl IntoView {
    let notify = use_notify();

    view! {
        <div class="toast-host">
            <For
                each=move || notify.toasts().get()
                key=|t| t.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div class=format!("toast toast--{}", toast.severity.css_suffix())>
                            <span class="toast__message">{toast.message.clone()}</span>
                            <button class="toast__dismiss" on:click=move |_| notify.dismiss(id)>
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toast(id: u64) -> Toast {
        Toast { id, severity: Severity::Info, message: format!("t{}", id) }
    }

    #[test]
    fn test_queue_is_bounded_dropping_oldest() {
        let mut queue = Vec::new();
        for id in 0..7 {
            push_bounded(&mut queue, toast(id), 5);
        }
        let ids: Vec<u64> = queue.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![2, 3, 4, 5, 6]);
    }
}
