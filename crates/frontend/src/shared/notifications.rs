//! Transient notifications: one at a time, auto-dismissed.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

const FADE_MS: u32 = 300;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
    Info,
}

impl NotificationKind {
    pub fn css_class(&self) -> &'static str {
        match self {
            NotificationKind::Success => "success",
            NotificationKind::Error => "error",
            NotificationKind::Info => "info",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: u64,
    pub message: String,
    pub kind: NotificationKind,
    pub fading: bool,
}

#[derive(Clone, Copy)]
pub struct Notifier {
    pub current: RwSignal<Option<Notification>>,
    last_id: RwSignal<u64>,
    timeout_ms: u32,
}

impl Notifier {
    pub fn new(timeout_ms: u32) -> Self {
        Self {
            current: RwSignal::new(None),
            last_id: RwSignal::new(0),
            timeout_ms,
        }
    }

    /// Replace the visible notification and schedule its removal.
    pub fn show(&self, message: impl Into<String>, kind: NotificationKind) {
        let id = self.replace(message.into(), kind);

        let current = self.current;
        let timeout = self.timeout_ms;
        spawn_local(async move {
            TimeoutFuture::new(timeout).await;
            fade_out(current, id).await;
        });
    }

    fn replace(&self, message: String, kind: NotificationKind) -> u64 {
        let id = self.last_id.get_untracked() + 1;
        self.last_id.set(id);
        self.current.set(Some(Notification {
            id,
            message,
            kind,
            fading: false,
        }));
        id
    }

    pub fn dismiss(&self) {
        let shown = self
            .current
            .with_untracked(|n| n.as_ref().map(|n| n.id));
        if let Some(id) = shown {
            spawn_local(fade_out(self.current, id));
        }
    }
}

fn is_shown(current: RwSignal<Option<Notification>>, id: u64) -> bool {
    current
        .try_with_untracked(|n| n.as_ref().map(|n| n.id) == Some(id))
        .unwrap_or(false)
}

async fn fade_out(current: RwSignal<Option<Notification>>, id: u64) {
    if !is_shown(current, id) {
        return;
    }
    current.update(|n| {
        if let Some(n) = n {
            n.fading = true;
        }
    });
    TimeoutFuture::new(FADE_MS).await;
    if is_shown(current, id) {
        current.set(None);
    }
}

pub fn use_notifier() -> Notifier {
    use_context::<Notifier>().expect("Notifier not found in context")
}

const NOTIFICATION_CSS: &str = r#"
.custom-notification {
    position: fixed; top: 20px; right: 20px; padding: 15px;
    border-radius: 5px; color: white; background: #2196F3;
    box-shadow: 0 3px 10px rgba(0,0,0,0.2); z-index: 1000;
    transition: all 0.3s ease; max-width: 300px;
}
.custom-notification.success { background: #4CAF50; }
.custom-notification.error { background: #F44336; }
.custom-notification.info { background: #2196F3; }
.custom-notification.fade-out { opacity: 0; transform: translateY(-20px); }
.notification-content { display: flex; justify-content: space-between; align-items: center; }
.close-notification {
    background: none; border: none; color: white;
    font-size: 20px; cursor: pointer; margin-left: 15px;
}
"#;

#[component]
pub fn NotificationHost() -> impl IntoView {
    let notifier = use_notifier();

    view! {
        <style>{NOTIFICATION_CSS}</style>
        {move || notifier.current.get().map(|n| {
            let class = format!(
                "custom-notification {}{}",
                n.kind.css_class(),
                if n.fading { " fade-out" } else { "" },
            );
            view! {
                <div class=class>
                    <div class="notification-content">
                        <p>{n.message}</p>
                        <button class="close-notification" on:click=move |_| notifier.dismiss()>
                            "×"
                        </button>
                    </div>
                </div>
            }
        })}
    }
}
