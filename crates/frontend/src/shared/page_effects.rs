//! Side effects of the panels outside the network: prompts, notifications,
//! reloads and redirects.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

use crate::shared::config::AppConfig;
use crate::shared::notifications::{use_notifier, NotificationKind, Notifier};

pub trait PageEffects {
    /// Blocking yes/no prompt
    fn confirm(&self, message: &str) -> bool;
    fn notify(&self, message: &str, kind: NotificationKind);
    fn reload(&self);
    fn redirect(&self, path: &str);
}

#[derive(Clone, Copy)]
pub struct BrowserEffects {
    notifier: Notifier,
    reload_delay_ms: u32,
}

impl BrowserEffects {
    pub fn new(notifier: Notifier, reload_delay_ms: u32) -> Self {
        Self {
            notifier,
            reload_delay_ms,
        }
    }
}

impl PageEffects for BrowserEffects {
    fn confirm(&self, message: &str) -> bool {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }

    fn notify(&self, message: &str, kind: NotificationKind) {
        self.notifier.show(message, kind);
    }

    fn reload(&self) {
        Timeout::new(self.reload_delay_ms, || {
            if let Some(w) = web_sys::window() {
                let _ = w.location().reload();
            }
        })
        .forget();
    }

    fn redirect(&self, path: &str) {
        if let Some(w) = web_sys::window() {
            let _ = w.location().set_href(path);
        }
    }
}

pub fn use_effects() -> BrowserEffects {
    let config = use_context::<AppConfig>().expect("AppConfig not found in context");
    BrowserEffects::new(use_notifier(), config.ui.reload_delay_ms)
}

#[cfg(test)]
pub mod testing {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum Recorded {
        Confirm(String),
        Notify(String, NotificationKind),
        Reload,
        Redirect(String),
    }

    /// Answers every prompt with `answer` and records what happened.
    #[derive(Clone)]
    pub struct ScriptedEffects {
        pub answer: bool,
        pub log: Rc<RefCell<Vec<Recorded>>>,
    }

    impl ScriptedEffects {
        pub fn answering(answer: bool) -> Self {
            Self {
                answer,
                log: Rc::default(),
            }
        }

        pub fn recorded(&self) -> Vec<Recorded> {
            self.log.borrow().clone()
        }
    }

    impl PageEffects for ScriptedEffects {
        fn confirm(&self, message: &str) -> bool {
            self.log
                .borrow_mut()
                .push(Recorded::Confirm(message.to_string()));
            self.answer
        }

        fn notify(&self, message: &str, kind: NotificationKind) {
            self.log
                .borrow_mut()
                .push(Recorded::Notify(message.to_string(), kind));
        }

        fn reload(&self) {
            self.log.borrow_mut().push(Recorded::Reload);
        }

        fn redirect(&self, path: &str) {
            self.log
                .borrow_mut()
                .push(Recorded::Redirect(path.to_string()));
        }
    }
}
