use crate::objects::JsError;
use std::collections::HashSet;
use wasm_bindgen::{closure::Closure, JsCast};
use yew_agent::{Agent, AgentLink, Context, HandlerId};

const DISMISS_DELAY_MS: i32 = 4_000;

#[derive(Debug, Clone, PartialEq)]
pub enum NotificationSeverity {
    Info,
    Success,
    Error,
}

impl NotificationSeverity {
    pub fn color_class(&self) -> &'static str {
        match self {
            NotificationSeverity::Error => "is-danger",
            NotificationSeverity::Success => "is-success",
            NotificationSeverity::Info => "is-primary",
        }
    }

    pub fn heading(&self) -> &'static str {
        match self {
            NotificationSeverity::Error => "Error",
            NotificationSeverity::Success => "Success",
            NotificationSeverity::Info => "Information",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub text: String,
    pub severity: NotificationSeverity,
}

impl Notification {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            severity: NotificationSeverity::Info,
        }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            severity: NotificationSeverity::Success,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            severity: NotificationSeverity::Error,
        }
    }
}

/// Queue-of-one notification state. Each shown notification gets a fresh
/// generation; an expiry only takes effect if its generation is still the
/// one on display, so a superseded timeout can never clear a newer
/// notification.
#[derive(Debug, Default)]
pub struct NotificationSlot {
    current: Option<Notification>,
    generation: u64,
}

impl NotificationSlot {
    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }

    /// Installs a notification, superseding any current one, and returns the
    /// generation guarding its expiry.
    pub fn show(&mut self, notification: Notification) -> u64 {
        self.current = Some(notification);
        self.generation += 1;
        self.generation
    }

    /// Expires the notification belonging to `generation`. Returns false if
    /// that notification was already superseded or dismissed.
    pub fn expire(&mut self, generation: u64) -> bool {
        match generation == self.generation && self.current.is_some() {
            true => {
                self.current = None;
                true
            }
            false => false,
        }
    }

    pub fn dismiss(&mut self) {
        self.current = None;
    }
}

#[derive(Debug)]
pub enum Request {
    Notify(Notification),
    NotifyError(JsError),
    Dismiss,
}

#[derive(Debug, Clone)]
pub enum Response {
    Notification(Option<Notification>),
}

pub enum Message {
    Expire(u64),
}

/// Single-slot notification channel: a new notification supersedes the
/// current one and restarts the auto-clear timeout. Bursts never stack.
pub struct Notifier {
    link: AgentLink<Self>,
    subscribers: HashSet<HandlerId>,
    slot: NotificationSlot,
    timeout_handle: Option<i32>,
    _closure_expire: Option<Closure<dyn Fn(web_sys::Event)>>,
}

impl Notifier {
    fn show(&mut self, notification: Notification) {
        match notification.severity {
            NotificationSeverity::Error => log::error!("{}", notification.text),
            _ => log::info!("{}", notification.text),
        }

        let generation = self.slot.show(notification);

        if let Err(e) = self.schedule_expiry(generation) {
            log::error!("error scheduling notification expiry: {}", e);
        }

        self.notify_subscribed();
    }

    fn schedule_expiry(&mut self, generation: u64) -> Result<(), JsError> {
        let window = web_sys::window().ok_or("error getting window")?;

        if let Some(handle) = self.timeout_handle.take() {
            window.clear_timeout_with_handle(handle);
        }

        let callback = self.link.callback(Message::Expire);
        let closure = Closure::wrap(
            Box::new(move |_: web_sys::Event| callback.emit(generation)) as Box<dyn Fn(_)>,
        );

        self.timeout_handle = Some(window.set_timeout_with_callback_and_timeout_and_arguments(
            closure.as_ref().unchecked_ref(),
            DISMISS_DELAY_MS,
            &js_sys::Array::new(),
        )?);
        self._closure_expire = Some(closure);

        Ok(())
    }

    fn clear_timeout(&mut self) {
        if let Some(handle) = self.timeout_handle.take() {
            if let Some(window) = web_sys::window() {
                window.clear_timeout_with_handle(handle);
            }
        }
    }

    fn notify_subscribed(&self) {
        for subscriber in &self.subscribers {
            if subscriber.is_respondable() {
                self.link.respond(
                    *subscriber,
                    Response::Notification(self.slot.current().cloned()),
                );
            }
        }
    }
}

impl Agent for Notifier {
    type Reach = Context<Self>;
    type Message = Message;
    type Input = Request;
    type Output = Response;

    fn create(link: AgentLink<Self>) -> Self {
        Self {
            link,
            subscribers: HashSet::new(),
            slot: NotificationSlot::default(),
            timeout_handle: None,
            _closure_expire: None,
        }
    }

    fn update(&mut self, msg: Self::Message) {
        match msg {
            Message::Expire(generation) => {
                if self.slot.expire(generation) {
                    self.notify_subscribed();
                }
            }
        }
    }

    fn handle_input(&mut self, msg: Self::Input, _id: HandlerId) {
        match msg {
            Request::Notify(notification) => self.show(notification),
            Request::NotifyError(err) => self.show(Notification::error(err.description)),
            Request::Dismiss => {
                self.slot.dismiss();
                self.clear_timeout();
                self.notify_subscribed();
            }
        }
    }

    fn connected(&mut self, id: HandlerId) {
        self.subscribers.insert(id);
        self.notify_subscribed();
    }

    fn disconnected(&mut self, id: HandlerId) {
        self.subscribers.remove(&id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newer_notification_supersedes_the_current_one() {
        let mut slot = NotificationSlot::default();

        slot.show(Notification::info("saving"));
        slot.show(Notification::success("Feed added"));

        assert_eq!(
            slot.current().map(|n| n.text.as_str()),
            Some("Feed added")
        );
    }

    #[test]
    fn stale_expiry_is_ignored() {
        let mut slot = NotificationSlot::default();

        let first = slot.show(Notification::info("first"));
        let second = slot.show(Notification::error("second"));

        assert!(!slot.expire(first));
        assert_eq!(slot.current().map(|n| n.text.as_str()), Some("second"));

        assert!(slot.expire(second));
        assert_eq!(slot.current(), None);
    }

    #[test]
    fn expiry_after_dismissal_is_a_no_op() {
        let mut slot = NotificationSlot::default();

        let generation = slot.show(Notification::info("dismiss me"));
        slot.dismiss();

        assert!(!slot.expire(generation));
        assert_eq!(slot.current(), None);
    }

    #[test]
    fn each_shown_notification_gets_a_fresh_generation() {
        let mut slot = NotificationSlot::default();

        let first = slot.show(Notification::info("a"));
        let second = slot.show(Notification::info("b"));

        assert!(second > first);
    }
}
