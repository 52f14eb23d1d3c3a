use crate::agents::notifier::{self, Notifier};
use yew::prelude::*;
use yew_agent::{Bridge, Bridged};

/// Renders whatever the notifier currently holds, as a Bulma message with
/// the severity's own color and heading. An empty slot renders nothing.
pub struct Notification {
    notifier: Box<dyn Bridge<Notifier>>,
    current: Option<notifier::Notification>,
}

pub enum Message {
    NotifierResponse(notifier::Response),
    Close,
}

impl Component for Notification {
    type Message = Message;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            notifier: Notifier::bridge(ctx.link().callback(Message::NotifierResponse)),
            current: None,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Message::NotifierResponse(notifier::Response::Notification(notification)) => {
                self.current = notification;
                true
            }
            Message::Close => {
                self.notifier.send(notifier::Request::Dismiss);
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let notification = match &self.current {
            Some(notification) => notification,
            None => return html! {},
        };

        html! {
            <article class={classes!("message", notification.severity.color_class())}>
                <div class="message-header">
                    <p>{notification.severity.heading()}</p>
                    <button class="delete" aria-label="delete" onclick={ctx.link().callback(|_| Message::Close)}></button>
                </div>
                <div class="message-body">
                    {notification.text.clone()}
                </div>
            </article>
        }
    }
}
