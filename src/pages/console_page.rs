use crate::agents::registry::{self, Registry};
use crate::components::{feed_form::FeedForm, feed_list::FeedList, log_viewer::LogViewer};
use crate::objects::{FeedDraft, FeedItem, FeedRecord, JsError, LogEntry};
use crate::storage::{self, LocalStore};
use crate::utils;
use wasm_bindgen::{closure::Closure, JsCast};
use yew::prelude::*;
use yew_agent::{Bridge, Bridged};

const POLL_INTERVAL_MS: i32 = 15_000;

/// Runs the confirmation gate for a delete. Only an explicit yes produces a
/// request; a declined or failed prompt produces nothing.
fn delete_request(confirm: utils::ConfirmFn, feed_id: String) -> Option<registry::Request> {
    match confirm("Delete this feed?") {
        Ok(true) => Some(registry::Request::Delete(feed_id)),
        Ok(false) => None,
        Err(e) => {
            log::error!("error showing confirmation: {}", e);
            None
        }
    }
}

/// The feed console: renders the registry snapshot, owns the modal state,
/// and runs the polling loop for as long as it is mounted.
pub struct ConsolePage {
    registry: Box<dyn Bridge<Registry>>,
    feeds: Vec<FeedRecord>,
    loading: bool,
    show_form: bool,
    editing: Option<FeedRecord>,
    logs: Option<(String, Option<Vec<LogEntry>>)>,
    new_items: Option<(String, Vec<FeedItem>)>,
    interval_handle: Option<i32>,
    _closure_interval: Closure<dyn Fn(web_sys::Event)>,
}

#[derive(Properties, Clone, PartialEq)]
pub struct Props {
    /// Confirmation gate for deletes; the default asks via the browser
    /// dialog, tests substitute a canned answer.
    #[prop_or(utils::confirm as utils::ConfirmFn)]
    pub confirm: utils::ConfirmFn,
}

pub enum Message {
    RegistryMessage(registry::Response),
    Interval(web_sys::Event),
    Refresh,
    OpenNew,
    OpenEdit(FeedRecord),
    SubmitForm(FeedDraft),
    CancelForm,
    Delete(String),
    Check(String),
    OpenLogs(String),
    CloseLogs,
    Send(String, String),
}

impl ConsolePage {
    fn view_header(&self, ctx: &Context<Self>) -> Html {
        html! {
            <section class="section">
                <div class="level">
                    <div class="level-left">
                        <h1 class="title">{"Feeds"}</h1>
                    </div>
                    <div class="level-right">
                        <p class="level-item is-size-7 has-text-grey">{"Auto-refresh every 15s"}</p>
                        <button class="button is-link level-item" onclick={ctx.link().callback(|_| Message::OpenNew)}>{"Add Feed"}</button>
                        <button class="button level-item" onclick={ctx.link().callback(|_| Message::Refresh)}>{"Refresh"}</button>
                    </div>
                </div>
            </section>
        }
    }

    fn view_new_items(&self, ctx: &Context<Self>) -> Html {
        let (feed_id, items) = match &self.new_items {
            Some(batch) => batch,
            None => return html! {},
        };

        if items.is_empty() {
            return html! {};
        }

        html! {
            <section class="section">
                <div class="box">
                    <h2 class="subtitle">{"New items"}</h2>
                    { items.iter().map(|item| {
                        let feed_id = feed_id.clone();
                        let item_id = item.id.clone();
                        html! {
                            <div class="level">
                                <div class="level-left">
                                    <p class="level-item">{item.title.as_deref().unwrap_or(&item.id)}</p>
                                </div>
                                <div class="level-right">
                                    <button class="button is-small is-link level-item"
                                        onclick={ctx.link().callback(move |_| Message::Send(feed_id.clone(), item_id.clone()))}>
                                        {"Send to Transmission"}
                                    </button>
                                </div>
                            </div>
                        }
                    }).collect::<Html>() }
                </div>
            </section>
        }
    }

    fn view_form(&self, ctx: &Context<Self>) -> Html {
        match self.show_form {
            true => html! {
                <FeedForm editing={self.editing.clone()}
                    on_submit={ctx.link().callback(Message::SubmitForm)}
                    on_cancel={ctx.link().callback(|_| Message::CancelForm)}/>
            },
            false => html! {},
        }
    }

    fn view_logs(&self, ctx: &Context<Self>) -> Html {
        match &self.logs {
            Some((feed_id, entries)) => html! {
                <LogViewer feed_id={feed_id.clone()} entries={entries.clone()}
                    on_close={ctx.link().callback(|_| Message::CloseLogs)}/>
            },
            None => html! {},
        }
    }
}

impl Component for ConsolePage {
    type Message = Message;
    type Properties = Props;

    fn create(ctx: &Context<Self>) -> Self {
        let mut registry = Registry::bridge(ctx.link().callback(Message::RegistryMessage));

        registry.send(registry::Request::Refresh);

        let callback_interval = ctx.link().callback(Message::Interval);
        let closure_interval = Closure::wrap(Box::new(move |event: web_sys::Event| {
            callback_interval.emit(event)
        }) as Box<dyn Fn(_)>);
        let interval_handle = web_sys::window().and_then(|window| {
            match window.set_interval_with_callback_and_timeout_and_arguments(
                closure_interval.as_ref().unchecked_ref(),
                POLL_INTERVAL_MS,
                &js_sys::Array::new(),
            ) {
                Ok(handle) => Some(handle),
                Err(e) => {
                    log::error!("error starting polling loop: {}", JsError::from(e));
                    None
                }
            }
        });

        Self {
            registry,
            feeds: Vec::new(),
            loading: false,
            show_form: false,
            editing: None,
            logs: None,
            new_items: None,
            interval_handle,
            _closure_interval: closure_interval,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Message::RegistryMessage(response) => match response {
                registry::Response::Feeds(feeds) => {
                    self.feeds = feeds;
                    true
                }
                registry::Response::Loading(loading) => {
                    self.loading = loading;
                    true
                }
                registry::Response::FeedSaved => {
                    self.show_form = false;
                    self.editing = None;
                    true
                }
                registry::Response::NewItems(feed_id, items) => {
                    self.new_items = Some((feed_id, items));
                    true
                }
                registry::Response::Logs(feed_id, entries) => match &mut self.logs {
                    Some((open_id, slot)) if *open_id == feed_id => {
                        *slot = Some(entries);
                        true
                    }
                    _ => false,
                },
            },
            Message::Interval(_ev) => {
                self.registry.send(registry::Request::Refresh);
                false
            }
            Message::Refresh => {
                self.registry.send(registry::Request::Refresh);
                false
            }
            Message::OpenNew => {
                self.editing = None;
                self.show_form = true;
                true
            }
            Message::OpenEdit(record) => {
                self.editing = Some(record);
                self.show_form = true;
                true
            }
            Message::SubmitForm(draft) => {
                match &self.editing {
                    Some(record) => self
                        .registry
                        .send(registry::Request::Update(record.id.clone(), draft)),
                    None => self.registry.send(registry::Request::Create(draft)),
                }
                false
            }
            Message::CancelForm => {
                self.show_form = false;
                self.editing = None;
                true
            }
            Message::Delete(feed_id) => {
                if let Some(request) = delete_request(ctx.props().confirm, feed_id) {
                    self.registry.send(request);
                }
                false
            }
            Message::Check(feed_id) => {
                self.registry.send(registry::Request::Check(feed_id));
                false
            }
            Message::OpenLogs(feed_id) => {
                self.logs = Some((feed_id.clone(), None));
                self.registry.send(registry::Request::FetchLogs(feed_id));
                true
            }
            Message::CloseLogs => {
                self.logs = None;
                true
            }
            Message::Send(feed_id, item_id) => {
                let settings = storage::load_settings(&LocalStore);

                self.registry.send(registry::Request::SendItem {
                    feed_id,
                    item_id,
                    download_dir: settings.download_dir,
                });
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <>
                { self.view_header(ctx) }
                <FeedList feeds={self.feeds.clone()} loading={self.loading}
                    on_edit={ctx.link().callback(Message::OpenEdit)}
                    on_check={ctx.link().callback(Message::Check)}
                    on_logs={ctx.link().callback(Message::OpenLogs)}
                    on_delete={ctx.link().callback(Message::Delete)}/>
                { self.view_new_items(ctx) }
                { self.view_form(ctx) }
                { self.view_logs(ctx) }
            </>
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        if let Some(handle) = self.interval_handle.take() {
            if let Some(window) = web_sys::window() {
                window.clear_interval_with_handle(handle);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn accept(_message: &str) -> Result<bool, JsError> {
        Ok(true)
    }

    fn decline(_message: &str) -> Result<bool, JsError> {
        Ok(false)
    }

    fn broken(_message: &str) -> Result<bool, JsError> {
        Err(JsError::from("prompt unavailable"))
    }

    #[test]
    fn declined_confirmation_issues_no_request() {
        assert!(delete_request(decline, "f1".into()).is_none());
    }

    #[test]
    fn accepted_confirmation_targets_the_feed() {
        match delete_request(accept, "f2".into()) {
            Some(registry::Request::Delete(feed_id)) => assert_eq!(feed_id, "f2"),
            other => panic!("unexpected request: {:?}", other),
        }
    }

    #[test]
    fn failed_prompt_is_treated_as_declined() {
        assert!(delete_request(broken, "f3".into()).is_none());
    }
}
