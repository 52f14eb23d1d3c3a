use super::{fetcher, notifier};
use crate::objects::{FeedDraft, FeedItem, FeedRecord, LogEntry};
use crate::state::FeedRegistry;
use std::collections::{HashMap, HashSet};
use uuid::Uuid;
use yew_agent::{Agent, AgentLink, Bridge, Bridged, Context, Dispatched, Dispatcher, HandlerId};

#[derive(Debug)]
pub enum Request {
    /// Re-reads the feed collection from the server. Shared by the polling
    /// loop, the refresh button, and every successful command.
    Refresh,
    Create(FeedDraft),
    Update(String, FeedDraft),
    /// Confirmation has already happened at the call site.
    Delete(String),
    Check(String),
    FetchLogs(String),
    SendItem {
        feed_id: String,
        item_id: String,
        download_dir: String,
    },
}

#[derive(Debug, Clone)]
pub enum Response {
    /// Broadcast whenever a new snapshot is applied, and once on connect.
    Feeds(Vec<FeedRecord>),
    Loading(bool),
    /// Requester only: the create/edit modal may close.
    FeedSaved,
    /// Broadcast: the latest batch of detected items for a feed.
    NewItems(String, Vec<FeedItem>),
    /// Requester only: log entries for the viewer, empty on failure.
    Logs(String, Vec<LogEntry>),
}

pub enum Message {
    FetcherMessage(fetcher::Response),
}

enum PendingCommand {
    Save { origin: HandlerId, editing: bool },
    Delete,
    Check(String),
    Logs { origin: HandlerId, feed_id: String },
    Send,
}

/// Owns the feed registry and runs every command as one fetch followed by a
/// conditional refresh. Failures never touch the registry; they only raise a
/// notification.
pub struct Registry {
    link: AgentLink<Self>,
    subscribers: HashSet<HandlerId>,
    fetcher: Box<dyn Bridge<fetcher::Fetcher>>,
    notifier: Dispatcher<notifier::Notifier>,
    registry: FeedRegistry,
    pending: HashMap<Uuid, PendingCommand>,
}

impl Registry {
    fn start_refresh(&mut self) {
        let seq = self.registry.begin_read();

        self.fetcher.send(fetcher::Request::ListFeeds(seq));
        self.broadcast(Response::Loading(self.registry.is_loading()));
    }

    fn dispatch(&mut self, command: PendingCommand, request: impl FnOnce(Uuid) -> fetcher::Request) {
        let cid = Uuid::new_v4();

        self.pending.insert(cid, command);
        self.fetcher.send(request(cid));
    }

    fn broadcast(&self, response: Response) {
        for subscriber in &self.subscribers {
            if subscriber.is_respondable() {
                self.link.respond(*subscriber, response.clone());
            }
        }
    }

    fn notify(&mut self, notification: notifier::Notification) {
        self.notifier.send(notifier::Request::Notify(notification));
    }

    fn process_fetcher_message(&mut self, msg: fetcher::Response) {
        match msg {
            fetcher::Response::Feeds(seq, res) => {
                match res {
                    Ok(feeds) => {
                        if self.registry.complete_read(seq, feeds) {
                            self.broadcast(Response::Feeds(self.registry.feeds().to_vec()));
                        }
                    }
                    Err(e) => {
                        self.registry.fail_read(seq);
                        self.notify(notifier::Notification::error(format!(
                            "Failed to load feeds: {}",
                            e
                        )));
                    }
                }

                self.broadcast(Response::Loading(self.registry.is_loading()));
            }
            fetcher::Response::FeedSaved(cid, res) => {
                let (origin, editing) = match self.pending.remove(&cid) {
                    Some(PendingCommand::Save { origin, editing }) => (origin, editing),
                    _ => return,
                };

                match res {
                    Ok(()) => {
                        if origin.is_respondable() {
                            self.link.respond(origin, Response::FeedSaved);
                        }
                        self.notify(notifier::Notification::success(match editing {
                            true => "Feed updated",
                            false => "Feed added",
                        }));
                        self.start_refresh();
                    }
                    Err(e) => {
                        // the modal stays open with the draft intact
                        self.notify(notifier::Notification::error(format!("Save failed: {}", e)));
                    }
                }
            }
            fetcher::Response::FeedDeleted(cid, res) => {
                if self.pending.remove(&cid).is_none() {
                    return;
                }

                match res {
                    Ok(()) => {
                        self.notify(notifier::Notification::success("Deleted"));
                        self.start_refresh();
                    }
                    Err(e) => {
                        self.notify(notifier::Notification::error(format!(
                            "Delete failed: {}",
                            e
                        )));
                    }
                }
            }
            fetcher::Response::CheckCompleted(cid, res) => {
                let feed_id = match self.pending.remove(&cid) {
                    Some(PendingCommand::Check(feed_id)) => feed_id,
                    _ => return,
                };

                match res {
                    Ok(report) => {
                        self.notify(notifier::Notification::success(format!(
                            "Check done, new items: {}",
                            report.new_items.len()
                        )));
                        self.broadcast(Response::NewItems(feed_id, report.new_items));
                        self.start_refresh();
                    }
                    Err(e) => {
                        self.notify(notifier::Notification::error(format!("Check failed: {}", e)));
                    }
                }
            }
            fetcher::Response::Logs(cid, res) => {
                let (origin, feed_id) = match self.pending.remove(&cid) {
                    Some(PendingCommand::Logs { origin, feed_id }) => (origin, feed_id),
                    _ => return,
                };

                let entries = match res {
                    Ok(entries) => entries,
                    Err(e) => {
                        self.notify(notifier::Notification::error(format!(
                            "Load logs failed: {}",
                            e
                        )));
                        Vec::new()
                    }
                };

                if origin.is_respondable() {
                    self.link.respond(origin, Response::Logs(feed_id, entries));
                }
            }
            fetcher::Response::ItemSent(cid, res) => {
                if self.pending.remove(&cid).is_none() {
                    return;
                }

                match res {
                    Ok(()) => {
                        self.notify(notifier::Notification::success("Sent to Transmission"));
                        self.start_refresh();
                    }
                    Err(e) => {
                        self.notify(notifier::Notification::error(format!("Send failed: {}", e)));
                    }
                }
            }
        }
    }
}

impl Agent for Registry {
    type Reach = Context<Self>;
    type Message = Message;
    type Input = Request;
    type Output = Response;

    fn create(link: AgentLink<Self>) -> Self {
        let fetcher_cb = link.callback(Message::FetcherMessage);

        Self {
            link,
            subscribers: HashSet::new(),
            fetcher: fetcher::Fetcher::bridge(fetcher_cb),
            notifier: notifier::Notifier::dispatcher(),
            registry: FeedRegistry::new(),
            pending: HashMap::new(),
        }
    }

    fn update(&mut self, msg: Self::Message) {
        match msg {
            Message::FetcherMessage(response) => self.process_fetcher_message(response),
        }
    }

    fn handle_input(&mut self, msg: Self::Input, id: HandlerId) {
        match msg {
            Request::Refresh => self.start_refresh(),
            Request::Create(draft) => self.dispatch(
                PendingCommand::Save {
                    origin: id,
                    editing: false,
                },
                move |cid| fetcher::Request::CreateFeed(cid, draft),
            ),
            Request::Update(feed_id, draft) => self.dispatch(
                PendingCommand::Save {
                    origin: id,
                    editing: true,
                },
                move |cid| fetcher::Request::UpdateFeed(cid, feed_id, draft),
            ),
            Request::Delete(feed_id) => self.dispatch(PendingCommand::Delete, move |cid| {
                fetcher::Request::DeleteFeed(cid, feed_id)
            }),
            Request::Check(feed_id) => self.dispatch(
                PendingCommand::Check(feed_id.clone()),
                move |cid| fetcher::Request::CheckFeed(cid, feed_id),
            ),
            Request::FetchLogs(feed_id) => self.dispatch(
                PendingCommand::Logs {
                    origin: id,
                    feed_id: feed_id.clone(),
                },
                move |cid| fetcher::Request::FetchLogs(cid, feed_id),
            ),
            Request::SendItem {
                feed_id,
                item_id,
                download_dir,
            } => self.dispatch(PendingCommand::Send, move |cid| {
                fetcher::Request::SendItem(
                    cid,
                    feed_id,
                    fetcher::SendItemBody {
                        item_id,
                        download_dir,
                    },
                )
            }),
        }
    }

    fn connected(&mut self, id: HandlerId) {
        self.subscribers.insert(id);

        if id.is_respondable() {
            self.link
                .respond(id, Response::Feeds(self.registry.feeds().to_vec()));
            self.link
                .respond(id, Response::Loading(self.registry.is_loading()));
        }
    }

    fn disconnected(&mut self, id: HandlerId) {
        self.subscribers.remove(&id);
    }
}
