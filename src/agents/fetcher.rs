use super::notifier;
use crate::objects::{CheckReport, FeedDraft, FeedRecord, JsError, LogEntry};
use serde::{de::DeserializeOwned, Serialize};
use uuid::Uuid;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use yew_agent::{Agent, AgentLink, Context, Dispatched, Dispatcher, HandlerId};

/// Body of a send-item call: the detected item plus the locally configured
/// download directory.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SendItemBody {
    pub item_id: String,
    pub download_dir: String,
}

/// Feed reads carry the registry's sequence number; commands carry a
/// correlation id picked by the caller.
#[derive(Debug)]
pub enum Request {
    ListFeeds(u64),
    CreateFeed(Uuid, FeedDraft),
    UpdateFeed(Uuid, String, FeedDraft),
    DeleteFeed(Uuid, String),
    CheckFeed(Uuid, String),
    FetchLogs(Uuid, String),
    SendItem(Uuid, String, SendItemBody),
}

#[derive(Debug)]
pub enum Response {
    Feeds(u64, Result<Vec<FeedRecord>, JsError>),
    FeedSaved(Uuid, Result<(), JsError>),
    FeedDeleted(Uuid, Result<(), JsError>),
    CheckCompleted(Uuid, Result<CheckReport, JsError>),
    Logs(Uuid, Result<Vec<LogEntry>, JsError>),
    ItemSent(Uuid, Result<(), JsError>),
}

pub enum Message {
    Completed(HandlerId, Response),
}

/// One request/response cycle per input; every response goes back to the
/// requester only. No retries, no timeouts.
pub struct Fetcher {
    link: AgentLink<Self>,
    notifier: Dispatcher<notifier::Notifier>,
}

enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }
}

impl Fetcher {
    fn process_handle_input(&mut self, msg: Request, id: HandlerId) -> Result<(), JsError> {
        match msg {
            Request::ListFeeds(seq) => {
                self.link.send_future(async move {
                    Message::Completed(
                        id,
                        Response::Feeds(
                            seq,
                            fetch_deserializable("/api/feeds", HttpMethod::Get, None).await,
                        ),
                    )
                });
            }
            Request::CreateFeed(cid, draft) => {
                // the create contract takes the writable fields minus the
                // enabled flag; the server enables new feeds itself
                let body = serde_json::json!({
                    "name": draft.name,
                    "url": draft.url,
                    "interval": draft.interval,
                })
                .to_string();

                self.link.send_future(async move {
                    Message::Completed(
                        id,
                        Response::FeedSaved(
                            cid,
                            fetch_unit("/api/feeds", HttpMethod::Post, Some(body)).await,
                        ),
                    )
                });
            }
            Request::UpdateFeed(cid, feed_id, draft) => {
                let url = format!("/api/feeds/{}", feed_id);
                let body = serde_json::to_string(&draft)?;

                self.link.send_future(async move {
                    Message::Completed(
                        id,
                        Response::FeedSaved(cid, fetch_unit(&url, HttpMethod::Put, Some(body)).await),
                    )
                });
            }
            Request::DeleteFeed(cid, feed_id) => {
                let url = format!("/api/feeds/{}", feed_id);

                self.link.send_future(async move {
                    Message::Completed(
                        id,
                        Response::FeedDeleted(cid, fetch_unit(&url, HttpMethod::Delete, None).await),
                    )
                });
            }
            Request::CheckFeed(cid, feed_id) => {
                let url = format!("/api/feeds/{}/check", feed_id);

                self.link.send_future(async move {
                    Message::Completed(
                        id,
                        Response::CheckCompleted(
                            cid,
                            fetch_deserializable(&url, HttpMethod::Post, None).await,
                        ),
                    )
                });
            }
            Request::FetchLogs(cid, feed_id) => {
                let url = format!("/api/feeds/{}/logs", feed_id);

                self.link.send_future(async move {
                    Message::Completed(
                        id,
                        Response::Logs(cid, fetch_deserializable(&url, HttpMethod::Get, None).await),
                    )
                });
            }
            Request::SendItem(cid, feed_id, body) => {
                let url = format!("/api/feeds/{}/send", feed_id);
                let body = serde_json::to_string(&body)?;

                self.link.send_future(async move {
                    Message::Completed(
                        id,
                        Response::ItemSent(cid, fetch_unit(&url, HttpMethod::Post, Some(body)).await),
                    )
                });
            }
        }

        Ok(())
    }
}

impl Agent for Fetcher {
    type Reach = Context<Self>;
    type Message = Message;
    type Input = Request;
    type Output = Response;

    fn create(link: AgentLink<Self>) -> Self {
        Self {
            link,
            notifier: notifier::Notifier::dispatcher(),
        }
    }

    fn update(&mut self, msg: Self::Message) {
        match msg {
            Message::Completed(id, response) => self.link.respond(id, response),
        }
    }

    fn handle_input(&mut self, msg: Self::Input, id: HandlerId) {
        match self.process_handle_input(msg, id) {
            Ok(_) => {}
            Err(e) => self.notifier.send(notifier::Request::NotifyError(e)),
        }
    }
}

async fn fetch(
    url: &str,
    method: HttpMethod,
    body: Option<String>,
) -> Result<web_sys::Response, JsError> {
    let mut opts = web_sys::RequestInit::new();

    opts.method(method.as_str());

    if let Some(body) = body {
        let headers = web_sys::Headers::new()?;
        headers.append("content-type", "application/json")?;
        opts.headers(&headers);
        opts.body(Some(&serde_wasm_bindgen::to_value(&body)?));
    }

    let request = web_sys::Request::new_with_str_and_init(url, &opts)?;
    let window = web_sys::window().ok_or("error getting window")?;
    let resp: web_sys::Response = JsFuture::from(window.fetch_with_request(&request))
        .await?
        .dyn_into()?;

    match resp.ok() {
        true => Ok(resp),
        false => {
            // surface the body verbatim as the failure reason; fall back to
            // the status line when the body is empty
            let reason = JsFuture::from(resp.text()?)
                .await?
                .as_string()
                .unwrap_or_default();

            Err(match reason.is_empty() {
                true => format!("{}: {}", resp.status(), resp.status_text()).into(),
                false => reason.into(),
            })
        }
    }
}

async fn fetch_unit(url: &str, method: HttpMethod, body: Option<String>) -> Result<(), JsError> {
    fetch(url, method, body).await.map(|_| ())
}

async fn fetch_deserializable<T: DeserializeOwned>(
    url: &str,
    method: HttpMethod,
    body: Option<String>,
) -> Result<T, JsError> {
    JsFuture::from(fetch(url, method, body).await?.json()?)
        .await
        .map(|val| serde_wasm_bindgen::from_value(val).map_err(Into::into))?
}
