use crate::agents::notifier::{self, Notification, Notifier};
use crate::objects::DownloaderSettings;
use crate::storage::{self, LocalStore};
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_agent::{Dispatched, Dispatcher};

/// Transmission connection settings. Loaded from local storage once at page
/// creation, edited in memory, and persisted only on an explicit save.
pub struct SettingsPage {
    notifier: Dispatcher<Notifier>,
    settings: DownloaderSettings,
}

pub enum Message {
    SetRpcUrl(String),
    SetDownloadDir(String),
    Save,
    Clear,
}

impl Component for SettingsPage {
    type Message = Message;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            notifier: Notifier::dispatcher(),
            settings: storage::load_settings(&LocalStore),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Message::SetRpcUrl(rpc_url) => {
                self.settings.rpc_url = rpc_url;
                true
            }
            Message::SetDownloadDir(download_dir) => {
                self.settings.download_dir = download_dir;
                true
            }
            Message::Save => {
                match storage::save_settings(&mut LocalStore, &self.settings) {
                    Ok(()) => self.notifier.send(notifier::Request::Notify(
                        Notification::success("Saved Transmission settings"),
                    )),
                    Err(e) => self.notifier.send(notifier::Request::NotifyError(e)),
                }
                false
            }
            Message::Clear => {
                match storage::clear_settings(&mut LocalStore) {
                    Ok(defaults) => {
                        self.settings = defaults;
                        self.notifier
                            .send(notifier::Request::Notify(Notification::info("Cleared")));
                    }
                    Err(e) => self.notifier.send(notifier::Request::NotifyError(e)),
                }
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <section class="section">
                <div class="box">
                    <h2 class="subtitle">{"Transmission Settings"}</h2>
                    <div class="field">
                        <label class="label">{"RPC URL"}</label>
                        <input class="input" type="text" value={self.settings.rpc_url.clone()}
                            placeholder="http://192.168.2.104:9091/transmission/rpc"
                            oninput={ctx.link().callback(|e: InputEvent| {
                                let input: HtmlInputElement = e.target_unchecked_into();
                                Message::SetRpcUrl(input.value())
                            })}/>
                    </div>
                    <div class="field">
                        <label class="label">{"Download directory"}</label>
                        <input class="input" type="text" value={self.settings.download_dir.clone()}
                            oninput={ctx.link().callback(|e: InputEvent| {
                                let input: HtmlInputElement = e.target_unchecked_into();
                                Message::SetDownloadDir(input.value())
                            })}/>
                    </div>
                    <div class="field is-grouped">
                        <button class="button is-link" onclick={ctx.link().callback(|_| Message::Save)}>{"Save"}</button>
                        <button class="button" onclick={ctx.link().callback(|_| Message::Clear)}>{"Clear"}</button>
                    </div>
                    <p class="is-size-7 has-text-grey">
                        {"Settings are stored locally in this browser and only leave it as part of a send-to-Transmission request."}
                    </p>
                </div>
            </section>
        }
    }
}
