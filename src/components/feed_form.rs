use crate::objects::{FeedDraft, FeedRecord};
use web_sys::HtmlInputElement;
use yew::prelude::*;

/// Modal create/edit form. The draft lives here and only here: it is seeded
/// from the record when editing, survives a failed save because the parent
/// keeps the modal mounted, and vanishes when the modal closes.
pub struct FeedForm {
    draft: FeedDraft,
}

pub enum Message {
    SetName(String),
    SetUrl(String),
    SetInterval(String),
    SetEnabled(bool),
    Submit,
    Cancel,
}

#[derive(Properties, Clone, PartialEq)]
pub struct Props {
    pub editing: Option<FeedRecord>,
    pub on_submit: Callback<FeedDraft>,
    pub on_cancel: Callback<()>,
}

impl FeedForm {
    fn valid(&self) -> bool {
        !self.draft.name.is_empty() && !self.draft.url.is_empty() && self.draft.interval >= 1
    }
}

impl Component for FeedForm {
    type Message = Message;
    type Properties = Props;

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            draft: match &ctx.props().editing {
                Some(record) => FeedDraft::from(record),
                None => FeedDraft::default(),
            },
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Message::SetName(name) => {
                self.draft.name = name;
                true
            }
            Message::SetUrl(url) => {
                self.draft.url = url;
                true
            }
            Message::SetInterval(raw) => {
                if let Ok(interval) = raw.parse::<u32>() {
                    self.draft.interval = interval.max(1);
                }
                true
            }
            Message::SetEnabled(enabled) => {
                self.draft.enabled = enabled;
                true
            }
            Message::Submit => {
                if self.valid() {
                    ctx.props().on_submit.emit(self.draft.clone());
                }
                false
            }
            Message::Cancel => {
                ctx.props().on_cancel.emit(());
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let title = match ctx.props().editing {
            Some(_) => "Edit Feed",
            None => "Add Feed",
        };

        html! {
            <div class="modal is-active">
                <div class="modal-background" onclick={ctx.link().callback(|_| Message::Cancel)}></div>
                <div class="modal-card">
                    <header class="modal-card-head">
                        <p class="modal-card-title">{title}</p>
                        <button class="delete" aria-label="close" onclick={ctx.link().callback(|_| Message::Cancel)}></button>
                    </header>
                    <section class="modal-card-body">
                        <div class="field">
                            <label class="label">{"Name"}</label>
                            <input class="input" type="text" value={self.draft.name.clone()}
                                oninput={ctx.link().callback(|e: InputEvent| {
                                    let input: HtmlInputElement = e.target_unchecked_into();
                                    Message::SetName(input.value())
                                })}/>
                        </div>
                        <div class="field">
                            <label class="label">{"RSS URL"}</label>
                            <input class="input" type="text" value={self.draft.url.clone()}
                                oninput={ctx.link().callback(|e: InputEvent| {
                                    let input: HtmlInputElement = e.target_unchecked_into();
                                    Message::SetUrl(input.value())
                                })}/>
                        </div>
                        <div class="field">
                            <label class="label">{"Interval (minutes)"}</label>
                            <input class="input" type="number" min="1" value={self.draft.interval.to_string()}
                                oninput={ctx.link().callback(|e: InputEvent| {
                                    let input: HtmlInputElement = e.target_unchecked_into();
                                    Message::SetInterval(input.value())
                                })}/>
                        </div>
                        <div class="field">
                            <label class="checkbox">
                                <input type="checkbox" checked={self.draft.enabled}
                                    onchange={ctx.link().callback(|e: Event| {
                                        let input: HtmlInputElement = e.target_unchecked_into();
                                        Message::SetEnabled(input.checked())
                                    })}/>
                                {" Enabled"}
                            </label>
                        </div>
                    </section>
                    <footer class="modal-card-foot">
                        <button class="button is-primary" disabled={!self.valid()} onclick={ctx.link().callback(|_| Message::Submit)}>{"Save"}</button>
                        <button class="button" onclick={ctx.link().callback(|_| Message::Cancel)}>{"Cancel"}</button>
                    </footer>
                </div>
            </div>
        }
    }
}
