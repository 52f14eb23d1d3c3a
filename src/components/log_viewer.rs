use crate::objects::LogEntry;
use yew::prelude::*;

pub struct LogViewer {}
pub enum Message {}

#[derive(Properties, Clone, PartialEq)]
pub struct Props {
    pub feed_id: String,
    /// None while the fetch is in flight; entries in server order otherwise.
    pub entries: Option<Vec<LogEntry>>,
    pub on_close: Callback<()>,
}

impl LogViewer {
    fn view_entries(&self, entries: &[LogEntry]) -> Html {
        match entries.is_empty() {
            true => html! { <p class="has-text-grey">{"No logs"}</p> },
            false => entries
                .iter()
                .map(|entry| {
                    html! {
                        <div class="py-1">
                            <p class="is-size-7 has-text-grey">{&entry.ts}</p>
                            <p class="is-family-monospace">{format!("[{}] {}", entry.level, entry.msg)}</p>
                        </div>
                    }
                })
                .collect::<Html>(),
        }
    }
}

impl Component for LogViewer {
    type Message = Message;
    type Properties = Props;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {}
    }

    fn update(&mut self, _ctx: &Context<Self>, _msg: Self::Message) -> bool {
        false
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let on_close = ctx.props().on_close.clone();

        html! {
            <div class="modal is-active">
                <div class="modal-background" onclick={on_close.reform(|_| ())}></div>
                <div class="modal-card">
                    <header class="modal-card-head">
                        <p class="modal-card-title">{format!("Logs for feed {}", ctx.props().feed_id)}</p>
                        <button class="delete" aria-label="close" onclick={ctx.props().on_close.reform(|_| ())}></button>
                    </header>
                    <section class="modal-card-body">
                        {match &ctx.props().entries {
                            Some(entries) => self.view_entries(entries),
                            None => html! { <progress class="progress is-small" max="100"></progress> },
                        }}
                    </section>
                </div>
            </div>
        }
    }
}
