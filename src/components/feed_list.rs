use crate::objects::FeedRecord;
use yew::prelude::*;

pub struct FeedList {}
pub enum Message {}

#[derive(Properties, Clone, PartialEq)]
pub struct Props {
    pub feeds: Vec<FeedRecord>,
    pub loading: bool,
    pub on_edit: Callback<FeedRecord>,
    pub on_check: Callback<String>,
    pub on_logs: Callback<String>,
    pub on_delete: Callback<String>,
}

impl FeedList {
    fn view_feed(&self, ctx: &Context<Self>, feed: &FeedRecord) -> Html {
        let record = feed.clone();
        let check_id = feed.id.clone();
        let logs_id = feed.id.clone();
        let delete_id = feed.id.clone();

        let enabled_tag = match feed.enabled {
            true => html! {<span class="tag is-success">{"ENABLED"}</span>},
            false => html! {<span class="tag is-danger">{"DISABLED"}</span>},
        };

        html! {
            <div class="card">
                <header class="card-header">
                    <p class="card-header-title">{enabled_tag}{" "}{&feed.name}</p>
                </header>
                <div class="card-content">
                    <p class="subtitle is-6">{&feed.url}</p>
                    <p class="is-size-7">
                        {format!("Interval: {} min · Last check: {} · Status: {}",
                            feed.interval,
                            feed.last_checked.as_deref().unwrap_or("—"),
                            feed.last_status.as_deref().unwrap_or("—"))}
                    </p>
                </div>
                <footer class="card-footer">
                    <a class="card-footer-item" onclick={ctx.props().on_edit.reform(move |_| record.clone())}>{"Edit"}</a>
                    <a class="card-footer-item" onclick={ctx.props().on_check.reform(move |_| check_id.clone())}>{"Check"}</a>
                    <a class="card-footer-item" onclick={ctx.props().on_logs.reform(move |_| logs_id.clone())}>{"Logs"}</a>
                    <a class="card-footer-item has-text-danger" onclick={ctx.props().on_delete.reform(move |_| delete_id.clone())}>{"Delete"}</a>
                </footer>
            </div>
        }
    }

    fn view_fetching(&self, ctx: &Context<Self>) -> Html {
        match ctx.props().loading {
            true => html! { <progress class="progress is-small is-primary" max="100"></progress> },
            false => html! {},
        }
    }
}

impl Component for FeedList {
    type Message = Message;
    type Properties = Props;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {}
    }

    fn update(&mut self, _ctx: &Context<Self>, _msg: Self::Message) -> bool {
        false
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let feeds = &ctx.props().feeds;

        html! {
            <section class="section">
                { self.view_fetching(ctx) }
                {match feeds.is_empty() {
                    true => html! { <p class="has-text-grey">{"No feeds added yet."}</p> },
                    false => html! {
                        <div class="columns is-multiline"><div class="column">
                            { feeds.iter().map(|feed| self.view_feed(ctx, feed)).collect::<Html>() }
                        </div></div>
                    },
                }}
            </section>
        }
    }
}
