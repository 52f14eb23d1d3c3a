use crate::pages::{console_page::ConsolePage, settings_page::SettingsPage};
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Routable, Clone, PartialEq)]
pub enum AppRoute {
    #[at("/settings")]
    Settings,
    #[at("/")]
    Console,
}

fn switch(route: &AppRoute) -> Html {
    match route {
        AppRoute::Console => html! {<ConsolePage/>},
        AppRoute::Settings => html! {<SettingsPage/>},
    }
}

pub struct Router {}
pub enum Message {}

impl Component for Router {
    type Message = Message;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {}
    }

    fn update(&mut self, _ctx: &Context<Self>, _msg: Self::Message) -> bool {
        false
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <Switch<AppRoute> render={Switch::render(switch)} />
        }
    }
}
