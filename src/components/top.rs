use super::{nav_bar::NavBar, notification::Notification, router::Router};
use yew::prelude::*;
use yew_router::BrowserRouter;

pub struct Top {}
pub enum Message {}

impl Component for Top {
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
            <BrowserRouter>
                <NavBar/>
                <Router/>
                <Notification/>
            </BrowserRouter>
        }
    }
}
