use crate::models::app_state::AppState;
use crate::routes::{Route, switch_with_logout};
use crate::session::{BrowserSession, SessionProvider};
use yew::{Callback, Html, function_component, html, use_effect_with};
use yew_router::prelude::*;
use yewdux::prelude::use_store;

#[function_component(App)]
pub fn app() -> Html {
    let (_state, dispatch) = use_store::<AppState>();

    {
        // Pick up whatever session the last visit left in storage.
        let dispatch = dispatch.clone();
        use_effect_with((), move |_| {
            dispatch.set(AppState {
                session: BrowserSession.current(),
            });
            || ()
        });
    }

    let on_logout = {
        let dispatch = dispatch;
        Callback::from(move |()| {
            BrowserSession.clear();
            dispatch.set(AppState::default());
        })
    };

    html! {
        <BrowserRouter>
            <Switch<Route> render={move |route| switch_with_logout(route, on_logout.clone())} />
        </BrowserRouter>
    }
}
