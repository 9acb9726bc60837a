use crate::{models::app_state::AppState, routes::Route};
use yew::prelude::*;
use yew_router::hooks::use_navigator;
use yewdux::prelude::use_selector;

#[derive(yew::Properties, PartialEq)]
pub struct UserDropdownProps {
    #[prop_or_default]
    pub on_logout: Option<Callback<()>>,
}

#[function_component(UserDropdown)]
pub fn user_dropdown(props: &UserDropdownProps) -> Html {
    let navigator = use_navigator().unwrap();
    let session = use_selector(|state: &AppState| state.session.clone());
    let Some(session) = (*session).clone() else {
        return html! {};
    };

    let logout_button = {
        let on_logout = props.on_logout.clone();
        let onclick = Callback::from(move |event: yew::MouseEvent| {
            event.prevent_default();
            if let Some(callback) = &on_logout {
                callback.emit(());
            }
            navigator.push(&Route::Login);
        });
        html! {
            <li><a {onclick}>{"Sign out"}</a></li>
        }
    };

    let (display_name, email) = session
        .user
        .as_ref()
        .map(|user| (user.full_name(), user.email.clone()))
        .unwrap_or_else(|| ("Signed in".to_string(), String::new()));

    html! {
        <div class="dropdown dropdown-end">
            <div tabindex="0" role="button" class="btn btn-ghost btn-circle mb-1">
                <i class="fa-solid fa-user text-lg"></i>
            </div>
            <ul tabIndex={0} class="dropdown-content z-[1] menu p-2 shadow bg-base-200 rounded-box w-52">
                <li class="px-2 py-1 text-left">
                    <div class="text-sm font-semibold text-base-content">{ display_name }</div>
                    <div class="text-xs text-base-content/70">{ email }</div>
                </li>
                <div class="divider my-0"></div>
                {logout_button}
            </ul>
        </div>
    }
}
