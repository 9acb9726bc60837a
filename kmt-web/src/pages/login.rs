use crate::{
    api::ApiClient,
    models::app_state::AppState,
    routes::Route,
    session::{BrowserSession, Session, SessionProvider},
};
use kmt_shared::models::LoginRequest;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::hooks::use_navigator;
use yewdux::prelude::use_store;

/// Message shown for any failed credential check.
pub const LOGIN_FAILED_MESSAGE: &str = "Username or password is incorrect";

fn submit_disabled(username: &str, password: &str, busy: bool) -> bool {
    username.is_empty() || password.is_empty() || busy
}

#[function_component(LoginPage)]
pub fn login_page() -> Html {
    let username = use_state(String::new);
    let password = use_state(String::new);
    let error = use_state(|| None::<String>);
    let loading = use_state(|| false);
    let navigator = use_navigator();
    let (_state, dispatch) = use_store::<AppState>();

    {
        // Landing on the login view resets any existing session.
        let dispatch = dispatch.clone();
        use_effect_with((), move |_| {
            BrowserSession.clear();
            dispatch.set(AppState::default());
            || ()
        });
    }

    let onsubmit = {
        let username_handle = username.clone();
        let password_handle = password.clone();
        let error_handle = error.clone();
        let loading_handle = loading.clone();
        let dispatch = dispatch;
        let navigator = navigator;
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let username_value = (*username_handle).clone();
            let password_value = (*password_handle).clone();
            loading_handle.set(true);
            error_handle.set(None);
            let loading_ref = loading_handle.clone();
            let error_ref = error_handle.clone();
            let dispatch = dispatch.clone();
            let navigator_handle = navigator.clone();
            spawn_local(async move {
                let client = ApiClient::shared();
                let request = LoginRequest {
                    username: username_value,
                    password: password_value,
                };
                match client.login(&request).await {
                    Ok(response) => {
                        BrowserSession.store(&response);
                        dispatch.set(AppState {
                            session: Some(Session::from(response)),
                        });
                        if let Some(ref nav) = navigator_handle {
                            nav.push(&Route::Dashboard);
                        }
                    }
                    Err(_) => {
                        error_ref.set(Some(LOGIN_FAILED_MESSAGE.to_string()));
                    }
                }
                loading_ref.set(false);
            });
        })
    };

    let on_username_change = {
        let username = username.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                username.set(input.value());
            }
        })
    };

    let on_password_change = {
        let password = password.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                password.set(input.value());
            }
        })
    };

    let is_busy = *loading;
    let disable_submit = submit_disabled(&username, &password, is_busy);

    html! {
        <div class="flex items-center justify-center min-h-screen bg-base-200">
            <div class="card w-full max-w-md shadow-lg bg-base-100">
                <form class="card-body" onsubmit={onsubmit}>
                    <h2 class="card-title text-2xl">{"Sign in"}</h2>
                    if let Some(message) = &*error {
                        <div class="alert alert-error">
                            <span>{message.clone()}</span>
                        </div>
                    }
                    <div class="form-control">
                        <label class="label" for="username">
                            <span class="label-text">{"Username"}</span>
                        </label>
                        <input
                            id="username"
                            class="input input-bordered"
                            type="text"
                            required=true
                            value={(*username).clone()}
                            oninput={on_username_change}
                        />
                    </div>
                    <div class="form-control">
                        <label class="label" for="password">
                            <span class="label-text">{"Password"}</span>
                        </label>
                        <input
                            id="password"
                            class="input input-bordered"
                            type="password"
                            required=true
                            value={(*password).clone()}
                            oninput={on_password_change}
                        />
                    </div>
                    <div class="form-control mt-6">
                        <button class="btn btn-primary" type="submit" disabled={disable_submit}>
                            {if is_busy { "Signing in..." } else { "Sign in" }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failure_message_is_the_fixed_string() {
        assert_eq!(LOGIN_FAILED_MESSAGE, "Username or password is incorrect");
    }

    #[test]
    fn submit_requires_both_fields_and_an_idle_form() {
        assert!(submit_disabled("", "", false));
        assert!(submit_disabled("admin@example.com", "", false));
        assert!(submit_disabled("", "pw", false));
        assert!(submit_disabled("admin@example.com", "pw", true));
        assert!(!submit_disabled("admin@example.com", "pw", false));
    }
}
