use crate::{
    api::ApiClient,
    components::toast::{Toast, ToastKind},
    routes::Route,
};
use kmt_shared::models::{User, UserRole};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;
use yew_router::hooks::use_navigator;

#[derive(Properties, PartialEq)]
pub struct UserFormProps {
    /// `Some` puts the form in edit mode for that user.
    #[prop_or_default]
    pub id: Option<String>,
}

/// Add/edit user form.
#[function_component(UserFormPage)]
pub fn user_form_page(props: &UserFormProps) -> Html {
    let first_name = use_state(String::new);
    let last_name = use_state(String::new);
    let email = use_state(String::new);
    let password = use_state(String::new);
    let role = use_state(|| UserRole::User);
    let saving = use_state(|| false);
    let toast = use_state(|| None::<String>);
    let navigator = use_navigator();

    let editing = props.id.is_some();

    {
        let first_name = first_name.clone();
        let last_name = last_name.clone();
        let email = email.clone();
        let password = password.clone();
        let role = role.clone();
        let toast = toast.clone();
        use_effect_with(props.id.clone(), move |id| {
            if let Some(id) = id.clone() {
                spawn_local(async move {
                    let client = ApiClient::shared();
                    match client.get_user(&id).await {
                        Ok(user) => {
                            first_name.set(user.first_name);
                            last_name.set(user.last_name);
                            email.set(user.email);
                            password.set(user.password);
                            role.set(user.user_role);
                        }
                        Err(err) => {
                            log::error!("user fetch failed: {err}");
                            toast.set(Some("Unable to load user".to_string()));
                        }
                    }
                });
            }
            || ()
        });
    }

    let onsubmit = {
        let first_name = first_name.clone();
        let last_name = last_name.clone();
        let email = email.clone();
        let password = password.clone();
        let role = role.clone();
        let saving = saving.clone();
        let toast = toast.clone();
        let id = props.id.clone();
        let navigator = navigator.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let user = User {
                id: id.clone().unwrap_or_default(),
                first_name: (*first_name).clone(),
                last_name: (*last_name).clone(),
                email: (*email).clone(),
                password: (*password).clone(),
                user_role: *role,
            };
            saving.set(true);
            let saving_ref = saving.clone();
            let toast_ref = toast.clone();
            let navigator = navigator.clone();
            let editing = id.is_some();
            spawn_local(async move {
                let client = ApiClient::shared();
                let result = if editing {
                    client.update_user(&user).await
                } else {
                    client.create_user(&user).await
                };
                match result {
                    Ok(ack) if ack.status => {
                        if let Some(ref nav) = navigator {
                            nav.push(&Route::UserList);
                        }
                    }
                    Ok(ack) => toast_ref.set(Some(ack.message)),
                    Err(err) => {
                        log::error!("user save failed: {err}");
                        toast_ref.set(Some("Unable to save user".to_string()));
                    }
                }
                saving_ref.set(false);
            });
        })
    };

    let text_input = |label: &str,
                      id: &str,
                      kind: &str,
                      value: UseStateHandle<String>|
     -> Html {
        let oninput = {
            let value = value.clone();
            Callback::from(move |event: InputEvent| {
                if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                    value.set(input.value());
                }
            })
        };
        html! {
            <div class="form-control">
                <label class="label" for={id.to_string()}>
                    <span class="label-text">{ label.to_string() }</span>
                </label>
                <input
                    id={id.to_string()}
                    class="input input-bordered"
                    type={kind.to_string()}
                    required=true
                    value={(*value).clone()}
                    oninput={oninput}
                />
            </div>
        }
    };

    let on_role_change = {
        let role = role.clone();
        Callback::from(move |event: Event| {
            if let Some(select) = event.target_dyn_into::<HtmlSelectElement>() {
                if let Ok(parsed) = select.value().parse::<UserRole>() {
                    role.set(parsed);
                }
            }
        })
    };

    let on_toast_dismiss = {
        let toast = toast.clone();
        Callback::from(move |()| toast.set(None))
    };

    let disable_submit =
        (*first_name).is_empty() || (*last_name).is_empty() || (*email).is_empty() || *saving;

    html! {
        <div class="p-4 space-y-4 max-w-xl">
            <h1 class="text-2xl font-bold">
                { if editing { "Edit User" } else { "Add User" } }
            </h1>

            if let Some(message) = &*toast {
                <Toast message={message.clone()} kind={ToastKind::Error} on_dismiss={on_toast_dismiss} />
            }

            <form class="space-y-4" onsubmit={onsubmit}>
                { text_input("First name", "first-name", "text", first_name.clone()) }
                { text_input("Last name", "last-name", "text", last_name.clone()) }
                { text_input("Email", "email", "email", email.clone()) }
                { text_input("Password", "password", "password", password.clone()) }
                <div class="form-control">
                    <label class="label" for="role">
                        <span class="label-text">{ "Role" }</span>
                    </label>
                    <select id="role" class="select select-bordered" onchange={on_role_change}>
                        { for UserRole::all().iter().map(|candidate| html! {
                            <option
                                value={candidate.as_str()}
                                selected={*candidate == *role}
                            >
                                { candidate.as_str() }
                            </option>
                        }) }
                    </select>
                </div>
                <div class="form-control mt-6">
                    <button class="btn btn-primary" type="submit" disabled={disable_submit}>
                        { if *saving { "Saving..." } else { "Save" } }
                    </button>
                </div>
            </form>
        </div>
    }
}
