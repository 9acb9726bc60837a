use crate::{
    api::ApiClient,
    components::toast::{Toast, ToastKind},
    models::app_state::AppState,
    routes::Route,
};
use kmt_shared::models::{Article, ArticleType, Timestamp};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;
use yew_router::hooks::use_navigator;
use yewdux::prelude::use_selector;

#[derive(Properties, PartialEq)]
pub struct ArticleFormProps {
    /// `Some` puts the form in edit mode for that article.
    #[prop_or_default]
    pub id: Option<String>,
}

/// Add/edit knowledge-base article form.
#[function_component(ArticleFormPage)]
pub fn article_form_page(props: &ArticleFormProps) -> Html {
    let title = use_state(String::new);
    let description = use_state(String::new);
    let content = use_state(String::new);
    let kind = use_state(|| ArticleType::Faq);
    let approved = use_state(|| false);
    // Original record in edit mode, so author and creation date survive
    // the round trip.
    let original = use_state(|| None::<Article>);
    let saving = use_state(|| false);
    let toast = use_state(|| None::<String>);
    let navigator = use_navigator();
    let author = use_selector(|state: &AppState| {
        state
            .current_user()
            .map(|user| user.full_name())
            .unwrap_or_default()
    });

    let editing = props.id.is_some();

    {
        let title = title.clone();
        let description = description.clone();
        let content = content.clone();
        let kind = kind.clone();
        let approved = approved.clone();
        let original = original.clone();
        let toast = toast.clone();
        use_effect_with(props.id.clone(), move |id| {
            if let Some(id) = id.clone() {
                spawn_local(async move {
                    let client = ApiClient::shared();
                    match client.get_article(&id).await {
                        Ok(article) => {
                            title.set(article.title.clone());
                            description.set(article.description.clone());
                            content.set(article.content.clone());
                            kind.set(article.article_type);
                            approved.set(article.approved);
                            original.set(Some(article));
                        }
                        Err(err) => {
                            log::error!("article fetch failed: {err}");
                            toast.set(Some("Unable to load article".to_string()));
                        }
                    }
                });
            }
            || ()
        });
    }

    let onsubmit = {
        let title = title.clone();
        let description = description.clone();
        let content = content.clone();
        let kind = kind.clone();
        let approved = approved.clone();
        let original = original.clone();
        let saving = saving.clone();
        let toast = toast.clone();
        let id = props.id.clone();
        let navigator = navigator.clone();
        let author = author.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let (created_by, created_at) = (*original)
                .as_ref()
                .map(|article| (article.created_by.clone(), article.created_at))
                .unwrap_or_else(|| ((*author).clone(), Timestamp::now()));
            let article = Article {
                id: id.clone().unwrap_or_default(),
                title: (*title).clone(),
                description: (*description).clone(),
                content: (*content).clone(),
                article_type: *kind,
                created_by,
                created_at,
                approved: *approved,
            };
            saving.set(true);
            let saving_ref = saving.clone();
            let toast_ref = toast.clone();
            let navigator = navigator.clone();
            let editing = id.is_some();
            spawn_local(async move {
                let client = ApiClient::shared();
                let result = if editing {
                    client.update_article(&article).await
                } else {
                    client.create_article(&article).await
                };
                match result {
                    Ok(ack) if ack.status => {
                        if let Some(ref nav) = navigator {
                            nav.push(&Route::ArticleList);
                        }
                    }
                    Ok(ack) => toast_ref.set(Some(ack.message)),
                    Err(err) => {
                        log::error!("article save failed: {err}");
                        toast_ref.set(Some("Unable to save article".to_string()));
                    }
                }
                saving_ref.set(false);
            });
        })
    };

    let on_title_change = {
        let title = title.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                title.set(input.value());
            }
        })
    };

    let on_description_change = {
        let description = description.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                description.set(input.value());
            }
        })
    };

    let on_content_change = {
        let content = content.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(area) = event.target_dyn_into::<HtmlTextAreaElement>() {
                content.set(area.value());
            }
        })
    };

    let on_kind_change = {
        let kind = kind.clone();
        Callback::from(move |event: Event| {
            if let Some(select) = event.target_dyn_into::<HtmlSelectElement>() {
                if let Ok(parsed) = select.value().parse::<ArticleType>() {
                    kind.set(parsed);
                }
            }
        })
    };

    let on_approved_change = {
        let approved = approved.clone();
        Callback::from(move |event: Event| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                approved.set(input.checked());
            }
        })
    };

    let on_toast_dismiss = {
        let toast = toast.clone();
        Callback::from(move |()| toast.set(None))
    };

    let disable_submit = (*title).is_empty() || (*content).is_empty() || *saving;

    html! {
        <div class="p-4 space-y-4 max-w-2xl">
            <h1 class="text-2xl font-bold">
                { if editing { "Edit Article" } else { "Add Article" } }
            </h1>

            if let Some(message) = &*toast {
                <Toast message={message.clone()} kind={ToastKind::Error} on_dismiss={on_toast_dismiss} />
            }

            <form class="space-y-4" onsubmit={onsubmit}>
                <div class="form-control">
                    <label class="label" for="title">
                        <span class="label-text">{ "Title" }</span>
                    </label>
                    <input
                        id="title"
                        class="input input-bordered"
                        type="text"
                        required=true
                        value={(*title).clone()}
                        oninput={on_title_change}
                    />
                </div>
                <div class="form-control">
                    <label class="label" for="description">
                        <span class="label-text">{ "Description" }</span>
                    </label>
                    <input
                        id="description"
                        class="input input-bordered"
                        type="text"
                        value={(*description).clone()}
                        oninput={on_description_change}
                    />
                </div>
                <div class="form-control">
                    <label class="label" for="content">
                        <span class="label-text">{ "Content" }</span>
                    </label>
                    <textarea
                        id="content"
                        class="textarea textarea-bordered h-48"
                        required=true
                        value={(*content).clone()}
                        oninput={on_content_change}
                    />
                </div>
                <div class="form-control">
                    <label class="label" for="article-type">
                        <span class="label-text">{ "Type" }</span>
                    </label>
                    <select id="article-type" class="select select-bordered" onchange={on_kind_change}>
                        { for ArticleType::all().iter().map(|candidate| html! {
                            <option
                                value={candidate.as_str()}
                                selected={*candidate == *kind}
                            >
                                { candidate.as_str() }
                            </option>
                        }) }
                    </select>
                </div>
                <div class="form-control">
                    <label class="label cursor-pointer justify-start gap-3">
                        <input
                            type="checkbox"
                            class="checkbox"
                            checked={*approved}
                            onchange={on_approved_change}
                        />
                        <span class="label-text">{ "Approved for the reader view" }</span>
                    </label>
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
