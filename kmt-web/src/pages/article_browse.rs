use crate::{api::ApiClient, components::loading::Loading};
use kmt_shared::models::Article;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

/// Reader view over the approved knowledge-base articles.
#[function_component(ArticleBrowsePage)]
pub fn article_browse_page() -> Html {
    let articles = use_state(Vec::<Article>::new);
    let loading = use_state(|| true);
    let error = use_state(|| None::<String>);

    {
        let articles = articles.clone();
        let loading = loading.clone();
        let error = error.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                let client = ApiClient::shared();
                match client.list_articles().await {
                    Ok(fetched) => {
                        // Readers only ever see approved content.
                        articles.set(
                            fetched
                                .into_iter()
                                .filter(|article| article.approved)
                                .collect(),
                        );
                    }
                    Err(err) => {
                        log::error!("article browse fetch failed: {err}");
                        error.set(Some("Unable to load articles".to_string()));
                    }
                }
                loading.set(false);
            });
            || ()
        });
    }

    html! {
        <div class="p-4 space-y-4">
            <h1 class="text-2xl font-bold">{ "Articles" }</h1>

            if let Some(message) = &*error {
                <div class="alert alert-error">
                    <span>{ message.clone() }</span>
                </div>
            }

            if *loading {
                <Loading />
            } else if articles.is_empty() {
                <p class="text-base-content/70">{ "No approved articles yet." }</p>
            } else {
                <div class="space-y-4">
                    { for articles.iter().map(|article| html! {
                        <div class="card bg-base-200 shadow" key={article.id.clone()}>
                            <div class="card-body">
                                <h2 class="card-title">
                                    { article.title.clone() }
                                    <span class="badge badge-outline">{ article.article_type.to_string() }</span>
                                </h2>
                                <p class="text-sm text-base-content/70 italic">
                                    { article.description.clone() }
                                </p>
                                <p class="whitespace-pre-line">{ article.content.clone() }</p>
                                <div class="text-xs text-base-content/60">
                                    { format!("{} · {}", article.created_by, article.created_at) }
                                </div>
                            </div>
                        </div>
                    }) }
                </div>
            }
        </div>
    }
}
