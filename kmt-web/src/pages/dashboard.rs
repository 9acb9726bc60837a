use crate::{api::ApiClient, routes::Route};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_icons::{Icon, IconId};
use yew_router::prelude::*;

/// Dashboard page component
#[function_component(DashboardPage)]
pub fn dashboard_page() -> Html {
    let user_count = use_state(|| None::<usize>);
    let article_stats = use_state(|| None::<(usize, usize)>);
    let error = use_state(|| None::<String>);

    {
        let user_count = user_count.clone();
        let article_stats = article_stats.clone();
        let error = error.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                let client = ApiClient::shared();
                match client.list_users().await {
                    Ok(users) => user_count.set(Some(users.len())),
                    Err(err) => {
                        log::error!("dashboard user fetch failed: {err}");
                        error.set(Some("Unable to load dashboard statistics".to_string()));
                    }
                }
                match client.list_articles().await {
                    Ok(articles) => {
                        let approved = articles.iter().filter(|article| article.approved).count();
                        article_stats.set(Some((articles.len(), approved)));
                    }
                    Err(err) => {
                        log::error!("dashboard article fetch failed: {err}");
                        error.set(Some("Unable to load dashboard statistics".to_string()));
                    }
                }
            });
            || ()
        });
    }

    let stat = |value: Option<usize>| {
        value.map_or_else(|| "–".to_string(), |count| count.to_string())
    };

    html! {
        <div class="p-4 space-y-6">
            <h1 class="text-2xl font-bold">{ "Dashboard" }</h1>

            if let Some(message) = &*error {
                <div class="alert alert-error">
                    <span>{ message.clone() }</span>
                </div>
            }

            <div class="stats shadow w-full">
                <div class="stat">
                    <div class="stat-figure text-primary">
                        <Icon icon_id={IconId::HeroiconsOutlineUserGroup} class="w-8 h-8" />
                    </div>
                    <div class="stat-title">{ "Users" }</div>
                    <div class="stat-value">{ stat(*user_count) }</div>
                </div>
                <div class="stat">
                    <div class="stat-figure text-secondary">
                        <Icon icon_id={IconId::HeroiconsOutlineBookOpen} class="w-8 h-8" />
                    </div>
                    <div class="stat-title">{ "Articles" }</div>
                    <div class="stat-value">{ stat(article_stats.map(|(total, _)| total)) }</div>
                </div>
                <div class="stat">
                    <div class="stat-figure text-accent">
                        <Icon icon_id={IconId::HeroiconsOutlineDocumentText} class="w-8 h-8" />
                    </div>
                    <div class="stat-title">{ "Approved" }</div>
                    <div class="stat-value">{ stat(article_stats.map(|(_, approved)| approved)) }</div>
                </div>
            </div>

            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                // User management card
                <div class="card bg-base-200 shadow-xl">
                    <div class="card-body">
                        <h2 class="card-title">
                            <Icon icon_id={IconId::HeroiconsOutlineUserGroup} class="w-6 h-6" />
                            { "Users" }
                        </h2>
                        <p>{ "Manage the accounts that can sign in to the console." }</p>
                        <div class="card-actions justify-end">
                            <Link<Route> to={Route::UserAdd} classes="btn btn-outline">
                                { "Add user" }
                            </Link<Route>>
                            <Link<Route> to={Route::UserList} classes="btn btn-primary">
                                { "User list" }
                            </Link<Route>>
                        </div>
                    </div>
                </div>

                // Knowledge base card
                <div class="card bg-base-200 shadow-xl">
                    <div class="card-body">
                        <h2 class="card-title">
                            <Icon icon_id={IconId::HeroiconsOutlineBookOpen} class="w-6 h-6" />
                            { "Knowledge base" }
                        </h2>
                        <p>{ "Write and maintain knowledge-base articles." }</p>
                        <div class="card-actions justify-end">
                            <Link<Route> to={Route::ArticleAdd} classes="btn btn-outline">
                                { "Add article" }
                            </Link<Route>>
                            <Link<Route> to={Route::ArticleList} classes="btn btn-secondary">
                                { "Article list" }
                            </Link<Route>>
                        </div>
                    </div>
                </div>

                // Reader view card
                <div class="card bg-base-200 shadow-xl">
                    <div class="card-body">
                        <h2 class="card-title">
                            <Icon icon_id={IconId::HeroiconsOutlineDocumentText} class="w-6 h-6" />
                            { "Browse" }
                        </h2>
                        <p>{ "Read the approved articles as your users see them." }</p>
                        <div class="card-actions justify-end">
                            <Link<Route> to={Route::ArticleBrowse} classes="btn btn-accent">
                                { "Browse articles" }
                            </Link<Route>>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}
