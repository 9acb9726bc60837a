use crate::{
    api::ApiClient,
    components::{loading::Loading, pagination::Pagination},
    models::table::{self, PAGE_SIZE, SortDirection},
    routes::Route,
};
use kmt_shared::models::Article;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_icons::{Icon, IconId};
use yew_router::prelude::*;

/// Flattened article shape bound to the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleRow {
    pub id: String,
    pub title: String,
    pub kind: String,
    pub author: String,
    pub status: String,
}

impl From<&Article> for ArticleRow {
    fn from(article: &Article) -> Self {
        Self {
            id: article.id.clone(),
            title: article.title.clone(),
            kind: article.article_type.to_string(),
            author: article.created_by.clone(),
            status: if article.approved {
                "approved".to_string()
            } else {
                "draft".to_string()
            },
        }
    }
}

fn row_haystack(row: &ArticleRow) -> String {
    format!("{} {} {} {}", row.title, row.kind, row.author, row.status)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ArticleColumn {
    Title,
    Kind,
    Author,
    Status,
}

impl ArticleColumn {
    fn key(self, row: &ArticleRow) -> String {
        match self {
            Self::Title => row.title.clone(),
            Self::Kind => row.kind.clone(),
            Self::Author => row.author.clone(),
            Self::Status => row.status.clone(),
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Title => "Title",
            Self::Kind => "Type",
            Self::Author => "Author",
            Self::Status => "Status",
        }
    }
}

#[function_component(ArticleListPage)]
pub fn article_list_page() -> Html {
    let rows = use_state(Vec::<ArticleRow>::new);
    let loading = use_state(|| true);
    let error = use_state(|| None::<String>);
    let filter = use_state(String::new);
    let sort = use_state(|| (ArticleColumn::Title, SortDirection::Ascending));
    let page = use_state(|| 0usize);
    let navigator = use_navigator();

    {
        let rows = rows.clone();
        let loading = loading.clone();
        let error = error.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                let client = ApiClient::shared();
                match client.list_articles().await {
                    Ok(articles) => rows.set(articles.iter().map(ArticleRow::from).collect()),
                    Err(err) => {
                        log::error!("article list fetch failed: {err}");
                        error.set(Some("Unable to load articles".to_string()));
                    }
                }
                loading.set(false);
            });
            || ()
        });
    }

    let on_filter = {
        let filter = filter.clone();
        let page = page.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                filter.set(input.value());
                page.set(0);
            }
        })
    };

    let sort_header = |column: ArticleColumn| -> Html {
        let sort_handle = sort.clone();
        let (active_column, direction) = *sort_handle;
        let onclick = Callback::from(move |_: MouseEvent| {
            let (current, direction) = *sort_handle;
            if current == column {
                sort_handle.set((column, direction.toggle()));
            } else {
                sort_handle.set((column, SortDirection::Ascending));
            }
        });
        let marker = if active_column == column {
            match direction {
                SortDirection::Ascending => " ▲",
                SortDirection::Descending => " ▼",
            }
        } else {
            ""
        };
        html! {
            <th class="cursor-pointer select-none" {onclick}>
                { format!("{}{}", column.label(), marker) }
            </th>
        }
    };

    let on_edit = |id: String| -> Callback<MouseEvent> {
        let navigator = navigator.clone();
        Callback::from(move |_| {
            if let Some(ref nav) = navigator {
                nav.push(&Route::ArticleEdit { id: id.clone() });
            }
        })
    };

    let (sort_column, direction) = *sort;
    let mut visible = table::filter_rows(&rows, &filter, row_haystack);
    table::sort_rows(&mut visible, direction, |row| sort_column.key(row));
    let current_page = table::clamp_page(*page, visible.len(), PAGE_SIZE);
    let pages = table::page_count(visible.len(), PAGE_SIZE);
    let visible = table::page_slice(&visible, current_page, PAGE_SIZE);

    let on_page = {
        let page = page.clone();
        Callback::from(move |next: usize| page.set(next))
    };

    html! {
        <div class="p-4 space-y-4">
            <div class="flex items-center justify-between">
                <h1 class="text-2xl font-bold">{ "Article List" }</h1>
                <Link<Route> to={Route::ArticleAdd} classes="btn btn-primary btn-sm">
                    <Icon icon_id={IconId::HeroiconsOutlineDocumentPlus} class="w-4 h-4" />
                    { "Add article" }
                </Link<Route>>
            </div>

            if let Some(message) = &*error {
                <div class="alert alert-error">
                    <span>{ message.clone() }</span>
                </div>
            }

            <input
                class="input input-bordered w-full max-w-xs"
                type="text"
                placeholder="Filter articles"
                value={(*filter).clone()}
                oninput={on_filter}
            />

            if *loading {
                <Loading />
            } else {
                <div class="overflow-x-auto">
                    <table class="table table-zebra">
                        <thead>
                            <tr>
                                { sort_header(ArticleColumn::Title) }
                                { sort_header(ArticleColumn::Kind) }
                                { sort_header(ArticleColumn::Author) }
                                { sort_header(ArticleColumn::Status) }
                                <th>{ "Actions" }</th>
                            </tr>
                        </thead>
                        <tbody>
                            { for visible.iter().map(|row| {
                                let status_class = if row.status == "approved" {
                                    "badge badge-success"
                                } else {
                                    "badge badge-ghost"
                                };
                                html! {
                                    <tr key={row.id.clone()}>
                                        <td>{ row.title.clone() }</td>
                                        <td>{ row.kind.clone() }</td>
                                        <td>{ row.author.clone() }</td>
                                        <td><span class={status_class}>{ row.status.clone() }</span></td>
                                        <td>
                                            <button class="btn btn-ghost btn-xs" onclick={on_edit(row.id.clone())}>
                                                <Icon icon_id={IconId::HeroiconsOutlinePencilSquare} class="w-4 h-4" />
                                                { "Edit" }
                                            </button>
                                        </td>
                                    </tr>
                                }
                            }) }
                        </tbody>
                    </table>
                </div>
                <Pagination page={current_page} {pages} {on_page} />
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::table;
    use kmt_shared::models::{ArticleType, Timestamp};

    fn article(title: &str, kind: ArticleType, author: &str, approved: bool) -> Article {
        Article {
            id: format!("id-{title}"),
            title: title.to_string(),
            description: "summary".to_string(),
            content: "body".to_string(),
            article_type: kind,
            created_by: author.to_string(),
            created_at: Timestamp::now(),
            approved,
        }
    }

    #[test]
    fn row_maps_status_from_approval() {
        let approved = ArticleRow::from(&article("A", ArticleType::Faq, "Asha", true));
        let draft = ArticleRow::from(&article("B", ArticleType::Guide, "Li", false));
        assert_eq!(approved.status, "approved");
        assert_eq!(draft.status, "draft");
        assert_eq!(approved.kind, "faq");
    }

    #[test]
    fn filter_matches_title_and_author() {
        let rows: Vec<ArticleRow> = [
            article("Password reset", ArticleType::Faq, "Asha Patel", true),
            article("Onboarding guide", ArticleType::Guide, "Li Wei", false),
        ]
        .iter()
        .map(ArticleRow::from)
        .collect();

        assert_eq!(table::filter_rows(&rows, "PASSWORD", row_haystack).len(), 1);
        assert_eq!(table::filter_rows(&rows, "li wei", row_haystack).len(), 1);
        assert_eq!(table::filter_rows(&rows, "", row_haystack).len(), 2);
    }
}
