use crate::{
    api::ApiClient,
    components::{loading::Loading, pagination::Pagination},
    models::table::{self, PAGE_SIZE, SortDirection},
    routes::Route,
};
use kmt_shared::models::User;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_icons::{Icon, IconId};
use yew_router::prelude::*;

/// Flattened user shape bound to the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRow {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: String,
}

impl From<&User> for UserRow {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.clone(),
            name: user.full_name(),
            email: user.email.clone(),
            role: user.user_role.to_string(),
        }
    }
}

fn row_haystack(row: &UserRow) -> String {
    format!("{} {} {}", row.name, row.email, row.role)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum UserColumn {
    Name,
    Email,
    Role,
}

impl UserColumn {
    fn key(self, row: &UserRow) -> String {
        match self {
            Self::Name => row.name.clone(),
            Self::Email => row.email.clone(),
            Self::Role => row.role.clone(),
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Role => "Role",
        }
    }
}

#[function_component(UserListPage)]
pub fn user_list_page() -> Html {
    let rows = use_state(Vec::<UserRow>::new);
    let loading = use_state(|| true);
    let error = use_state(|| None::<String>);
    let filter = use_state(String::new);
    let sort = use_state(|| (UserColumn::Name, SortDirection::Ascending));
    let page = use_state(|| 0usize);
    let navigator = use_navigator();

    {
        let rows = rows.clone();
        let loading = loading.clone();
        let error = error.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                let client = ApiClient::shared();
                match client.list_users().await {
                    Ok(users) => rows.set(users.iter().map(UserRow::from).collect()),
                    Err(err) => {
                        log::error!("user list fetch failed: {err}");
                        error.set(Some("Unable to load users".to_string()));
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

    let sort_header = |column: UserColumn| -> Html {
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
                nav.push(&Route::UserEdit { id: id.clone() });
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
                <h1 class="text-2xl font-bold">{ "User List" }</h1>
                <Link<Route> to={Route::UserAdd} classes="btn btn-primary btn-sm">
                    <Icon icon_id={IconId::HeroiconsOutlineUserPlus} class="w-4 h-4" />
                    { "Add user" }
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
                placeholder="Filter users"
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
                                { sort_header(UserColumn::Name) }
                                { sort_header(UserColumn::Email) }
                                { sort_header(UserColumn::Role) }
                                <th>{ "Actions" }</th>
                            </tr>
                        </thead>
                        <tbody>
                            { for visible.iter().map(|row| {
                                html! {
                                    <tr key={row.id.clone()}>
                                        <td>{ row.name.clone() }</td>
                                        <td>{ row.email.clone() }</td>
                                        <td><span class="badge badge-ghost">{ row.role.clone() }</span></td>
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
    use kmt_shared::models::UserRole;

    fn user(first: &str, last: &str, email: &str, role: UserRole) -> User {
        User {
            id: format!("id-{first}"),
            first_name: first.to_string(),
            last_name: last.to_string(),
            email: email.to_string(),
            password: String::new(),
            user_role: role,
        }
    }

    #[test]
    fn row_flattens_name_and_role() {
        let row = UserRow::from(&user("Asha", "Patel", "asha@example.com", UserRole::Manager));
        assert_eq!(row.name, "Asha Patel");
        assert_eq!(row.role, "manager");
        assert_eq!(row.id, "id-Asha");
    }

    #[test]
    fn filter_matches_email_substring() {
        let rows: Vec<UserRow> = [
            user("Asha", "Patel", "asha.patel@example.com", UserRole::Admin),
            user("Li", "Wei", "li.wei@example.com", UserRole::User),
        ]
        .iter()
        .map(UserRow::from)
        .collect();

        let filtered = table::filter_rows(&rows, "LI.WEI", row_haystack);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "Li Wei");

        assert_eq!(table::filter_rows(&rows, "", row_haystack).len(), 2);
    }

    #[test]
    fn rows_can_be_filtered_by_role() {
        let rows: Vec<UserRow> = [
            user("Asha", "Patel", "asha@example.com", UserRole::Admin),
            user("Li", "Wei", "li@example.com", UserRole::User),
        ]
        .iter()
        .map(UserRow::from)
        .collect();

        let filtered = table::filter_rows(&rows, "admin", row_haystack);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].email, "asha@example.com");
    }

    #[test]
    fn columns_expose_sort_keys() {
        let row = UserRow::from(&user("Asha", "Patel", "asha@example.com", UserRole::Admin));
        assert_eq!(UserColumn::Name.key(&row), "Asha Patel");
        assert_eq!(UserColumn::Email.key(&row), "asha@example.com");
        assert_eq!(UserColumn::Role.key(&row), "admin");
    }
}
