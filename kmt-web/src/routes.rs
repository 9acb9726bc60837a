use crate::{containers::layout::Layout, models::app_state::AppState, pages::*};
use strum::{EnumIter, IntoEnumIterator};
use wasm_bindgen::prelude::*;
use yew::Callback;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::use_selector;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

/// The route table. Paths mirror the backend's admin console URLs; the
/// table is validated when the `Routable` derive expands.
#[derive(Debug, Clone, PartialEq, Routable, EnumIter)]
pub enum Route {
    #[at("/")]
    Root,
    #[at("/dashboard")]
    Dashboard,
    #[at("/login")]
    Login,
    #[at("/articlelist")]
    ArticleList,
    #[at("/article/add")]
    ArticleAdd,
    #[at("/article-list")]
    ArticleBrowse,
    #[at("/article/edit/:id")]
    ArticleEdit { id: String },
    #[at("/user/add")]
    UserAdd,
    #[at("/userlist")]
    UserList,
    #[at("/user/edit/:id")]
    UserEdit { id: String },
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    /// Whether the route sits behind the auth guard. Only the dashboard
    /// is gated; every other view is reachable without a session.
    #[must_use]
    pub fn requires_auth(&self) -> bool {
        matches!(self, Self::Dashboard)
    }

    /// Browser tab / navigation title for the route.
    #[must_use]
    pub fn title(&self) -> &'static str {
        match self {
            Self::Root | Self::Dashboard => "Dashboard",
            Self::Login => "Login",
            Self::ArticleList => "Article List",
            Self::ArticleAdd => "Add Article",
            Self::ArticleBrowse => "Articles",
            Self::ArticleEdit { .. } => "Edit Article",
            Self::UserAdd => "Add User",
            Self::UserList => "User List",
            Self::UserEdit { .. } => "Edit User",
            Self::NotFound => "Not Found",
        }
    }

    /// Routes shown in the header navigation, in declaration order.
    #[must_use]
    pub fn nav_routes() -> Vec<Self> {
        Self::iter()
            .filter(|route| {
                matches!(
                    route,
                    Self::Dashboard | Self::UserList | Self::ArticleList | Self::ArticleBrowse
                )
            })
            .collect()
    }
}

#[derive(Properties, PartialEq)]
pub struct RouteViewProps {
    pub route: Route,
    pub on_logout: Callback<()>,
}

#[function_component(RouteView)]
fn route_view(props: &RouteViewProps) -> Html {
    let state = use_selector(|state: &AppState| state.clone());
    let is_authenticated = state.is_authenticated();

    // Keep the browser tab title in sync with the active view.
    use_effect_with(props.route.clone(), |route| {
        if let Some(document) = web_sys::window().and_then(|window| window.document()) {
            document.set_title(&format!("KMT · {}", route.title()));
        }
        || ()
    });

    if props.route.requires_auth() && !is_authenticated {
        return html! { <Redirect<Route> to={Route::Login} /> };
    }

    let on_logout = props.on_logout.clone();
    let page = |inner: Html| {
        let header_routes = Route::nav_routes();
        html! {
            <Layout {header_routes} current_route={props.route.clone()} on_logout={Some(on_logout.clone())}>
                { inner }
            </Layout>
        }
    };

    match props.route.clone() {
        Route::Root => html! { <Redirect<Route> to={Route::Dashboard} /> },
        Route::Login => html! { <LoginPage /> },
        Route::Dashboard => page(html! { <DashboardPage /> }),
        Route::UserList => page(html! { <UserListPage /> }),
        Route::UserAdd => page(html! { <UserFormPage id={None::<String>} /> }),
        Route::UserEdit { id } => page(html! { <UserFormPage id={Some(id)} /> }),
        Route::ArticleList => page(html! { <ArticleListPage /> }),
        Route::ArticleAdd => page(html! { <ArticleFormPage id={None::<String>} /> }),
        Route::ArticleEdit { id } => page(html! { <ArticleFormPage id={Some(id)} /> }),
        Route::ArticleBrowse => page(html! { <ArticleBrowsePage /> }),
        Route::NotFound => page(html! { <NotFoundPage /> }),
    }
}

/// Switch function handed to the router.
pub fn switch_with_logout(route: Route, on_logout: Callback<()>) -> Html {
    log(std::format!("Switching to route: {:?}", route).as_str());
    html! { <RouteView {route} {on_logout} /> }
}
