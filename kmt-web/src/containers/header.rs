use crate::{
    components::{header_nav_item::HeaderNavItem, user_dropdown::UserDropdown},
    models::app_state::AppState,
    routes::Route,
};
use yew::prelude::*;
use yew_router::prelude::Link;
use yewdux::prelude::use_selector;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    #[prop_or_default]
    pub current_route: Option<Route>,
    #[prop_or_default]
    pub header_routes: Option<Vec<Route>>,
    #[prop_or_default]
    pub on_logout: Option<Callback<()>>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let is_authenticated = use_selector(|state: &AppState| state.is_authenticated());

    let render_routes = |routes: &[Route]| -> Html {
        html! {
            { for routes.iter().map(|route| html! {
                <HeaderNavItem
                    current_route={props.current_route.clone()}
                    route={route.clone()}
                />
            }) }
        }
    };

    html! {
        <nav class="navbar justify-between bg-base-300">
            <a class="btn btn-ghost text-lg">
                <Link<Route> to={Route::Dashboard} classes="text-lg">
                    {"KMT Admin"}
                </Link<Route>>
            </a>
            <div class="dropdown dropdown-end sm:hidden">
                <button class="btn btn-soft">
                    <i class="fa-solid fa-bars text-lg"></i>
                </button>
                <ul
                    tabindex="0"
                    class="dropdown-content menu z-[1] bg-base-200 p-6 rounded-box shadow w-56 gap-2"
                >
                {
                    props
                        .header_routes
                        .as_ref()
                        .map_or_else(|| html! {}, |routes| render_routes(routes))
                }
                </ul>
            </div>
            <ul class="hidden menu sm:menu-horizontal">
                {
                    props
                        .header_routes
                        .as_ref()
                        .map_or_else(|| html! {}, |routes| render_routes(routes))
                }
            </ul>
            <div class="flex items-center gap-2">
                {
                    if *is_authenticated {
                        html! { <UserDropdown on_logout={props.on_logout.clone()} /> }
                    } else {
                        html! {
                            <Link<Route> to={Route::Login} classes="btn btn-primary btn-sm">
                                {"Sign in"}
                            </Link<Route>>
                        }
                    }
                }
            </div>
        </nav>
    }
}
