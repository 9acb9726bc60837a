use crate::routes::Route;
use yew::prelude::*;
use yew_router::prelude::Link;

#[derive(Properties, PartialEq)]
pub struct HeaderNavItemProps {
    pub route: Route,
    #[prop_or_default]
    pub current_route: Option<Route>,
}

#[function_component(HeaderNavItem)]
pub fn header_nav_item(props: &HeaderNavItemProps) -> Html {
    let is_active = props.current_route.as_ref() == Some(&props.route);
    html! {
        <li>
            <Link<Route>
                to={props.route.clone()}
                classes={classes!(is_active.then_some("active"))}
            >
                { props.route.title() }
            </Link<Route>>
        </li>
    }
}
