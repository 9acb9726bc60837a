use crate::containers::header::Header;
use crate::containers::page_content::PageContent;
use crate::routes::Route;
use web_sys::window;
use yew::{
    Callback, Children, Html, Properties, classes, function_component, html, use_effect_with,
};

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    pub children: Children,
    #[prop_or_default]
    pub current_route: Option<Route>,
    #[prop_or_default]
    pub header_routes: Option<Vec<Route>>,
    #[prop_or_default]
    pub on_logout: Option<Callback<()>>,
}

#[function_component(Layout)]
pub fn layout(props: &LayoutProps) -> Html {
    // Adds data-theme attribute to html tag for theme support
    use_effect_with((), |_| {
        if let Some(window) = window() {
            if let Some(document) = window.document() {
                if let Some(html_element) = document.document_element() {
                    html_element
                        .set_attribute("data-theme", "corporate")
                        .unwrap_or_default();
                }
            }
        }
        || {}
    });
    let header_routes = props.header_routes.clone();

    html! {
    <>
        <Header {header_routes} current_route={props.current_route.clone()} on_logout={props.on_logout.clone()} />
        <div class="min-h-screen bg-base-100 flex flex-col">
            <main class={classes!("flex-grow", "p-4")}>
                <PageContent>
                    {props.children.clone()}
                </PageContent>
            </main>
            <footer class="footer footer-center p-4 border-t border-base-300 text-base-content">
                <div>
                    <p>{"KMT · Knowledge Management Tool"}</p>
                </div>
            </footer>
        </div>
    </>
    }
}
