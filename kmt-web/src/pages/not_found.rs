use yew::{Html, function_component, html};

/// Fallback view for unknown paths.
#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    html! {
        <div class="p-4 space-y-6">
            <h1 class="text-2xl font-bold">{ "Page not found" }</h1>
            <p>{ "The page you were looking for does not exist." }</p>
        </div>
    }
}
