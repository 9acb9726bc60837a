use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PaginationProps {
    /// Zero-based current page.
    pub page: usize,
    /// Total number of pages, at least 1.
    pub pages: usize,
    pub on_page: Callback<usize>,
}

#[function_component(Pagination)]
pub fn pagination(props: &PaginationProps) -> Html {
    let at_start = props.page == 0;
    let at_end = props.page + 1 >= props.pages;

    let on_prev = {
        let on_page = props.on_page.clone();
        let page = props.page;
        Callback::from(move |_: MouseEvent| {
            if page > 0 {
                on_page.emit(page - 1);
            }
        })
    };

    let on_next = {
        let on_page = props.on_page.clone();
        let page = props.page;
        Callback::from(move |_: MouseEvent| on_page.emit(page + 1))
    };

    html! {
        <div class="join mt-4">
            <button class="join-item btn btn-sm" disabled={at_start} onclick={on_prev}>{"«"}</button>
            <button class="join-item btn btn-sm btn-disabled">
                { format!("Page {} of {}", props.page + 1, props.pages) }
            </button>
            <button class="join-item btn btn-sm" disabled={at_end} onclick={on_next}>{"»"}</button>
        </div>
    }
}
