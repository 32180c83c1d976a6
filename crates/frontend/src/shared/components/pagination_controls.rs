use crate::shared::icons::icon;
use leptos::prelude::*;

/// Previous / Next pager with a "Page X of Y" label
#[component]
pub fn PaginationControls(
    /// Label text, e.g. "Page 2 of 5"
    #[prop(into)]
    label: Signal<String>,

    #[prop(into)]
    can_prev: Signal<bool>,

    #[prop(into)]
    can_next: Signal<bool>,

    on_prev: Callback<()>,

    on_next: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="pagination-controls">
            <button
                class="pagination-btn"
                on:click=move |_| on_prev.run(())
                disabled=move || !can_prev.get()
                title="Previous page"
            >
                {icon("chevron-left")}
                <span>"Previous"</span>
            </button>
            <span class="pagination-info">{move || label.get()}</span>
            <button
                class="pagination-btn"
                on:click=move |_| on_next.run(())
                disabled=move || !can_next.get()
                title="Next page"
            >
                <span>"Next"</span>
                {icon("chevron-right")}
            </button>
        </div>
    }
}
