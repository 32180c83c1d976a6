use leptos::prelude::*;

/// Title row with a live subtitle and an action slot on the right
#[component]
pub fn PageHeader(
    #[prop(into)]
    title: String,

    #[prop(optional, into)]
    subtitle: Signal<Option<String>>,

    /// When set, the subtitle is rendered as an error line
    #[prop(optional, into)]
    subtitle_is_error: Signal<bool>,

    children: Children,
) -> impl IntoView {
    let subtitle_class = move || {
        if subtitle_is_error.get() {
            "page__subtitle page__subtitle--error"
        } else {
            "page__subtitle"
        }
    };

    view! {
        <div class="page__header">
            <div class="page__header-left">
                <h1 class="page__title">{title}</h1>
                {move || subtitle.get().map(|s| view! {
                    <div class=subtitle_class>{s}</div>
                })}
            </div>
            <div class="page__header-right">
                {children()}
            </div>
        </div>
    }
}
