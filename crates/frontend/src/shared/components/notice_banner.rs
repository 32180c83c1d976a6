use crate::shared::icons::icon;
use leptos::prelude::*;

/// Non-blocking warning strip shown above content that is still rendered.
#[component]
pub fn NoticeBanner(
    #[prop(into)]
    title: String,
    /// Hidden while `None`
    #[prop(into)]
    message: Signal<Option<String>>,
) -> impl IntoView {
    move || {
        let title = title.clone();
        message.get().map(|msg| {
            view! {
                <div class="alert alert--warning" role="status">
                    {icon("alert-triangle")}
                    <div class="alert__body">
                        <div class="alert__title">{title}</div>
                        <div class="alert__text">{msg}</div>
                    </div>
                </div>
            }
        })
    }
}
