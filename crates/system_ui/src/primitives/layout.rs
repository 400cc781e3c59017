use super::*;

#[component]
/// Content section wrapper; receives `fit-width` / `fit-height` and footer padding.
pub fn ContentSection(
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <section
            id=id
            class=merge_layout_class("content", layout_class)
            data-ui-primitive="true"
            data-ui-kind="content-section"
        >
            {children()}
        </section>
    }
}

#[component]
/// Inner content container holding the active application view.
pub fn ContentPanel(
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            id=id
            class=merge_layout_class("content-panel", layout_class)
            data-ui-primitive="true"
            data-ui-kind="content-panel"
        >
            {children()}
        </div>
    }
}
