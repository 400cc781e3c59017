use super::*;

#[component]
/// Slide-out side panel. Rendered hidden; the layout runtime removes the slide-out class.
pub fn SidePanel(
    side: PanelSide,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let class = format!(
        "{} {}",
        merge_layout_class("side-panel", layout_class),
        side.hidden_class()
    );

    view! {
        <aside
            id=id
            class=class
            data-ui-primitive="true"
            data-ui-kind="side-panel"
            data-ui-side=side.token()
        >
            {children()}
        </aside>
    }
}

#[component]
/// Dimming overlay that captures clicks outside an open panel.
pub fn Overlay(
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
) -> impl IntoView {
    view! {
        <div
            id=id
            class=merge_layout_class("overlay", layout_class)
            style="display: none;"
            aria-hidden="true"
            data-ui-primitive="true"
            data-ui-kind="overlay"
            on:click=forward_click(on_click)
        ></div>
    }
}
