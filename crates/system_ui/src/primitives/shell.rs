use super::*;

#[component]
/// Root layout container hosting the overlay, navigation bar, panels, content, and footer.
pub fn LayoutRoot(
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            id=id
            class=merge_layout_class("layout", layout_class)
            data-ui-primitive="true"
            data-ui-kind="layout-root"
        >
            {children()}
        </div>
    }
}

#[component]
/// Fixed top navigation bar.
pub fn NavigationBar(
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <nav
            id=id
            class=merge_layout_class("navbar nav-fixed", layout_class)
            data-ui-primitive="true"
            data-ui-kind="navigation-bar"
        >
            {children()}
        </nav>
    }
}

#[component]
/// Navigation-bar button that toggles the left panel.
pub fn MenuToggle(
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
) -> impl IntoView {
    view! {
        <button
            type="button"
            id=id
            class=merge_layout_class("menu-toggle bars", layout_class)
            aria-label=aria_label.unwrap_or_else(|| "Toggle navigation".to_string())
            data-ui-primitive="true"
            data-ui-kind="menu-toggle"
            on:click=forward_click(on_click)
        >
            <span class="menu-toggle-bar" aria-hidden="true"></span>
        </button>
    }
}

#[component]
/// Application title text inside the navigation bar.
pub fn AppTitle(
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] title: String,
) -> impl IntoView {
    view! {
        <span id=id class="navbar-title" data-ui-primitive="true" data-ui-kind="app-title">
            {title}
        </span>
    }
}

#[component]
/// Right-aligned action items in the navigation bar.
pub fn ActionBar(
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <ul
            class=merge_layout_class("navbar-actions", layout_class)
            data-ui-primitive="true"
            data-ui-kind="action-bar"
        >
            {children()}
        </ul>
    }
}

#[component]
/// Page footer; the `fixed` class is toggled by the layout runtime.
pub fn Footer(
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <footer
            id=id
            class=merge_layout_class("footer", layout_class)
            style="display: none;"
            data-ui-primitive="true"
            data-ui-kind="footer"
        >
            {children()}
        </footer>
    }
}
