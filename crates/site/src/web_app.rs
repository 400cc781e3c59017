use layout_runtime::{
    use_layout, LayoutConfig, LayoutController, LayoutHostContext, LayoutProvider, LayoutShell,
};
use leptos::*;
use leptos_meta::*;

const LAYOUT_CONFIG: &str = include_str!("../config/layout.toml");

fn build_controller() -> LayoutController {
    let config = LayoutConfig::from_toml_str(LAYOUT_CONFIG).unwrap_or_else(|err| {
        logging::warn!("layout config rejected, using defaults: {err}");
        LayoutConfig::default()
    });
    LayoutController::from_config(LayoutHostContext::default(), &config).unwrap_or_else(|err| {
        logging::warn!("layout config could not be applied: {err}");
        LayoutController::default()
    })
}

fn slot(view: impl FnOnce() -> View + 'static) -> Children {
    Box::new(move || Fragment::new(vec![view()]))
}

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Layout Shell" />
        <Meta name="description" content="Slide-out panel layout shell demo." />

        <main class="site-root">
            <LayoutEntry />
        </main>
    }
}

#[component]
pub fn LayoutEntry() -> impl IntoView {
    view! {
        <LayoutProvider controller=build_controller()>
            <LayoutShell
                left_panel=slot(|| view! { <NavigationLinks /> }.into_view())
                right_panel=slot(|| view! { <p>"Settings"</p> }.into_view())
                actions=slot(|| view! { <SettingsAction /> }.into_view())
                footer=slot(|| view! { <small>"Layout shell demo"</small> }.into_view())
            >
                <DemoContent />
            </LayoutShell>
        </LayoutProvider>
    }
}

#[component]
fn NavigationLinks() -> impl IntoView {
    view! {
        <ul class="nav-links">
            <li><a href="#inbox">"Inbox"</a></li>
            <li><a href="#archive">"Archive"</a></li>
        </ul>
    }
}

#[component]
fn SettingsAction() -> impl IntoView {
    let layout = use_layout();
    view! {
        <li>
            <button type="button" on:click=move |_| {
                layout.toggle_right_panel();
            }>
                "Settings"
            </button>
        </li>
    }
}

#[component]
fn DemoContent() -> impl IntoView {
    let layout = use_layout();
    let fix_layout = layout.clone();
    let unfix_layout = layout.clone();

    view! {
        <h1>"Content"</h1>
        <p>"Resize the window below 768px to watch the left panel float and the footer unfix."</p>
        <button type="button" on:click=move |_| {
            fix_layout.fix_left_panel();
        }>
            "Pin navigation"
        </button>
        <button type="button" on:click=move |_| {
            unfix_layout.unfix_left_panel().hide_left_panel();
        }>
            "Float navigation"
        </button>
        <button type="button" on:click=move |_| {
            layout.reset_content_scroll();
        }>
            "Back to top"
        </button>
    }
}
