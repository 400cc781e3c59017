//! Leptos composition of the layout shell.

use leptos::*;
use platform_host::LayoutNode;
use system_ui::{
    ActionBar, AppTitle, ContentPanel, ContentSection, Footer, LayoutRoot, MenuToggle,
    NavigationBar, Overlay, PanelSide, SidePanel,
};

use crate::controller::LayoutController;

fn node_id(node: LayoutNode) -> &'static str {
    node.dom_id().unwrap_or_default()
}

#[component]
/// Provides a [`LayoutController`] to descendant components.
pub fn LayoutProvider(
    /// Controller to share; a browser-backed one is created when omitted.
    #[prop(optional)]
    controller: Option<LayoutController>,
    children: Children,
) -> impl IntoView {
    provide_context(controller.unwrap_or_default());
    children().into_view()
}

/// Returns the current [`LayoutController`].
///
/// # Panics
///
/// Panics if called outside [`LayoutProvider`].
pub fn use_layout() -> LayoutController {
    use_context::<LayoutController>().expect("LayoutController not provided")
}

#[component]
/// Layout skeleton wired to the controller from [`LayoutProvider`].
///
/// The menu toggle toggles the left panel and an overlay click hides both panels. Once mounted,
/// the controller re-renders its state into the DOM and attaches; unmounting removes it.
pub fn LayoutShell(
    #[prop(optional)] left_panel: Option<Children>,
    #[prop(optional)] right_panel: Option<Children>,
    #[prop(optional)] actions: Option<Children>,
    #[prop(optional)] footer: Option<Children>,
    children: Children,
) -> impl IntoView {
    let layout = use_layout();
    let title = layout.state().title;

    let toggle_layout = layout.clone();
    let on_menu_toggle = Callback::new(move |_: ev::MouseEvent| {
        toggle_layout.toggle_left_panel();
    });
    let overlay_layout = layout.clone();
    let on_overlay_click = Callback::new(move |_: ev::MouseEvent| {
        overlay_layout.hide_panels();
    });

    let mount_layout = layout.clone();
    request_animation_frame(move || {
        mount_layout.sync_surface().show();
    });
    on_cleanup(move || {
        layout.remove();
    });

    view! {
        <LayoutRoot id=node_id(LayoutNode::Root)>
            <Overlay id=node_id(LayoutNode::Overlay) on_click=on_overlay_click />
            <NavigationBar id=node_id(LayoutNode::NavigationBar)>
                <MenuToggle id=node_id(LayoutNode::MenuToggle) on_click=on_menu_toggle />
                <AppTitle id=node_id(LayoutNode::Title) title=title />
                <ActionBar>{actions.map(|actions| actions())}</ActionBar>
            </NavigationBar>
            <SidePanel side=PanelSide::Left id=node_id(LayoutNode::LeftPanel)>
                {left_panel.map(|panel| panel())}
            </SidePanel>
            <SidePanel side=PanelSide::Right id=node_id(LayoutNode::RightPanel)>
                {right_panel.map(|panel| panel())}
            </SidePanel>
            <ContentSection id=node_id(LayoutNode::Content)>
                <ContentPanel id=node_id(LayoutNode::ContentPanel)>{children()}</ContentPanel>
            </ContentSection>
            <Footer id=node_id(LayoutNode::Footer)>{footer.map(|footer| footer())}</Footer>
        </LayoutRoot>
    }
}
