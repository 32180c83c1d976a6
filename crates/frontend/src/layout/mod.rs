pub mod sidebar;
pub mod top_header;

use leptos::prelude::*;
use leptos_router::components::Outlet;

use sidebar::Sidebar;
use top_header::TopHeader;

/// Sidebar visibility, shared by the header toggle and the shell
#[derive(Clone, Copy)]
pub struct LayoutContext {
    pub left_open: RwSignal<bool>,
}

impl LayoutContext {
    pub fn new() -> Self {
        Self {
            left_open: RwSignal::new(true),
        }
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|open| *open = !*open);
    }
}

impl Default for LayoutContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Application shell for every `/dashboard/*` page.
///
/// ```text
/// +------------------------------+
/// |          TopHeader           |
/// +---------+--------------------+
/// | Sidebar |  routed page       |
/// +---------+--------------------+
/// ```
#[component]
pub fn Shell() -> impl IntoView {
    let ctx = LayoutContext::new();
    provide_context(ctx);

    view! {
        <div class="app-layout">
            <TopHeader />
            <div class="app-body">
                <div data-zone="left" class="left" class:hidden=move || !ctx.left_open.get()>
                    <Sidebar />
                </div>
                <div class="app-main">
                    <Outlet />
                </div>
            </div>
        </div>
    }
}
