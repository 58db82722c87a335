use desktop_shell::{DesktopProvider, DesktopShell};
use leptos::*;
use leptos_meta::*;

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Nomad Desk" />
        <Meta
            name="description"
            content="A desktop-style directory of remote work, finance, and relocation tools."
        />

        <main class="site-root">
            <DesktopEntry />
        </main>
    }
}

#[component]
pub fn DesktopEntry() -> impl IntoView {
    view! {
        <DesktopProvider>
            <DesktopShell />
        </DesktopProvider>
    }
}
