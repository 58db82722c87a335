use app_catalog::AppCategory;
use leptos::*;

use super::{activate_app, use_desktop_runtime};

#[component]
pub(super) fn LauncherOverlay() -> impl IntoView {
    let runtime = use_desktop_runtime();

    view! {
        <div
            id="desktop-launcher-menu"
            class="launcher-overlay"
            role="menu"
            aria-label="Application launcher"
            on:mousedown=move |ev| ev.stop_propagation()
        >
            {AppCategory::ordered()
                .into_iter()
                .filter(|category| !app_catalog::apps_in_category(*category).is_empty())
                .map(|category| {
                    view! {
                        <section class="launcher-category">
                            <h3>{category.label()}</h3>
                            <div class="launcher-grid">
                                {app_catalog::apps_in_category(category)
                                    .into_iter()
                                    .map(|app| {
                                        view! {
                                            <button
                                                class="launcher-entry"
                                                role="menuitem"
                                                on:click=move |_| activate_app(runtime, &app)
                                            >
                                                <span class="launcher-entry-icon" aria-hidden="true">
                                                    {app.icon}
                                                </span>
                                                <span class="launcher-entry-name">{app.name}</span>
                                                <span class="launcher-entry-desc">{app.description}</span>
                                            </button>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </section>
                    }
                })
                .collect_view()}
        </div>
    }
}
