//! Application catalog and content-renderer registry for the desktop shell.
//!
//! The shell asks this crate two questions: what can be launched (the static
//! [`AppDescriptor`] catalog) and what goes inside an open window
//! ([`render_app`]). Ids without a registered renderer fall back to the
//! "content is being prepared" placeholder; that is the designed default for
//! catalog entries not yet wired up, not an error state.

pub mod catalog;
pub mod panels;
pub mod tips;

use desktop_core::ApplicationId;
use leptos::*;

pub use catalog::{
    apps_in_category, catalog, descriptor, desktop_icon_apps, AppCategory, AppDescriptor,
    TIPS_APP_ID,
};
pub use panels::{sections_for, LinkCard, LinkDirectory, LinkSection};
pub use tips::{tip_amount, tip_total, TipCalculator};

/// Mounts the content renderer registered for `app_id`, or the placeholder.
pub fn render_app(app_id: &ApplicationId) -> View {
    if app_id.as_str() == TIPS_APP_ID {
        return view! { <TipCalculator /> }.into_view();
    }
    match sections_for(app_id.as_str()) {
        Some(sections) => view! { <LinkDirectory sections=sections /> }.into_view(),
        None => render_placeholder(),
    }
}

/// True when `app_id` has a real renderer rather than the placeholder.
pub fn has_renderer(app_id: &ApplicationId) -> bool {
    app_id.as_str() == TIPS_APP_ID || sections_for(app_id.as_str()).is_some()
}

fn render_placeholder() -> View {
    view! {
        <div class="application-content app-placeholder">
            <div class="content-header">
                <h2>"Application Loading..."</h2>
            </div>
            <p>"Content for this application is being prepared."</p>
        </div>
    }
    .into_view()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renderer_registry_covers_directories_and_the_tip_calculator() {
        assert!(has_renderer(&ApplicationId::trusted("jobs")));
        assert!(has_renderer(&ApplicationId::trusted(TIPS_APP_ID)));
        assert!(!has_renderer(&ApplicationId::trusted("browser")));
        assert!(!has_renderer(&ApplicationId::trusted("settings")));
    }
}
