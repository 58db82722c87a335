//! Static application catalog consumed by the launcher, taskbar, and desktop.

use desktop_core::{ApplicationId, OpenWindowRequest, WindowRect};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Launcher grouping for catalog entries.
pub enum AppCategory {
    Productivity,
    Education,
    Utility,
    System,
    Internet,
}

impl AppCategory {
    /// Display label for launcher section headers.
    pub fn label(self) -> &'static str {
        match self {
            Self::Productivity => "Productivity",
            Self::Education => "Education",
            Self::Utility => "Utility",
            Self::System => "System",
            Self::Internet => "Internet",
        }
    }

    /// Launcher section order, most-used groups first.
    pub fn ordered() -> [AppCategory; 5] {
        [
            Self::Productivity,
            Self::Education,
            Self::Utility,
            Self::Internet,
            Self::System,
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// One launchable application descriptor.
pub struct AppDescriptor {
    pub id: &'static str,
    pub name: &'static str,
    pub icon: &'static str,
    pub category: AppCategory,
    pub description: &'static str,
    pub show_on_desktop: bool,
}

impl AppDescriptor {
    /// Returns the catalog key as a typed application id.
    pub fn application_id(&self) -> ApplicationId {
        ApplicationId::trusted(self.id)
    }

    /// Builds the default open request for this application.
    pub fn open_request(&self) -> OpenWindowRequest {
        let mut request = OpenWindowRequest::new(self.application_id(), self.name, self.icon);
        if self.id == TIPS_APP_ID {
            // The tip calculator is a small utility surface, not a directory.
            request.rect = Some(WindowRect {
                x: 160,
                y: 120,
                w: 420,
                h: 360,
            });
        }
        request
    }
}

/// Catalog key of the tip calculator utility.
pub const TIPS_APP_ID: &str = "tips";

const CATALOG: [AppDescriptor; 12] = [
    AppDescriptor {
        id: "jobs",
        name: "Job Hunter",
        icon: "\u{1f4bc}",
        category: AppCategory::Productivity,
        description: "AI-powered job search & applications",
        show_on_desktop: true,
    },
    AppDescriptor {
        id: "finance",
        name: "Finance Manager",
        icon: "\u{1f4b0}",
        category: AppCategory::Productivity,
        description: "Personal finance & investment tools",
        show_on_desktop: true,
    },
    AppDescriptor {
        id: "tasks",
        name: "Task Planner",
        icon: "\u{1f4cb}",
        category: AppCategory::Productivity,
        description: "Project management & productivity",
        show_on_desktop: false,
    },
    AppDescriptor {
        id: "learning",
        name: "Learning Hub",
        icon: "\u{1f4da}",
        category: AppCategory::Education,
        description: "Online courses & skill development",
        show_on_desktop: true,
    },
    AppDescriptor {
        id: "workspace",
        name: "Remote Workspace",
        icon: "\u{1f3e2}",
        category: AppCategory::Productivity,
        description: "Coworking & virtual office tools",
        show_on_desktop: false,
    },
    AppDescriptor {
        id: "career",
        name: "Career Tools",
        icon: "\u{1f4ca}",
        category: AppCategory::Productivity,
        description: "Resume builders & interview prep",
        show_on_desktop: false,
    },
    AppDescriptor {
        id: "relocation",
        name: "Relocation Helper",
        icon: "\u{1f3e0}",
        category: AppCategory::Utility,
        description: "Cross-country migration tools",
        show_on_desktop: false,
    },
    AppDescriptor {
        id: "service-jobs",
        name: "Service Jobs Hub",
        icon: "\u{1f37d}\u{fe0f}",
        category: AppCategory::Productivity,
        description: "Restaurant & hospitality jobs",
        show_on_desktop: false,
    },
    AppDescriptor {
        id: TIPS_APP_ID,
        name: "Tip Calculator",
        icon: "\u{1f9ee}",
        category: AppCategory::Utility,
        description: "Quick bill & tip math",
        show_on_desktop: true,
    },
    AppDescriptor {
        id: "network",
        name: "Network Tools",
        icon: "\u{1f310}",
        category: AppCategory::System,
        description: "Network analysis & diagnostics",
        show_on_desktop: false,
    },
    AppDescriptor {
        id: "browser",
        name: "Web Browser",
        icon: "\u{1f30d}",
        category: AppCategory::Internet,
        description: "Internet browsing",
        show_on_desktop: false,
    },
    AppDescriptor {
        id: "settings",
        name: "System Settings",
        icon: "\u{2699}\u{fe0f}",
        category: AppCategory::System,
        description: "System configuration",
        show_on_desktop: false,
    },
];

/// The full static catalog in declaration order.
pub fn catalog() -> &'static [AppDescriptor] {
    &CATALOG
}

/// Catalog entries rendered as desktop icons.
pub fn desktop_icon_apps() -> Vec<AppDescriptor> {
    catalog()
        .iter()
        .copied()
        .filter(|entry| entry.show_on_desktop)
        .collect()
}

/// Catalog entries for one launcher category, in declaration order.
pub fn apps_in_category(category: AppCategory) -> Vec<AppDescriptor> {
    catalog()
        .iter()
        .copied()
        .filter(|entry| entry.category == category)
        .collect()
}

/// Looks up a descriptor by application id.
pub fn descriptor(app_id: &ApplicationId) -> Option<&'static AppDescriptor> {
    catalog().iter().find(|entry| entry.id == app_id.as_str())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn catalog_ids_are_unique_and_valid() {
        for entry in catalog() {
            assert!(
                ApplicationId::new(entry.id).is_ok(),
                "invalid catalog id `{}`",
                entry.id
            );
            let occurrences = catalog().iter().filter(|other| other.id == entry.id).count();
            assert_eq!(occurrences, 1, "duplicate catalog id `{}`", entry.id);
        }
    }

    #[test]
    fn every_category_section_is_covered_by_the_ordering() {
        let total: usize = AppCategory::ordered()
            .into_iter()
            .map(|category| apps_in_category(category).len())
            .sum();
        assert_eq!(total, catalog().len());
    }

    #[test]
    fn descriptor_lookup_round_trips_through_application_id() {
        let jobs = descriptor(&ApplicationId::trusted("jobs")).expect("jobs entry");
        assert_eq!(jobs.name, "Job Hunter");
        assert!(descriptor(&ApplicationId::trusted("missing")).is_none());
    }
}
