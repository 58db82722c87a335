//! Static outbound-link directories mounted inside application windows.
//!
//! Panels are pure presentation: each application id maps to a list of
//! sections of [`LinkCard`] entries rendered as external links. No state, no
//! network calls.

use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// One outbound link card.
pub struct LinkCard {
    pub icon: &'static str,
    pub title: &'static str,
    pub url: &'static str,
    pub blurb: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// A titled group of link cards within a panel.
pub struct LinkSection {
    pub heading: &'static str,
    pub cards: &'static [LinkCard],
}

macro_rules! card {
    ($icon:literal, $title:literal, $url:literal, $blurb:literal) => {
        LinkCard {
            icon: $icon,
            title: $title,
            url: $url,
            blurb: $blurb,
        }
    };
}

const JOBS_SECTIONS: [LinkSection; 3] = [
    LinkSection {
        heading: "AI-Powered Job Applications",
        cards: &[
            card!("🤖", "AI Apply", "https://aiapply.co/", "Automated job applications with AI"),
            card!("🎯", "Sonara AI", "https://sonara.ai/", "AI job hunter platform"),
            card!("💼", "Teal", "https://teal.com/", "Career growth platform"),
            card!("📋", "Huntr", "https://huntr.co/", "Job application tracker"),
            card!("🚀", "Kickresume", "https://kickresume.com/", "AI resume builder"),
            card!("🔍", "Jobscan", "https://jobscan.co/", "Resume ATS optimization"),
        ],
    },
    LinkSection {
        heading: "Remote Job Portals",
        cards: &[
            card!("🏠", "Remote.co", "https://remote.co/", "Premium remote jobs"),
            card!("💻", "We Work Remotely", "https://weworkremotely.com/", "Top remote job portal"),
            card!("📧", "Remotive", "https://remotive.io/", "Weekly job newsletter"),
            card!("👼", "AngelList", "https://angel.co/jobs", "Startup jobs"),
            card!("✈️", "Nomad Jobs", "https://nomadjobs.io/", "Location independent"),
            card!("🕐", "FlexJobs", "https://flexjobs.com/", "Flexible & remote work"),
        ],
    },
    LinkSection {
        heading: "Freelance Platforms",
        cards: &[
            card!("⬆️", "Upwork", "https://upwork.com/", "Largest freelance marketplace"),
            card!("🎨", "Fiverr", "https://fiverr.com/", "Gig-based services"),
            card!("🌍", "Freelancer", "https://freelancer.com/", "Global freelance projects"),
            card!("🧭", "Guru", "https://guru.com/", "Professional freelance network"),
            card!("🎭", "99designs", "https://99designs.com/", "Design contests & projects"),
        ],
    },
];

const SERVICE_JOBS_SECTIONS: [LinkSection; 2] = [
    LinkSection {
        heading: "Hospitality Job Boards",
        cards: &[
            card!("🍳", "Culinary Agents", "https://culinaryagents.com/", "Restaurant industry network"),
            card!("🥚", "Poached", "https://poachedjobs.com/", "Food & beverage jobs"),
            card!("🏨", "Hcareers", "https://hcareers.com/", "Hospitality careers"),
            card!("🛎️", "Hospitality Online", "https://hospitalityonline.com/", "Hotel & restaurant roles"),
            card!("🍽️", "Restaurant Jobs", "https://restaurant.jobs/", "Front & back of house"),
            card!("📆", "Harri", "https://harri.com/", "Service-industry hiring"),
        ],
    },
    LinkSection {
        heading: "Training & Tips",
        cards: &[
            card!("📜", "ServSafe", "https://servsafe.com/", "Food-handler certification"),
            card!("🏛️", "National Restaurant Association", "https://restaurant.org/", "Industry resources"),
            card!("💵", "TipOut", "https://tipout.com/", "Tip tracking & management"),
            card!("🗓️", "Schedulely", "https://schedulely.com/", "Shift scheduling"),
        ],
    },
];

const FINANCE_SECTIONS: [LinkSection; 2] = [
    LinkSection {
        heading: "Personal Finance Management",
        cards: &[
            card!("🌱", "Mint", "https://mint.intuit.com/", "Free budget tracker by Intuit"),
            card!("📊", "YNAB", "https://youneedabudget.com/", "You Need A Budget"),
            card!("💎", "Personal Capital", "https://personalcapital.com/", "Wealth management"),
            card!("🛡️", "PocketGuard", "https://pocketguard.com/", "Spending tracker"),
            card!("💵", "EveryDollar", "https://everydollar.com/", "Zero-based budget"),
            card!("📱", "Goodbudget", "https://goodbudget.com/", "Envelope method"),
        ],
    },
    LinkSection {
        heading: "Investment Platforms",
        cards: &[
            card!("🏹", "Robinhood", "https://robinhood.com/", "Commission-free trading"),
            card!("🏦", "Charles Schwab", "https://schwab.com/", "Full-service broker"),
            card!("💼", "Fidelity", "https://fidelity.com/", "Investment management"),
            card!("📊", "Vanguard", "https://vanguard.com/", "Low-cost index funds"),
        ],
    },
];

const TASKS_SECTIONS: [LinkSection; 1] = [LinkSection {
    heading: "Project Management & Productivity",
    cards: &[
        card!("📌", "Trello", "https://trello.com/", "Kanban boards"),
        card!("🗂️", "Notion", "https://notion.so/", "Docs, wikis & databases"),
        card!("✅", "Todoist", "https://todoist.com/", "Task lists & reminders"),
        card!("🎯", "Asana", "https://asana.com/", "Team project tracking"),
        card!("⏱️", "Toggl", "https://toggl.com/", "Time tracking"),
    ],
}];

const LEARNING_SECTIONS: [LinkSection; 1] = [LinkSection {
    heading: "Online Courses & Skill Development",
    cards: &[
        card!("🎓", "Coursera", "https://coursera.org/courses", "University-backed courses"),
        card!("📺", "Udemy", "https://udemy.com/", "On-demand video courses"),
        card!("🧑‍💻", "freeCodeCamp", "https://freecodecamp.org/", "Free coding curriculum"),
        card!("🧠", "Khan Academy", "https://khanacademy.org/", "Free foundational learning"),
        card!("🗣️", "Duolingo", "https://duolingo.com/", "Language practice"),
    ],
}];

const WORKSPACE_SECTIONS: [LinkSection; 1] = [LinkSection {
    heading: "Coworking & Virtual Office",
    cards: &[
        card!("🏢", "WeWork", "https://wework.com/", "Coworking spaces"),
        card!("📹", "Zoom", "https://zoom.us/", "Video meetings"),
        card!("💬", "Slack", "https://slack.com/", "Team messaging"),
        card!("🎧", "Brain.fm", "https://brain.fm/", "Focus music"),
        card!("🌧️", "Noisli", "https://noisli.com/", "Background noise mixer"),
    ],
}];

const CAREER_SECTIONS: [LinkSection; 1] = [LinkSection {
    heading: "Resume Builders & Interview Prep",
    cards: &[
        card!("🔗", "LinkedIn Jobs", "https://linkedin.com/jobs/", "Professional network"),
        card!("🚪", "Glassdoor", "https://glassdoor.com/", "Salaries & company reviews"),
        card!("🔎", "Indeed", "https://indeed.com/", "Job search aggregator"),
        card!("🎲", "Dice", "https://dice.com/", "Tech job board"),
        card!("👹", "Monster", "https://monster.com/", "General job board"),
    ],
}];

const RELOCATION_SECTIONS: [LinkSection; 1] = [LinkSection {
    heading: "Moving & Travel Planning",
    cards: &[
        card!("🗺️", "Google Maps", "https://maps.google.com/", "Route planning"),
        card!("🚗", "Roadtrippers", "https://roadtrippers.com/", "Road trip planner"),
        card!("⛽", "GasBuddy", "https://gasbuddy.com/", "Fuel price finder"),
        card!("🎪", "Make My Drive Fun", "https://makemydrivefun.com", "Scenic stops en route"),
        card!("📦", "Craigslist", "https://craigslist.org/", "Local listings"),
    ],
}];

const NETWORK_SECTIONS: [LinkSection; 1] = [LinkSection {
    heading: "Network Analysis & Diagnostics",
    cards: &[
        card!("📉", "Downdetector", "https://downdetector.com/", "Outage reports"),
        card!("🏓", "Pingdom", "https://pingdom.com/", "Uptime monitoring"),
        card!("📊", "GTmetrix", "https://gtmetrix.com/", "Page speed analysis"),
        card!("🧰", "MxToolbox", "https://mxtoolbox.com/", "DNS & mail diagnostics"),
    ],
}];

/// Returns the link sections for an application id, if a directory exists.
pub fn sections_for(app_id: &str) -> Option<&'static [LinkSection]> {
    match app_id {
        "jobs" => Some(&JOBS_SECTIONS),
        "service-jobs" => Some(&SERVICE_JOBS_SECTIONS),
        "finance" => Some(&FINANCE_SECTIONS),
        "tasks" => Some(&TASKS_SECTIONS),
        "learning" => Some(&LEARNING_SECTIONS),
        "workspace" => Some(&WORKSPACE_SECTIONS),
        "career" => Some(&CAREER_SECTIONS),
        "relocation" => Some(&RELOCATION_SECTIONS),
        "network" => Some(&NETWORK_SECTIONS),
        _ => None,
    }
}

#[component]
/// Renders a directory of outbound link cards grouped into sections.
pub fn LinkDirectory(sections: &'static [LinkSection]) -> impl IntoView {
    view! {
        <div class="application-content">
            {sections
                .iter()
                .map(|section| {
                    view! {
                        <div class="content-header">
                            <h2>{section.heading}</h2>
                        </div>
                        <div class="link-section">
                            <div class="link-grid">
                                {section
                                    .cards
                                    .iter()
                                    .map(|link_card| {
                                        view! {
                                            <a
                                                href=link_card.url
                                                target="_blank"
                                                rel="noopener noreferrer"
                                                class="app-link"
                                            >
                                                <div class="link-icon" aria-hidden="true">
                                                    {link_card.icon}
                                                </div>
                                                <div class="link-details">
                                                    <div class="link-title">{link_card.title}</div>
                                                    <div class="link-desc">{link_card.blurb}</div>
                                                </div>
                                            </a>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_card_links_out_over_https() {
        for descriptor in crate::catalog() {
            let Some(sections) = sections_for(descriptor.id) else {
                continue;
            };
            for section in sections {
                assert!(!section.cards.is_empty(), "empty section in `{}`", descriptor.id);
                for link_card in section.cards {
                    assert!(
                        link_card.url.starts_with("https://"),
                        "non-https card `{}`",
                        link_card.title
                    );
                }
            }
        }
    }

    #[test]
    fn directory_coverage_matches_the_catalog_split() {
        // Directory apps get sections; utility/placeholder apps do not.
        assert!(sections_for("jobs").is_some());
        assert!(sections_for("finance").is_some());
        assert!(sections_for(crate::TIPS_APP_ID).is_none());
        assert!(sections_for("browser").is_none());
        assert!(sections_for("settings").is_none());
    }
}
