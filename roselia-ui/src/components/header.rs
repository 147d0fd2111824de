//! Site header view component
//!
//! Pure, props-based header with the site title and section navigation.

use dioxus::prelude::*;

/// Navigation link for the header
#[derive(Clone, PartialEq)]
pub struct NavItem {
    /// Id of the page section the link scrolls to
    pub id: String,
    pub label: String,
    pub is_active: bool,
}

/// Site header (pure, props-based)
#[component]
pub fn SiteHeaderView(
    title: String,
    nav_items: Vec<NavItem>,
    /// Compact style once the page has scrolled past the threshold
    compact: bool,
) -> Element {
    rsx! {
        header { class: if compact { "site-header scrolled" } else { "site-header" },
            div { class: "header-inner",
                a { class: "site-title", href: "#home", "{title}" }
                nav { class: "site-nav",
                    for item in nav_items.iter() {
                        a {
                            key: "{item.id}",
                            href: "#{item.id}",
                            class: if item.is_active { "nav-link active" } else { "nav-link" },
                            "{item.label}"
                        }
                    }
                }
            }
        }
    }
}
