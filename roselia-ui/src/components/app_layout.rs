//! Page layout view component
//!
//! Provides the overall page structure with slots for the header, the
//! page sections, and overlays.

use dioxus::prelude::*;

/// Page layout view (pure, props-based)
#[component]
pub fn AppLayoutView(
    /// Page sections
    children: Element,
    /// Optional header at the top
    #[props(default)]
    header: Option<Element>,
    /// Optional overlays (lightbox, etc.)
    #[props(default)]
    extra: Option<Element>,
) -> Element {
    rsx! {
        div { class: "page",
            if let Some(h) = header {
                {h}
            }
            main { class: "page-content", {children} }
            if let Some(ex) = extra {
                {ex}
            }
        }
    }
}

/// A page section; its id is what the navigation links and scroll tracking refer to
#[component]
pub fn SectionView(
    id: String,
    #[props(default)] title: Option<String>,
    children: Element,
) -> Element {
    rsx! {
        div { id: "{id}", class: "page-section",
            if let Some(title) = title {
                h2 { class: "section-title", "{title}" }
            }
            {children}
        }
    }
}
