use crate::controller::PageController;
use crate::Route;
use roselia_common::SiteConfig;
use roselia_ui::stores::{PageUiState, PageUiStateStoreExt};
use roselia_ui::wasm_utils::{keyboard_key, EventListener};
use roselia_ui::{AppLayoutView, GalleryModalView, NavItem, SiteHeaderView};
use dioxus::prelude::*;
use std::rc::Rc;

/// Window/document listeners that live as long as the layout
struct PageListeners {
    _scroll: Option<EventListener>,
    _keydown: Option<EventListener>,
}

#[component]
pub fn AppLayout() -> Element {
    let config: SiteConfig = use_context();
    let page = use_store(PageUiState::default);
    use_context_provider(|| page);
    let controller = use_context_provider(|| PageController::new(page, config.scroll_delay_ms));

    // Dropped with the layout, which removes both listeners
    let listener_config = config.clone();
    let _listeners = use_hook(move || {
        let tracker = listener_config.scroll_tracker();
        let section_ids: Vec<String> = listener_config
            .sections
            .iter()
            .map(|s| s.id.clone())
            .collect();

        let scroll = EventListener::on_window("scroll", move |_| {
            controller.on_scroll(&tracker, &section_ids);
        });
        let keydown = EventListener::on_document("keydown", move |e| {
            if keyboard_key(&e).as_deref() == Some("Escape") {
                controller.on_escape();
            }
        });

        Rc::new(PageListeners {
            _scroll: scroll,
            _keydown: keydown,
        })
    });

    let active_section = page.active_section().read().clone();
    let nav_items: Vec<NavItem> = config
        .sections
        .iter()
        .map(|s| NavItem {
            id: s.id.clone(),
            label: s.label.clone(),
            is_active: active_section.as_deref() == Some(s.id.as_str()),
        })
        .collect();

    rsx! {
        AppLayoutView {
            header: rsx! {
                SiteHeaderView {
                    title: config.site_title.clone(),
                    nav_items,
                    compact: *page.compact_header().read(),
                }
            },
            extra: rsx! {
                GalleryModalView {
                    state: page.modal().read().clone(),
                    on_click: move |click| controller.modal_click(click),
                }
            },
            Outlet::<Route> {}
        }
    }
}
