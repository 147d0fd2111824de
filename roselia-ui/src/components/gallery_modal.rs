//! Gallery lightbox view component

use crate::components::icons::XIcon;
use dioxus::prelude::*;
use roselia_common::{ModalClick, ModalState};

/// Full-screen preview of one gallery image.
///
/// Every click is reported with where it landed; the caller feeds it to
/// [`ModalState::click`], which decides whether the lightbox closes.
#[component]
pub fn GalleryModalView(state: ModalState, on_click: EventHandler<ModalClick>) -> Element {
    let Some(image) = state.current_image() else {
        return rsx! {
            div { id: "galleryModal", class: "gallery-modal" }
        };
    };

    rsx! {
        div {
            id: "galleryModal",
            class: "gallery-modal active",
            onclick: move |_| on_click.call(ModalClick::Backdrop),

            button {
                class: "close-modal",
                aria_label: "Close",
                onclick: move |e| {
                    e.stop_propagation();
                    on_click.call(ModalClick::CloseButton);
                },
                XIcon { class: "icon" }
            }

            img {
                id: "galleryModalImage",
                class: "modal-content",
                src: "{image}",
                alt: "{image}",
                onclick: move |e| {
                    e.stop_propagation();
                    on_click.call(ModalClick::Content);
                },
            }
        }
    }
}
