//! Gallery view - horizontally scrolling strip of images
//!
//! Each image handles its own load failure, so one broken path never takes
//! down the rest of the gallery.

use crate::components::icons::ImageIcon;
use dioxus::prelude::*;
use roselia_common::ImageFallback;

/// Gallery strip (pure, props-based)
#[component]
pub fn GalleryView(
    images: Vec<String>,
    /// What a broken image turns into
    fallback: ImageFallback,
    /// Alt text prefix, numbered per image
    #[props(default = "Roselia Image".to_string())]
    alt_prefix: String,
    on_image_click: EventHandler<String>,
) -> Element {
    if images.is_empty() {
        return rsx! {
            div { class: "gallery-loading",
                ImageIcon { class: "icon-lg" }
                "No images found"
            }
        };
    }

    rsx! {
        div { class: "gallery-scroll-wrapper",
            for (idx , path) in images.iter().enumerate() {
                GalleryItem {
                    key: "{idx}",
                    path: path.clone(),
                    alt: format!("{} {}", alt_prefix, idx + 1),
                    fallback: fallback.clone(),
                    on_click: on_image_click,
                }
            }
        }
    }
}

#[component]
fn GalleryItem(
    path: String,
    alt: String,
    fallback: ImageFallback,
    on_click: EventHandler<String>,
) -> Element {
    let mut failed = use_signal(|| false);

    let (src, alt) = match (failed(), &fallback) {
        (false, _) => (path.clone(), alt),
        (true, ImageFallback::Hide) => return rsx! {},
        (true, ImageFallback::Replace { src, alt }) => (src.clone(), alt.clone()),
    };

    rsx! {
        div {
            class: "gallery-item",
            onclick: {
                let path = path.clone();
                move |_| on_click.call(path.clone())
            },
            img {
                src: "{src}",
                alt: "{alt}",
                loading: "lazy",
                onerror: move |_| {
                    if !failed() {
                        tracing::warn!("Gallery image failed to load: {}", path);
                        failed.set(true);
                    }
                },
            }
        }
    }
}

/// Single image with a fallback, used for the album cover
#[component]
pub fn AlbumCoverView(path: String, fallback: ImageFallback) -> Element {
    let mut failed = use_signal(|| false);

    let (src, alt) = match (failed(), &fallback) {
        (false, _) => (path.clone(), "Roselia Album".to_string()),
        (true, ImageFallback::Hide) => return rsx! {},
        (true, ImageFallback::Replace { src, alt }) => (src.clone(), alt.clone()),
    };

    rsx! {
        img {
            class: "album-cover",
            src: "{src}",
            alt: "{alt}",
            onerror: move |_| {
                if !failed() {
                    tracing::warn!("Album image failed to load: {}", path);
                    failed.set(true);
                }
            },
        }
    }
}
