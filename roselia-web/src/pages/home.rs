use crate::api;
use crate::controller::PageController;
use roselia_common::{SiteConfig, SongColumns};
use roselia_ui::stores::{PageUiState, PageUiStateStoreExt};
use roselia_ui::{
    AlbumCoverView, GalleryView, LoadingSpinner, PlaceholderMessage, SectionLoad, SectionView,
    SongListView, VideoPlayerView,
};
use dioxus::prelude::*;

#[component]
pub fn Home() -> Element {
    let config: SiteConfig = use_context();

    // The three manifests load concurrently and render independently
    let songs_config = config.clone();
    let songs = use_resource(move || {
        let config = songs_config.clone();
        async move { api::fetch_songs(&config).await.map_err(|e| e.to_string()) }
    });
    let gallery_config = config.clone();
    let gallery = use_resource(move || {
        let config = gallery_config.clone();
        async move { api::fetch_gallery(&config).await.map_err(|e| e.to_string()) }
    });
    let album_config = config.clone();
    let album = use_resource(move || {
        let config = album_config.clone();
        async move { api::fetch_album(&config).await.map_err(|e| e.to_string()) }
    });

    let songs = SectionLoad::from_result(songs.read().as_ref());
    let gallery = SectionLoad::from_result(gallery.read().as_ref());
    let album = SectionLoad::from_result(album.read().as_ref());

    rsx! {
        for section in config.sections.iter() {
            {match section.id.as_str() {
                "home" => rsx! {
                    SectionView { key: "home", id: "home",
                        div { class: "hero",
                            h1 { class: "hero-title", "{config.site_title}" }
                        }
                    }
                },
                "about" => rsx! {
                    SectionView { key: "about", id: "about", title: section.label.clone(),
                        p { class: "about-text",
                            "Songs, videos and photos collected by fans."
                        }
                    }
                },
                "songs" => rsx! {
                    SectionView { key: "songs", id: "songs", title: section.label.clone(),
                        SongsSection { load: songs.clone() }
                    }
                },
                "gallery" => rsx! {
                    SectionView { key: "gallery", id: "gallery", title: section.label.clone(),
                        GallerySection { load: gallery.clone() }
                    }
                },
                "album" => rsx! {
                    SectionView { key: "album", id: "album", title: section.label.clone(),
                        AlbumSection { load: album.clone() }
                    }
                },
                _ => rsx! {},
            }}
        }
    }
}

#[component]
fn SongsSection(load: SectionLoad<SongColumns>) -> Element {
    let page: Store<PageUiState> = use_context();
    let controller: PageController = use_context();

    let songs = match load {
        SectionLoad::Loading => return rsx! { LoadingSpinner {} },
        SectionLoad::Failed(e) => {
            return rsx! {
                PlaceholderMessage { message: format!("Failed to load the song list: {e}") }
            };
        }
        SectionLoad::Loaded(songs) => songs,
    };

    let player = page.player().read().clone();
    let embed_url = player.embed_url();
    let lookup = songs.clone();

    rsx! {
        SongListView {
            songs,
            player,
            rejected_song: *page.rejected_song().read(),
            on_song_select: move |id| {
                let url = lookup
                    .get(id)
                    .and_then(|entry| entry.video_url.clone())
                    .unwrap_or_default();
                controller.select_song(id, &url);
            },
        }
        VideoPlayerView { embed_url, on_close: move |_| controller.close_player() }
    }
}

#[component]
fn GallerySection(load: SectionLoad<Vec<String>>) -> Element {
    let config: SiteConfig = use_context();
    let controller: PageController = use_context();

    match load {
        SectionLoad::Loading => rsx! {
            LoadingSpinner {}
        },
        SectionLoad::Failed(e) => rsx! {
            PlaceholderMessage { message: format!("Failed to load the gallery: {e}") }
        },
        SectionLoad::Loaded(images) => rsx! {
            div { id: "gallery-container",
                GalleryView {
                    images,
                    fallback: config.gallery_fallback(),
                    on_image_click: move |path| controller.open_image(path),
                }
            }
        },
    }
}

#[component]
fn AlbumSection(load: SectionLoad<Option<String>>) -> Element {
    let config: SiteConfig = use_context();

    match load {
        SectionLoad::Loading => rsx! {
            LoadingSpinner {}
        },
        SectionLoad::Failed(e) => rsx! {
            PlaceholderMessage { message: format!("Failed to load the album image: {e}") }
        },
        SectionLoad::Loaded(None) => rsx! {},
        SectionLoad::Loaded(Some(path)) => rsx! {
            div { id: "album-container",
                AlbumCoverView { path, fallback: config.album_fallback() }
            }
        },
    }
}
