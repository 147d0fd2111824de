//! Roselia fan site - web entry point

fn main() {
    dioxus::launch(roselia_web::App);
}
