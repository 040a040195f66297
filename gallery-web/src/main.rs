//! gallery - Lorem Picsum photo gallery for the browser

fn main() {
    dioxus::logger::init(tracing::Level::INFO).expect("Failed to initialize logger");
    dioxus::launch(gallery_web::App);
}
