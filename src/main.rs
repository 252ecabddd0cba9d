use dev_data_portal::App;

fn main() {
    dioxus::logger::init(tracing::Level::INFO).expect("failed to initialise logger");
    tracing::info!("Starting Developer Data Portal");

    dioxus::launch(App);
}
