use textile_storefront::config::StorefrontConfig;
use textile_storefront::App;

fn main() {
    // Logger level comes from config; App loads the same config again for its context
    let level = StorefrontConfig::load().log_level;
    if let Err(e) = dioxus::logger::init(level) {
        eprintln!("Logger already initialised: {}", e);
    }
    tracing::info!("Starting storefront (log level {})", level);

    dioxus::launch(App);
}
