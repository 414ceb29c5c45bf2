use auction_web::app::App;
use leptos::*;

fn main() {
    // Setup logging
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    log::info!("Auction web client started");

    // Mount the <App> component to the <body>
    mount_to_body(App);
}
