use log::{info, Level};

mod components {
    pub mod embed;
}
mod config;
mod pages {
    pub mod home;
}
mod selfcheck;
mod theme;

use pages::home::Home;

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<Home>::new().render();
}
