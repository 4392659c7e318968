use log::{error, info};

mod banner;
mod config;
mod contact;
mod controller;
mod dom;
mod error;
mod menu;
mod scroll;
mod storage;
mod theme;
mod wiring;

#[cfg(test)]
mod testing;

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting page behavior");
    if let Err(err) = wiring::start() {
        error!("failed to wire page behavior: {:?}", err);
    }
}
