use iced::{Application, Settings};

use whim::client::config::ClientConfig;
use whim::client::gui::app::WhimApp;

fn main() -> iced::Result {
    // load environment from .env (optional)
    let _ = dotenvy::dotenv();
    env_logger::init();

    let config = ClientConfig::from_env();
    WhimApp::run(Settings::with_flags(config))
}
