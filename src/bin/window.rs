use book_finder::configs;
use book_finder::configs::{logging, AppConfig};
use book_finder::provider::{google, thumbnail};
use book_finder::render::RenderOptions;
use book_finder::shell::window::{view, WindowState};
use std::sync::Arc;

fn main() -> eframe::Result<()> {
    configs::load_dotenv();
    let config = configs::load_config().unwrap_or_else(|err| {
        eprintln!("{}", err);
        AppConfig::default()
    });
    let _guard = logging::init(config.logger().as_ref(), logging::Frontend::Window).unwrap_or_else(|err| {
        eprintln!("{}", err);
        None
    });

    let client = match google::Client::with_config(config.search()) {
        Ok(client) => client,
        Err(err) => {
            tracing::error!(error = %err, "Cannot create book search client");
            eprintln!("Network Error: {}", err);
            return Ok(());
        }
    };
    let fetcher = match thumbnail::Fetcher::with_config(config.search()) {
        Ok(fetcher) => fetcher,
        Err(err) => {
            tracing::error!(error = %err, "Cannot create thumbnail client");
            eprintln!("Network Error: {}", err);
            return Ok(());
        }
    };

    let state = WindowState::new(
        Arc::new(client),
        Arc::new(fetcher),
        RenderOptions::window_with_config(config.render()),
    );

    view::run(state)
}
