use book_finder::configs;
use book_finder::configs::{logging, AppConfig};
use book_finder::provider::google;
use book_finder::render::RenderOptions;
use book_finder::shell::console;
use std::io;

fn main() {
    configs::load_dotenv();
    let config = configs::load_config().unwrap_or_else(|err| {
        eprintln!("{}", err);
        AppConfig::default()
    });
    let _guard = logging::init(config.logger().as_ref(), logging::Frontend::Console).unwrap_or_else(|err| {
        eprintln!("{}", err);
        None
    });

    let client = match google::Client::with_config(config.search()) {
        Ok(client) => client,
        Err(err) => {
            tracing::warn!(error = %err, "Cannot create book search client");
            eprintln!("\n Network Error: {}", err);
            return;
        }
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut input = stdin.lock();
    let mut out = stdout.lock();

    let options = RenderOptions::console_with_config(config.render());
    let run = console::clear_screen(&mut out)
        .and_then(|_| console::run(&mut input, &mut out, &client, &options));

    if let Err(err) = run {
        tracing::error!(error = %err, "Console closed unexpectedly");
    }
}
