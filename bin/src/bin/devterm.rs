use clap::Parser;
use devterm::{Config, Renderer, Terminal};
use devterm_bin::{cli::Cli, commands, render::TextRenderer};
use std::path::Path;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Logging failures must not keep the terminal from starting.
    let _log_guard = match devterm_log::init(cli.log_file.clone()) {
        Ok(guard) => Some(guard),
        Err(err) => {
            eprintln!("Warning: logging disabled: {err}");
            None
        }
    };

    let discovered = Path::new("config.toml");
    let config = Config::load_with_overrides(
        cli.config.as_deref(),
        discovered.exists().then_some(discovered),
    )
    .unwrap_or_else(|err| {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    });

    let mut term = Terminal::new(&config);
    let mut renderer = TextRenderer::stdout();

    if cli.headless {
        renderer.draw(&term.snapshot());
        return;
    }

    if let Err(err) = commands::run(&mut term, &mut renderer).await {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}
