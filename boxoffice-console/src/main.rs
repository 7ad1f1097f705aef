use std::io;
use boxoffice_console::{run, AppState, Console};
use boxoffice_store::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so they never interleave with the menu
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "boxoffice=warn,boxoffice_console=warn,boxoffice_store=warn,boxoffice_catalog=warn,boxoffice_requests=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = Config::load()?;
    tracing::info!(cinema = %config.cinema.name, movies = config.cinema.movies.len(), "starting box office");

    let mut state = AppState::new(config.cinema)?;
    let mut console = Console::new(io::stdin().lock(), io::stdout().lock());

    run(&mut state, &mut console)?;
    Ok(())
}
