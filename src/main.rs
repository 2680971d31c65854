use std::net::TcpListener;

use anyhow::Context;
use env_logger::Env;
use probe::{
    configuration::get_configuration,
    services::{Scanner, SearchFetcher, SnippetExtractor},
    startup::run,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let configuration = get_configuration().context("Failed to read configuration")?;

    let fetcher =
        SearchFetcher::new(&configuration.search).context("Failed to build the search client")?;
    let scanner = Scanner::new(fetcher, SnippetExtractor::google());

    let address = format!(
        "{}:{}",
        configuration.application.host, configuration.application.port
    );
    let listener = TcpListener::bind(&address)
        .with_context(|| format!("Failed to bind to {}", address))?;

    run(listener, scanner, configuration)?.await?;

    Ok(())
}
