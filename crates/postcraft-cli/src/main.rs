mod cli;
mod logging;
mod repl;
mod server;
#[cfg(test)]
mod test_support;

use std::{io, sync::Arc, time::Duration};

use anyhow::Context as _;
use clap::Parser as _;
use postcraft::{
    agent::ContentAgent,
    openai::{OpenAiAdapter, OpenAiAdapterBuilder},
};

use crate::{
    cli::{Cli, Command},
    repl::Session,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env is fine; the key may come from the real environment.
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    logging::init(cli.verbose);

    let agent = build_agent(&cli).context("failed to configure the generation backend")?;

    match cli.command.clone().unwrap_or(Command::Chat) {
        Command::Chat => {
            let stdin = io::stdin();
            Session::new(&agent, stdin.lock(), io::stdout())
                .run_chat()
                .await?
        }
        Command::Reddit => {
            let stdin = io::stdin();
            Session::new(&agent, stdin.lock(), io::stdout())
                .run_reddit()
                .await?
        }
        Command::Serve { addr } => server::serve(Arc::new(agent), addr).await?,
    }

    Ok(())
}

fn build_agent(cli: &Cli) -> anyhow::Result<ContentAgent<OpenAiAdapter>> {
    let mut builder = OpenAiAdapterBuilder::new();
    if let Some(api_key) = &cli.api_key {
        builder = builder.with_api_key(api_key);
    }
    if let Some(path) = &cli.api_key_file {
        builder = builder.with_api_key_file(path);
    }
    if let Some(base_url) = &cli.base_url {
        builder = builder.with_base_url(base_url);
    }

    let backend = builder.build()?;
    tracing::debug!(base_url = backend.client().base_url(), model = ?cli.model, "backend configured");

    let agent = ContentAgent::new(backend).with_model(cli.model.clone());
    Ok(match cli.timeout_secs {
        Some(secs) => agent.with_timeout(Duration::from_secs(secs)),
        None => agent,
    })
}
