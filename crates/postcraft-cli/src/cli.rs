use std::{net::SocketAddr, path::PathBuf};

use clap::{Parser, Subcommand};
use postcraft::model::{Model, OpenAiModel};

#[derive(Debug, Parser)]
#[command(
    name = "postcraft",
    version,
    about = "Compose Reddit and social-media content with an LLM"
)]
pub struct Cli {
    /// OpenAI API key (also read from a `.env` file).
    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true, global = true)]
    pub api_key: Option<String>,

    /// Read the API key from this file instead.
    #[arg(long, global = true)]
    pub api_key_file: Option<PathBuf>,

    /// Model name, e.g. gpt-4, gpt-4o, gpt-4o-mini or any custom id.
    #[arg(long, default_value = "gpt-4", value_parser = parse_model, global = true)]
    pub model: Model,

    /// OpenAI-compatible base URL.
    #[arg(long, env = "OPENAI_BASE_URL", global = true)]
    pub base_url: Option<String>,

    /// Give up on a generation after this many seconds.
    #[arg(long, global = true)]
    pub timeout_secs: Option<u64>,

    /// Log at debug level (RUST_LOG overrides).
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Free-text prompt loop (default).
    Chat,
    /// Menu-driven Reddit post and comment generator.
    Reddit,
    /// Serve `POST /generate` and `GET /health`.
    Serve {
        #[arg(long, default_value = "127.0.0.1:5000")]
        addr: SocketAddr,
    },
}

fn parse_model(value: &str) -> Result<Model, String> {
    let value = value.trim();
    if value.is_empty() {
        return Err("model name must not be empty".into());
    }
    Ok(match value {
        "gpt-4" => OpenAiModel::Gpt4.into(),
        "gpt-4o" => OpenAiModel::Gpt4o.into(),
        "gpt-4o-mini" => OpenAiModel::Gpt4oMini.into(),
        "gpt-3.5-turbo" => OpenAiModel::Gpt35Turbo.into(),
        custom => Model::Custom(custom.to_owned()),
    })
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults_to_chat_with_gpt4() {
        let cli = Cli::try_parse_from(["postcraft"]).expect("valid args");
        assert!(cli.command.is_none());
        assert_eq!(cli.model, Model::OpenAi(OpenAiModel::Gpt4));
    }

    #[test]
    fn parses_serve_and_custom_model() {
        let cli = Cli::try_parse_from([
            "postcraft",
            "serve",
            "--addr",
            "0.0.0.0:8080",
            "--model",
            "my-finetune",
        ])
        .expect("valid args");

        assert_eq!(cli.model, Model::Custom("my-finetune".into()));
        match cli.command {
            Some(Command::Serve { addr }) => assert_eq!(addr.port(), 8080),
            other => panic!("unexpected command {other:?}"),
        }
    }
}
