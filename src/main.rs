use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use replykit::{ClientConfig, OpenAiResponsesClient, ReplyClient, ResponseProvider, ScriptedResponseProvider};

mod cli;

use cli::Commands;

#[derive(Parser)]
#[command(name = "replykit")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Answer from an in-process echo provider instead of the network
    #[arg(long, global = true)]
    mock: bool,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = ClientConfig::from_env();

    if let Commands::Compose { message } = &cli.command {
        let messages = config.prompts().compose_messages(message);
        println!("{}", serde_json::to_string_pretty(&messages)?);
        return Ok(());
    }

    let provider: Arc<dyn ResponseProvider> = if cli.mock {
        info!("Using scripted echo provider");
        Arc::new(ScriptedResponseProvider::new())
    } else {
        Arc::new(OpenAiResponsesClient::from_config(&config)?)
    };
    info!("Using model {} via {}", config.model(), provider.provider_name());

    let client = ReplyClient::new(provider, &config);

    match cli.command {
        Commands::Ask {
            message,
            previous_response_id,
        } => {
            let result = client
                .get_reply(&message, previous_response_id.as_deref())
                .await;
            println!("{}", result.text());
            if let Some(id) = result.response_id() {
                println!("response_id: {id}");
            }
        }

        Commands::Chat => {
            let mut lines = BufReader::new(tokio::io::stdin()).lines();
            let mut previous: Option<String> = None;

            while let Some(line) = lines.next_line().await? {
                let message = match chat_line(&line) {
                    ChatLine::Exit => break,
                    ChatLine::Blank => continue,
                    ChatLine::Message(message) => message,
                };

                let result = client.get_reply(message, previous.as_deref()).await;
                println!("{}\n", result.text());

                // Failed turns keep the last good id.
                if let Some(id) = result.response_id() {
                    previous = Some(id.to_string());
                }
            }
        }

        Commands::Compose { .. } => {}
    }

    Ok(())
}

enum ChatLine<'a> {
    Exit,
    Blank,
    Message(&'a str),
}

/// Commands are matched on the trimmed line; messages keep their whitespace.
fn chat_line(line: &str) -> ChatLine<'_> {
    let line = line.trim_end_matches(['\r', '\n']);
    match line.trim() {
        "/exit" => ChatLine::Exit,
        "" => ChatLine::Blank,
        _ => ChatLine::Message(line),
    }
}
