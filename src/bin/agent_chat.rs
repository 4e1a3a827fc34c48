use agent_relay::client::{ChatClient, ClientError};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing_subscriber::EnvFilter;

const DEFAULT_RELAY_URL: &str = "http://localhost:3000";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let relay_url = std::env::var("RELAY_URL").unwrap_or_else(|_| DEFAULT_RELAY_URL.to_string());
    let mut client = ChatClient::new(&relay_url);

    let mut stdout = tokio::io::stdout();
    let mut stderr = tokio::io::stderr();
    stdout
        .write_all(format!("Session {}\n> ", client.session_id()).as_bytes())
        .await?;
    stdout.flush().await?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match client.send(&line).await {
            Ok(reply) => {
                stdout.write_all(reply.content.as_bytes()).await?;
                stdout.write_all(b"\n").await?;
            }
            Err(ClientError::EmptyMessage) => {}
            Err(_) => {
                stderr
                    .write_all(b"Failed to generate post. Please try again.\n")
                    .await?;
            }
        }
        stdout.write_all(b"> ").await?;
        stdout.flush().await?;
    }

    Ok(())
}
