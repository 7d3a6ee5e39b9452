use anyhow::Result;
use clap::{Parser, Subcommand};

pub mod auth;
pub mod serve;

#[derive(Subcommand)]
enum Command {
    /// Run the API server
    Serve {
        /// Set the server host address
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Set the server port
        #[arg(long, default_value = "5000")]
        port: String,
    },
    /// Print the provider consent URL
    AuthUrl {},
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

pub async fn run() -> Result<()> {
    // A missing .env file is fine, the environment may be set already
    dotenvy::dotenv().ok();

    let args = Cli::parse();

    // Handle each sub command
    match args.command {
        Some(Command::Serve { host, port }) => {
            serve::run(host, port).await?;
        }
        Some(Command::AuthUrl {}) => {
            auth::run()?;
        }
        None => {}
    }

    Ok(())
}
