use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod init;
pub mod receive;
pub mod serve;
pub mod token;

use crate::core::AppConfig;

#[derive(Subcommand)]
enum Command {
    /// Initialize the sqlite db
    Init {
        #[arg(long, action, default_value = "false")]
        db: bool,
    },
    /// Run the API server
    Serve {
        /// Set the server host address
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Set the server port
        #[arg(long, default_value = "2222")]
        port: String,
    },
    /// Render a push message read from a JSON file or stdin
    Receive {
        #[arg(long)]
        file: Option<PathBuf>,
    },
    /// Show the stored registration token, or rotate it with --set
    Token {
        #[arg(long)]
        set: Option<String>,
    },
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

pub async fn run() -> Result<()> {
    let args = Cli::parse();
    let config = AppConfig::default();

    // Handle each sub command
    match args.command {
        Some(Command::Init { db }) => {
            init::run(db, &config.db_path).await?;
        }
        Some(Command::Serve { host, port }) => {
            serve::run(host, port, config).await?;
        }
        Some(Command::Receive { file }) => {
            receive::run(file).await?;
        }
        Some(Command::Token { set }) => {
            token::run(set, &config).await?;
        }
        None => {}
    }

    Ok(())
}
