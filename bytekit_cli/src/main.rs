use crate::init_config::CmdConfig;
use anyhow::Context;
use clap::{ArgAction, Parser, Subcommand};
use clap_verbosity_flag::InfoLevel;
use directories::ProjectDirs;
use std::path::PathBuf;

mod cmd;
mod config;
mod helpers;
mod init_config;

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// config file to use instead of the default location
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(flatten)]
    verbosity: clap_verbosity_flag::Verbosity<InfoLevel>,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Modify the bytekit config
    Config {
        #[command(subcommand)]
        cmd: CmdConfig,
    },
    /// Print the bytes of a file (or stdin) as hex
    Encode {
        /// Input file; reads stdin if omitted
        file: Option<PathBuf>,
        /// Insert a space after every eight hex digits
        #[arg(long, action = ArgAction::SetTrue)]
        spaces: bool,
        /// Prefix the output with 0x
        #[arg(long, action = ArgAction::SetTrue)]
        leader: bool,
    },
    /// Decode a hex string back into raw bytes
    Decode {
        /// Hex text; reads stdin if omitted
        hex: Option<String>,
        /// Write the bytes to this file instead of stdout
        #[arg(short, long, value_name = "PATH")]
        out: Option<PathBuf>,
    },
    /// Print the bytes of a file (or stdin) as a list of integers
    Bytes {
        /// Input file; reads stdin if omitted
        file: Option<PathBuf>,
    },
    /// Parse a JSON object document and print its entries
    Map {
        /// Input file; reads stdin if omitted
        file: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    // stdout carries command output only
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(cli.verbosity)
        .init();

    // Default config location: ~/.config/bytekit/config.toml
    let config_file = match cli.config {
        Some(path) => path,
        None => ProjectDirs::from("", "", "bytekit")
            .context("failed to determine config directory path")?
            .config_dir()
            .join("config.toml"),
    };

    cmd::run_command(config_file, cli.cmd)
}
