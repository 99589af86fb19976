use std::path::PathBuf;

use anyhow::Result;

use crate::config::CliConfig;

mod decode;
mod encode;
mod map;

pub use decode::run_decode;
pub use encode::{run_bytes, run_encode};
pub use map::run_map;

pub fn run_command(config_file: PathBuf, cmd: crate::Commands) -> Result<()> {
    match cmd {
        crate::Commands::Config { cmd } => cmd.run(config_file),
        crate::Commands::Encode {
            file,
            spaces,
            leader,
        } => {
            let config = CliConfig::load(&config_file)?;
            let mut options = config.hex;
            options.spaces |= spaces;
            options.leader |= leader;
            run_encode(file.as_deref(), options)
        }
        crate::Commands::Decode { hex, out } => run_decode(hex, out.as_deref()),
        crate::Commands::Bytes { file } => run_bytes(file.as_deref()),
        crate::Commands::Map { file } => run_map(file.as_deref()),
    }
}
