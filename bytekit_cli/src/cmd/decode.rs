use std::{
    fs,
    io::{self, Write},
    path::Path,
};

use anyhow::{Context, Result, bail};
use bytekit_core::hex;
use tracing::info;

use crate::helpers::{read_input, trim_line_ending};

pub fn run_decode(text: Option<String>, out: Option<&Path>) -> Result<()> {
    let text = match text {
        Some(text) => text,
        None => String::from_utf8(read_input(None)?).context("stdin is not valid utf-8")?,
    };

    let Some(data) = hex::decode(trim_line_ending(&text)) else {
        bail!("invalid hex string");
    };

    match out {
        Some(path) => {
            fs::write(path, &data).with_context(|| format!("failed to write {path:?}"))?;
            info!("wrote {} bytes to {path:?}", data.len());
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(&data)?;
            stdout.flush()?;
        }
    }
    Ok(())
}
