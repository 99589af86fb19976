use std::path::Path;

use anyhow::Result;
use bytekit_core::{DataExt, HexOptions};
use tracing::debug;

use crate::helpers::read_input;

pub fn run_encode(file: Option<&Path>, options: HexOptions) -> Result<()> {
    let data = read_input(file)?;
    debug!(len = data.len(), ?options, "encoding input as hex");
    println!("{}", data.to_hex_string(options));
    Ok(())
}

pub fn run_bytes(file: Option<&Path>) -> Result<()> {
    let data = read_input(file)?;
    println!("{:?}", data.bytes_array());
    Ok(())
}
