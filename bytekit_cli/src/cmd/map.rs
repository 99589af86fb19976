use std::path::Path;

use anyhow::{Context, Result};
use bytekit_core::DataExt;

use crate::helpers::read_input;

pub fn run_map(file: Option<&Path>) -> Result<()> {
    let data = read_input(file)?;
    let mapping = data
        .to_mapping()
        .context("input is not a json object document")?;

    for (key, value) in &mapping {
        println!("{key} = {value}");
    }
    Ok(())
}
