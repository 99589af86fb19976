use std::{
    fs,
    io::{self, Read},
    path::Path,
};

use anyhow::{Context, Result};

/// Reads all bytes from `path`, or from stdin when no path is given.
pub fn read_input(path: Option<&Path>) -> Result<Vec<u8>> {
    match path {
        Some(path) => fs::read(path).with_context(|| format!("failed to read {path:?}")),
        None => {
            let mut buf = Vec::new();
            io::stdin()
                .read_to_end(&mut buf)
                .context("failed to read stdin")?;
            Ok(buf)
        }
    }
}

/// Strips the line ending a shell or editor leaves after hex text.
pub fn trim_line_ending(text: &str) -> &str {
    text.trim_end_matches(['\n', '\r'])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trim_line_ending() {
        assert_eq!(trim_line_ending("dead beef\n"), "dead beef");
        assert_eq!(trim_line_ending("dead beef\r\n"), "dead beef");
        assert_eq!(trim_line_ending("dead beef "), "dead beef ");
    }

    #[test]
    fn test_read_input_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("in.bin");
        fs::write(&path, [1u8, 2, 3]).unwrap();
        assert_eq!(read_input(Some(&path)).unwrap(), vec![1, 2, 3]);
    }
}
