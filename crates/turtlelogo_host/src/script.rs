//! Reading and writing script files.
//!
//! A script file is just the text of the script, with no header or other structure.

use std::path::{Path, PathBuf};

use anyhow::{anyhow, bail};

pub const EXTENSION: &str = "logocode";

/// The name scripts are saved under when they don't have one.
pub const DEFAULT_NAME: &str = "turtle_path";

pub fn is_script(path: &Path) -> bool {
    path.extension().and_then(|e| e.to_str()) == Some(EXTENSION)
}

pub fn load(path: &Path) -> anyhow::Result<String> {
    if !is_script(path) {
        bail!("{} is not a .{EXTENSION} file", path.display());
    }
    std::fs::read_to_string(path).map_err(|e| anyhow!("failed to read {}: {e}", path.display()))
}

/// Turn CRLF line endings and tabs into plain newlines and spaces.
///
/// Scripts only separate words with spaces and newlines, so a script written with tabs or on
/// Windows needs this before it's run.
pub fn normalize_spacing(text: &str) -> String {
    text.replace("\r\n", "\n").replace(['\t', '\r'], " ")
}

pub fn read_stdin() -> anyhow::Result<String> {
    let mut ret = String::new();
    std::io::Read::read_to_string(&mut std::io::stdin(), &mut ret)?;
    Ok(ret)
}

/// Save a script verbatim as `<dir>/turtle_path.logocode`.
pub fn save(dir: &Path, text: &str) -> anyhow::Result<PathBuf> {
    let path = dir.join(format!("{DEFAULT_NAME}.{EXTENSION}"));
    std::fs::write(&path, text).map_err(|e| anyhow!("failed to write {}: {e}", path.display()))?;
    log::info!("saved script to {}", path.display());
    Ok(path)
}
