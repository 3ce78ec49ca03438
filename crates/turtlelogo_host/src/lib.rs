use std::path::{Path, PathBuf};

use anyhow::anyhow;
use turtlelogo::{Commands, Options, Program, Report};

pub mod canvas;
pub mod demos;
pub mod script;

pub use canvas::Canvas;

#[derive(Debug, Clone)]
pub struct Config {
    pub width: f64,
    pub height: f64,
    // Colour words, as a script would write them for `bckgr`.
    pub background: String,
    pub stroke: String,
    pub stroke_width: f64,
    /// File name (without extension) for drawings requested by `save`.
    pub save_name: String,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            width: 400.0,
            height: 400.0,
            background: "0".to_owned(),
            stroke: "white".to_owned(),
            stroke_width: 2.0,
            save_name: "turtled_image".to_owned(),
        }
    }
}

/// Run a script on a fresh canvas.
///
/// Nothing carries over between calls, so re-rendering an edited script always starts from a
/// blank drawing with the turtle at home.
pub fn render(source: &str, config: &Config, options: Options) -> (Canvas, Report) {
    let mut canvas = Canvas::new(config.clone());
    let prog = Program::parse(source);
    log::debug!("script has {} tokens", prog.tokens().len());

    let report = prog.exec_with(&mut canvas, Commands::standard(), options);
    for skip in &report.skipped {
        log::debug!("skipped: {skip}");
    }
    if !report.procedures.is_empty() {
        log::debug!("procedures: {}", report.procedures.join(", "));
    }
    if report.truncated {
        log::warn!("script stopped early: step limit reached");
    }
    (canvas, report)
}

/// Where the `n`th `save` of a run goes.
pub fn snapshot_path(dir: &Path, config: &Config, n: usize) -> PathBuf {
    if n == 0 {
        dir.join(format!("{}.svg", config.save_name))
    } else {
        dir.join(format!("{}_{n}.svg", config.save_name))
    }
}

/// Write out every drawing that the script asked to `save`. Returns the paths written.
pub fn write_snapshots(
    canvas: &Canvas,
    dir: &Path,
    config: &Config,
) -> anyhow::Result<Vec<PathBuf>> {
    let mut ret = Vec::new();
    for (n, doc) in canvas.saved().iter().enumerate() {
        let path = snapshot_path(dir, config, n);
        svg::save(&path, doc).map_err(|e| anyhow!("failed to write {}: {e}", path.display()))?;
        log::info!("saved {}", path.display());
        ret.push(path);
    }
    Ok(ret)
}
