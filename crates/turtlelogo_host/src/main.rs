use std::path::PathBuf;

use anyhow::anyhow;
use clap::Parser;
use turtlelogo::Options;
use turtlelogo_host::{demos, render, script, write_snapshots, Config};

/// Draw a turtle script as svg.
#[derive(Parser, Debug)]
struct Args {
    /// The script to draw, or `-` to read it from stdin. With no script and no `--demo`, one of
    /// the built-in examples is picked at random.
    input: Option<PathBuf>,

    /// Draw one of the built-in examples instead.
    #[clap(long, conflicts_with = "input")]
    demo: Option<String>,

    #[clap(long)]
    list_demos: bool,

    /// Where to write the final drawing. Defaults to `<out-dir>/<script name>.svg`.
    #[clap(short, long)]
    output: Option<PathBuf>,

    /// Where to put the drawings requested by `save`.
    #[clap(long, default_value = ".")]
    out_dir: PathBuf,

    /// Treat tabs and CRLF line endings in the script as ordinary spaces and newlines.
    #[clap(long)]
    loose_spacing: bool,

    /// Also save the script into the output directory as `turtle_path.logocode`.
    #[clap(long)]
    save_script: bool,

    #[clap(long, default_value_t = 400.0)]
    width: f64,

    #[clap(long, default_value_t = 400.0)]
    height: f64,

    #[clap(long, default_value_t = 512)]
    max_depth: usize,

    /// Give up after running this many commands.
    #[clap(long)]
    max_steps: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();
    let args = Args::parse();

    if args.list_demos {
        for name in demos::names() {
            println!("{name}");
        }
        return Ok(());
    }

    let (name, source) = match (&args.demo, &args.input) {
        (Some(demo), _) => {
            let src = demos::demo(demo).ok_or_else(|| anyhow!("no demo called {demo:?}"))?;
            (demo.clone(), src.to_owned())
        }
        (None, Some(path)) if path.as_os_str() == "-" => {
            ("drawing".to_owned(), script::read_stdin()?)
        }
        (None, Some(path)) => {
            let name = path
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_else(|| "drawing".to_owned());
            (name, script::load(path)?)
        }
        (None, None) => {
            let (demo, src) = demos::random();
            log::info!("no script given, drawing the {demo} demo");
            (demo.to_owned(), src.to_owned())
        }
    };
    let source = if args.loose_spacing {
        script::normalize_spacing(&source)
    } else {
        source
    };

    std::fs::create_dir_all(&args.out_dir)?;
    if args.save_script {
        script::save(&args.out_dir, &source)?;
    }

    let config = Config {
        width: args.width,
        height: args.height,
        ..Config::default()
    };
    let options = Options {
        max_depth: args.max_depth,
        max_steps: args.max_steps,
    };

    let (canvas, report) = render(&source, &config, options);
    if !report.skipped.is_empty() {
        log::info!(
            "{} tokens skipped (run with RUST_LOG=debug to see them)",
            report.skipped.len()
        );
    }

    write_snapshots(&canvas, &args.out_dir, &config)?;
    let output = args
        .output
        .unwrap_or_else(|| args.out_dir.join(format!("{name}.svg")));
    svg::save(&output, &canvas.document())
        .map_err(|e| anyhow!("failed to write {}: {e}", output.display()))?;
    log::info!("wrote {}", output.display());

    Ok(())
}
