use crate::config::load_config;
use crate::label_dump::write_label_dump;
use crate::layout::place_labels;
use crate::parser::read_routes;
use crate::writer::{format_labels, write_labels};
use anyhow::Result;
use clap::Parser;
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(
    name = "rlabel",
    version,
    about = "Collision-free labels for polyline route files"
)]
pub struct Args {
    /// Route files: lines of whitespace-separated integer coordinates
    #[arg(required = true)]
    pub inputs: Vec<PathBuf>,

    /// Output file for a single input. Defaults to stdout.
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,

    /// Suffix appended to each input stem when deriving output paths
    #[arg(short = 's', long = "suffix")]
    pub suffix: Option<String>,

    /// Config JSON file (label extents, output suffix)
    #[arg(short = 'c', long = "configFile")]
    pub config: Option<PathBuf>,

    /// Write a JSON placement dump for a single input
    #[arg(long = "dump-json")]
    pub dump_json: Option<PathBuf>,
}

pub fn run() -> Result<()> {
    let args = Args::parse();
    let mut config = load_config(args.config.as_deref())?;
    if let Some(suffix) = args.suffix.clone() {
        config.output.suffix = suffix;
    }

    if args.inputs.len() > 1 && args.output.is_some() {
        return Err(anyhow::anyhow!(
            "--output applies to a single input file only"
        ));
    }
    if args.inputs.len() > 1 && args.dump_json.is_some() {
        return Err(anyhow::anyhow!(
            "--dump-json applies to a single input file only"
        ));
    }

    let start = Instant::now();
    let mut placed = 0usize;
    for input in &args.inputs {
        let mut routes = read_routes(input)?;
        place_labels(&mut routes, &config.placement);
        placed += routes.iter().filter(|route| route.label.is_some()).count();

        let text = format_labels(&routes);
        if args.inputs.len() == 1 {
            write_labels(&text, args.output.as_deref())?;
            if let Some(dump) = args.dump_json.as_deref() {
                write_label_dump(dump, &routes)?;
            }
        } else {
            let output = derive_output_path(input, &config.output.suffix);
            write_labels(&text, Some(&output))?;
        }
    }

    eprintln!(
        "placed {} label(s) across {} file(s) in {}ms",
        placed,
        args.inputs.len(),
        start.elapsed().as_millis()
    );
    Ok(())
}

fn derive_output_path(input: &Path, suffix: &str) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("routes");
    let parent = input.parent().unwrap_or_else(|| Path::new("."));
    parent.join(format!("{stem}{suffix}.txt"))
}
