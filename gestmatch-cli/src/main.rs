use clap::Parser;
use gestmatch::image::annotate::{draw_rect, OVERLAY_INTENSITY};
use gestmatch::image::io::{load_gray_image, save_gray_image};
use gestmatch::{
    report_from_match, GestureMatcher, MatchParams, ScaleRange, TemplateStore,
};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

const SCHEMA_JSON: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/config.schema.json"));
const EXAMPLE_JSON: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/config.example.json"));

#[derive(Parser, Debug)]
#[command(author, version, about = "GestMatch runner (JSON config driven)")]
struct Cli {
    /// Path to the JSON configuration file.
    #[arg(short, long, value_name = "FILE", default_value = "config.json")]
    config: PathBuf,
    /// Print the JSON schema and exit.
    #[arg(long)]
    print_schema: bool,
    /// Print an example config and exit.
    #[arg(long)]
    print_example: bool,
    /// Enable tracing output for performance profiling.
    #[arg(long)]
    trace: bool,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
struct ScaleRangeJson {
    start: f32,
    end: f32,
    samples: usize,
}

impl Default for ScaleRangeJson {
    fn default() -> Self {
        let range = ScaleRange::default();
        Self {
            start: range.start,
            end: range.end,
            samples: range.samples,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
struct ParamsJson {
    probability_threshold: f32,
    scales: ScaleRangeJson,
}

impl Default for ParamsJson {
    fn default() -> Self {
        let params = MatchParams::default();
        Self {
            probability_threshold: params.probability_threshold,
            scales: ScaleRangeJson::default(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
struct Config {
    /// Directory holding one subdirectory per gesture.
    gesture_path: String,
    /// Frame images to process, in order.
    frames: Vec<String>,
    /// Where to write the JSON records; stdout when unset.
    output_path: Option<String>,
    /// Save an annotated copy of each processed frame.
    display: bool,
    /// Directory for annotated frames.
    display_dir: String,
    params: ParamsJson,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            gesture_path: String::new(),
            frames: Vec::new(),
            output_path: None,
            display: false,
            display_dir: "overlay".to_string(),
            params: ParamsJson::default(),
        }
    }
}

/// One record per processed frame: the three published channels plus
/// diagnostics.
#[derive(Debug, Serialize)]
struct FrameRecord {
    frame: String,
    detected: bool,
    label: String,
    offset: f32,
    depth: f32,
    probability: f32,
    top_left: [usize; 2],
    bottom_right: [usize; 2],
}

#[derive(Debug, Serialize)]
struct Output {
    frames: Vec<FrameRecord>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if cli.trace {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env().add_directive("gestmatch=info".parse()?))
            .with_target(false)
            .init();
    }

    if cli.print_schema {
        println!("{SCHEMA_JSON}");
        return Ok(());
    }
    if cli.print_example {
        println!("{EXAMPLE_JSON}");
        return Ok(());
    }

    let config_text = fs::read_to_string(&cli.config)?;
    let config: Config = serde_json::from_str(&config_text)?;
    if config.gesture_path.is_empty() {
        return Err("gesture_path must be set in the config".into());
    }
    if config.frames.is_empty() {
        return Err("frames must list at least one image".into());
    }

    // Template load failure is fatal: the matcher cannot run without its set.
    let store = TemplateStore::load(&config.gesture_path)?;
    let params = MatchParams {
        scales: ScaleRange {
            start: config.params.scales.start,
            end: config.params.scales.end,
            samples: config.params.scales.samples,
        },
        probability_threshold: config.params.probability_threshold,
    };
    let mut matcher = GestureMatcher::new(store, params);

    if config.display {
        fs::create_dir_all(&config.display_dir)?;
    }

    let mut records = Vec::with_capacity(config.frames.len());
    for frame_path in &config.frames {
        // A frame that fails to decode or match is dropped; processing
        // resumes with the next one.
        let frame = match load_gray_image(frame_path) {
            Ok(frame) => frame,
            Err(err) => {
                eprintln!("skipping frame {frame_path}: {err}");
                continue;
            }
        };
        let result = match matcher.match_frame(frame.view()) {
            Ok(result) => result,
            Err(err) => {
                eprintln!("skipping frame {frame_path}: {err}");
                continue;
            }
        };
        let report = report_from_match(&result, frame.view());

        if config.display {
            let mut overlay = frame.clone();
            if result.detected {
                draw_rect(
                    &mut overlay,
                    result.top_left,
                    result.bottom_right,
                    OVERLAY_INTENSITY,
                );
            }
            let stem = Path::new(frame_path)
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_else(|| "frame".to_string());
            let out_path = Path::new(&config.display_dir).join(format!("{stem}_overlay.png"));
            if let Err(err) = save_gray_image(&overlay, &out_path) {
                eprintln!("overlay for {frame_path} not written: {err}");
            }
        }

        records.push(FrameRecord {
            frame: frame_path.clone(),
            detected: result.detected,
            label: report.label,
            offset: report.offset,
            depth: report.depth,
            probability: result.probability,
            top_left: [result.top_left.0, result.top_left.1],
            bottom_right: [result.bottom_right.0, result.bottom_right.1],
        });
    }

    let output = Output { frames: records };
    let json = serde_json::to_string_pretty(&output)?;
    match config.output_path {
        Some(path) => fs::write(path, json)?,
        None => println!("{json}"),
    }

    Ok(())
}
