use clap::Parser;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;
use yolopost::{Detection, LabelSet, PostProcessConfig, PostProcessor};

const EXAMPLE_JSON: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/config.example.json"));

#[derive(Parser, Debug)]
#[command(author, version, about = "YOLO output post-processing (JSON config driven)")]
struct Cli {
    /// Path to the JSON configuration file.
    #[arg(short, long, value_name = "FILE", default_value = "config.json")]
    config: PathBuf,
    /// Print an example config and exit.
    #[arg(long)]
    print_example: bool,
    /// Enable tracing output.
    #[arg(long)]
    trace: bool,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
struct Config {
    tensor_path: String,
    labels_path: String,
    output_path: Option<String>,
    num_boxes: usize,
    num_classes: usize,
    confidence_threshold: f32,
    iou_threshold: f32,
    clamp_boxes: bool,
}

impl Default for Config {
    fn default() -> Self {
        let cfg = PostProcessConfig::default();
        Self {
            tensor_path: String::new(),
            labels_path: String::new(),
            output_path: None,
            num_boxes: cfg.num_boxes,
            num_classes: cfg.num_classes,
            confidence_threshold: cfg.confidence_threshold,
            iou_threshold: cfg.iou_threshold,
            clamp_boxes: cfg.clamp_boxes,
        }
    }
}

#[derive(Debug, Serialize)]
struct BoxRecord {
    left: f32,
    top: f32,
    right: f32,
    bottom: f32,
}

#[derive(Debug, Serialize)]
struct DetectionRecord {
    label: String,
    class_id: usize,
    score: f32,
    #[serde(rename = "box")]
    bbox: BoxRecord,
}

impl From<Detection> for DetectionRecord {
    fn from(value: Detection) -> Self {
        Self {
            label: value.label,
            class_id: value.class_id,
            score: value.score,
            bbox: BoxRecord {
                left: value.bbox.left,
                top: value.bbox.top,
                right: value.bbox.right,
                bottom: value.bbox.bottom,
            },
        }
    }
}

#[derive(Debug, Serialize)]
struct Output {
    detections: Vec<DetectionRecord>,
}

/// Reads a raw little-endian f32 dump of the detector output.
fn read_tensor(path: &str) -> Result<Vec<f32>, Box<dyn std::error::Error>> {
    let bytes = fs::read(path)?;
    if bytes.len() % 4 != 0 {
        return Err(format!("{path}: length {} is not a multiple of 4", bytes.len()).into());
    }
    Ok(bytes
        .chunks_exact(4)
        .map(|chunk| f32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))
        .collect())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if cli.trace {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env().add_directive("yolopost=info".parse()?))
            .with_target(false)
            .init();
    }

    if cli.print_example {
        println!("{EXAMPLE_JSON}");
        return Ok(());
    }

    let config_text = fs::read_to_string(&cli.config)?;
    let config: Config = serde_json::from_str(&config_text)?;
    if config.tensor_path.is_empty() || config.labels_path.is_empty() {
        return Err("tensor_path and labels_path must be set in the config".into());
    }

    let labels = LabelSet::load(&config.labels_path)?;
    info!(labels = labels.len(), "loaded labels");

    let processor = PostProcessor::new(
        PostProcessConfig {
            num_boxes: config.num_boxes,
            num_classes: config.num_classes,
            confidence_threshold: config.confidence_threshold,
            iou_threshold: config.iou_threshold,
            clamp_boxes: config.clamp_boxes,
        },
        labels,
    )?;

    let tensor = read_tensor(&config.tensor_path)?;
    let detections = processor.process(&tensor)?;
    for det in &detections {
        info!(
            label = %det.label,
            score = det.score,
            left = det.bbox.left,
            top = det.bbox.top,
            right = det.bbox.right,
            bottom = det.bbox.bottom,
            "detection"
        );
    }

    let output = Output {
        detections: detections.into_iter().map(DetectionRecord::from).collect(),
    };
    let json = serde_json::to_string_pretty(&output)?;

    match config.output_path {
        Some(path) => fs::write(path, json)?,
        None => println!("{json}"),
    }

    Ok(())
}
