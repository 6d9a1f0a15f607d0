use anyhow::{Context, Result};
use log::{info, warn};
use serde::{de::DeserializeOwned, Deserialize};
use serde_json::Number;
use std::{fmt, fs::File, io::BufReader, path::Path};

pub const STATISTICS_FILE: &str = "dpo_classifier_statistics.json";
pub const SAMPLES_FILE: &str = "dpo_classifier_training_sample.json";

// Aggregate counters over the generated DPO pairs
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    #[serde(rename = "totalDPOPairs")]
    pub total_dpo_pairs: u64,
    pub total_paths: u64,
    pub correct_paths: u64,
    pub incorrect_paths: u64,
    pub llm_accuracy: Accuracy,
    pub by_outcome: OutcomeCounts,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutcomeCounts {
    #[serde(rename = "YES")]
    pub yes: u64,
    #[serde(rename = "NO")]
    pub no: u64,
}

/// Accuracy as computed upstream, either "50%" or a plain number
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Accuracy {
    Text(String),
    Ratio(f64),
}

impl fmt::Display for Accuracy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Accuracy::Text(s) => f.write_str(s),
            Accuracy::Ratio(r) => write!(f, "{r}"),
        }
    }
}

// One (prompt, chosen, rejected) training record
#[derive(Debug, Clone, Deserialize)]
pub struct Sample {
    pub prompt: String,
    pub chosen: String,
    pub rejected: String,
    pub metadata: SampleMetadata,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SampleMetadata {
    pub predicted_outcome: String,
    pub actual_outcome: String,
    pub cumulative_probability: Number, // kept as written, 1 stays 1
}

impl Sample {
    pub fn is_mispredicted(&self) -> bool {
        self.metadata.predicted_outcome != self.metadata.actual_outcome
    }
}

pub fn load_inputs(in_dir: &Path) -> Result<(Statistics, Vec<Sample>)> {
    let stats: Statistics = read_json(&in_dir.join(STATISTICS_FILE))?;
    let samples: Vec<Sample> = read_json(&in_dir.join(SAMPLES_FILE))?;

    info!(
        "Loaded statistics ({} pairs, {} paths) and {} samples",
        stats.total_dpo_pairs,
        stats.total_paths,
        samples.len()
    );
    if stats.correct_paths + stats.incorrect_paths != stats.total_paths {
        warn!(
            "correctPaths ({}) + incorrectPaths ({}) != totalPaths ({})",
            stats.correct_paths, stats.incorrect_paths, stats.total_paths
        );
    }
    Ok((stats, samples))
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let file = File::open(path).with_context(|| format!("Cannot open {}", path.display()))?;
    serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Malformed JSON in {}", path.display()))
}
