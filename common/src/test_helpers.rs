//! Shared fixtures for rule-model files.
//!
//! Builders return the on-disk JSON shape (`AggregatedRules` /
//! `Annotation` / `Rules` / `Score`) so tests exercise the same
//! documents the loader sees in production.

use serde_json::{Value, json};
use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};
use std::{fs, io};

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

/// Unique per process and call, for test directories that must not collide.
pub fn generate_unique_id() -> String {
    format!("{}-{}", std::process::id(), NEXT_ID.fetch_add(1, Ordering::SeqCst))
}

pub fn rule_block_json(annotation: &str, scores: &[f64]) -> Value {
    json!({
        "Annotation": annotation,
        "Rules": scores.iter().map(|score| json!({ "Score": score })).collect::<Vec<_>>(),
    })
}

pub fn rule_model_json(blocks: Vec<Value>) -> Value {
    json!({ "AggregatedRules": blocks })
}

/// Writes the given rule files into a fresh directory under the system
/// temp dir and returns its path. Callers may leave cleanup to the OS.
pub fn write_model_dir(files: &[(&str, &Value)]) -> io::Result<PathBuf> {
    let dir = std::env::temp_dir().join(format!("rule-models-{}", generate_unique_id()));
    fs::create_dir_all(&dir)?;
    for &(name, contents) in files {
        let serialized = serde_json::to_vec_pretty(contents).expect("fixture serializes");
        fs::write(dir.join(name), serialized)?;
    }
    Ok(dir)
}
