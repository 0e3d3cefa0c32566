use std::fs;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use anyhow::{Context, Result};
use log::{LevelFilter, info};
use serde::Serialize;
use svg::Document;

use maxrects::io::ext_repr::ExtInstance;
use maxrects::io::import;

use crate::EPOCH;

pub mod cli;
pub mod output;

/// Reads an instance: JSON when the extension is `.json`, the plain text format otherwise.
/// Unnamed instances are named after the file stem.
pub fn read_instance(path: &Path) -> Result<ExtInstance> {
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("instance");

    let mut instance = match path.extension().and_then(|e| e.to_str()) {
        Some("json") => {
            let file = File::open(path)
                .with_context(|| format!("could not open instance file: {}", path.display()))?;
            let reader = BufReader::new(file);
            serde_json::from_reader::<_, ExtInstance>(reader)
                .with_context(|| format!("not a valid instance file: {}", path.display()))?
        }
        _ => {
            let content = fs::read_to_string(path)
                .with_context(|| format!("could not read instance file: {}", path.display()))?;
            import::parse_text_instance(&content, stem)
                .with_context(|| format!("not a valid instance file: {}", path.display()))?
        }
    };

    if instance.name.is_empty() {
        instance.name = stem.to_string();
    }
    info!(
        "[IO] read instance '{}' from {}: {} pieces, bin {} x {}",
        instance.name,
        path.display(),
        instance.pieces.len(),
        instance.bin_width,
        instance.bin_height
    );
    Ok(instance)
}

pub fn write_json(json: &impl Serialize, path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("could not open solution file: {}", path.display()))?;

    let writer = BufWriter::new(file);

    serde_json::to_writer_pretty(writer, json)
        .with_context(|| format!("could not write solution file: {}", path.display()))?;

    info!(
        "[IO] solution JSON written to file://{}",
        fs::canonicalize(path)?.to_str().unwrap_or("?")
    );
    Ok(())
}

pub fn write_svg(document: &Document, path: &Path) -> Result<()> {
    svg::save(path, document)
        .with_context(|| format!("could not write svg file: {}", path.display()))?;
    info!(
        "[IO] solution SVG written to file://{}",
        fs::canonicalize(path)?.to_str().unwrap_or("?")
    );
    Ok(())
}

pub fn init_logger(level_filter: LevelFilter) -> Result<()> {
    //make sure the epoch is initialized before the first log line
    let _ = *EPOCH;
    fern::Dispatch::new()
        // Perform allocation-free log formatting
        .format(|out, message, record| {
            let handle = std::thread::current();
            let thread_name = handle.name().unwrap_or("-");

            let duration = EPOCH.elapsed();
            let sec = duration.as_secs() % 60;
            let min = (duration.as_secs() / 60) % 60;
            let hours = (duration.as_secs() / 60) / 60;

            let prefix = format!(
                "[{}] [{:0>2}:{:0>2}:{:0>2}] <{}>",
                record.level(),
                hours,
                min,
                sec,
                thread_name,
            );

            out.finish(format_args!("{:<27}{}", prefix, message))
        })
        // Add blanket level filter -
        .level(level_filter)
        .chain(std::io::stdout())
        .apply()
        .context("could not initialize logger")?;
    info!("[MAIN] start time: {}", jiff::Timestamp::now());
    Ok(())
}
