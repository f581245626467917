use anyhow::{Context, Result};
use fhub::fertility::{FertilityAnalytics, FertilityEngine, FertilityQuery, InferenceResult};
use serde::Serialize;
use std::io::Write;
use std::path::Path;
use tracing::info;

#[derive(Debug, Serialize)]
struct BatchReport<'a> {
    results: &'a [InferenceResult],
    analytics: FertilityAnalytics,
}

pub(crate) fn infer(
    engine: &FertilityEngine,
    query: &FertilityQuery,
    pretty: bool,
    out: &mut impl Write,
) -> Result<()> {
    let result = engine.infer(query)?;
    write_json(out, &result, pretty)
}

pub(crate) fn batch(
    engine: &FertilityEngine,
    file: &Path,
    pretty: bool,
    out: &mut impl Write,
) -> Result<()> {
    let raw = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read {}", file.display()))?;
    let queries: Vec<FertilityQuery> = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse queries from {}", file.display()))?;

    let results = queries
        .iter()
        .enumerate()
        .map(|(i, query)| engine.infer(query).with_context(|| format!("Record {i}")))
        .collect::<Result<Vec<_>>>()?;
    info!(records = results.len(), "Batch inferred");

    let report = BatchReport { analytics: FertilityAnalytics::from_results(&results), results: &results };
    write_json(out, &report, pretty)
}

pub(crate) fn knowledge_base(engine: &FertilityEngine, out: &mut impl Write) -> Result<()> {
    let text = toml::to_string(engine.knowledge_base()).context("Failed to render knowledge base")?;
    out.write_all(text.as_bytes())?;
    Ok(())
}

fn write_json(out: &mut impl Write, value: &impl Serialize, pretty: bool) -> Result<()> {
    if pretty {
        serde_json::to_writer_pretty(&mut *out, value)?;
    } else {
        serde_json::to_writer(&mut *out, value)?;
    }
    writeln!(out)?;
    Ok(())
}
