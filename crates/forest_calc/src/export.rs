use crate::config::{ExportKind, Settings};
use crate::error::{CliError, Result};
use chrono::Local;
use csv::{Writer, WriterBuilder};
use forest_core::{CandidateOutcome, OptimizationCandidate, PatternMatch};
use std::{fs::File, io::BufWriter, path::PathBuf};

/// Writes search matches to `patterns_<timestamp>.csv`.
pub fn export_matches(matches: &[PatternMatch], settings: &Settings) -> Result<PathBuf> {
    let (mut wtr, path) = create_writer(ExportKind::Matches, settings)?;

    wtr.write_record(["Day", "Steps", "Pattern", "AllPatterns", "Time", "TotalSeconds"])?;
    for m in matches {
        let all = m
            .matched_patterns
            .iter()
            .map(|k| k.id())
            .collect::<Vec<_>>()
            .join(" ");
        wtr.write_record([
            m.value.to_string().as_str(),
            m.steps_from_start.to_string().as_str(),
            m.primary_pattern_name,
            all.as_str(),
            m.duration.formatted.as_str(),
            m.duration.total_seconds.to_string().as_str(),
        ])?;
    }

    wtr.flush()?;
    Ok(path)
}

/// Writes optimizer candidates to `optimize_<timestamp>.csv`, best first.
pub fn export_candidates(
    candidates: &[OptimizationCandidate],
    settings: &Settings,
) -> Result<PathBuf> {
    let (mut wtr, path) = create_writer(ExportKind::Candidates, settings)?;

    wtr.write_record(["Rank", "Children", "Beds", "Stride", "Steps", "Day", "Matches"])?;
    for (i, c) in candidates.iter().enumerate() {
        let (day, matches) = match &c.outcome {
            CandidateOutcome::TargetReached { .. } => (String::new(), String::new()),
            CandidateOutcome::NearestPattern {
                nearest,
                match_count,
            } => (nearest.value.to_string(), match_count.to_string()),
        };
        let cfg = &c.configuration;
        wtr.write_record([
            (i + 1).to_string(),
            cfg.children.to_string(),
            cfg.beds.to_string(),
            cfg.stride.to_string(),
            c.score.to_string(),
            day,
            matches,
        ])?;
    }

    wtr.flush()?;
    Ok(path)
}

type CsvWriter = Writer<BufWriter<File>>;

fn create_writer(kind: ExportKind, settings: &Settings) -> Result<(CsvWriter, PathBuf)> {
    std::fs::create_dir_all(&settings.output_dir).map_err(|e| CliError::CreateDir {
        path: settings.output_dir.clone(),
        source: e,
    })?;

    let file_path = settings.export_path(kind, Local::now());
    let file = File::create(&file_path).map_err(|e| CliError::CreateFile {
        path: file_path.clone(),
        source: e,
    })?;

    #[allow(unused_mut)]
    let mut builder = WriterBuilder::new();
    #[cfg(windows)]
    {
        use csv::Terminator;
        builder = builder.terminator(Terminator::CRLF);
    }

    Ok((builder.from_writer(BufWriter::new(file)), file_path))
}
