use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};

use caderno_core::RowFilter;
use caderno_recon::{ReconEngine, ReferenceList};
use caderno_sheet::{
    read_ledger, read_reference, sanitize_filename, split_by_group, write_group_csv_path,
    write_group_xlsx, ImportProfile,
};

/// Cleans a bookkeeping spreadsheet export: reconciles free-text
/// transaction descriptions against the workbook's category list and
/// writes one cleaned table per account/cost-center group.
#[derive(Parser)]
#[command(name = "caderno", version)]
struct Cli {
    /// Input workbook (xlsx) containing the ledger and reference sheets.
    #[arg(short, long)]
    input: PathBuf,

    /// Column-mapping profile (TOML). Defaults to the standard export
    /// layout when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory for the per-group output files.
    #[arg(short, long, default_value = "out")]
    out_dir: PathBuf,

    /// Output file format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Xlsx)]
    format: OutputFormat,

    /// Use exact case-insensitive matching instead of fuzzy scoring.
    #[arg(long)]
    exact: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Xlsx,
    Csv,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    let profile = match &cli.config {
        Some(path) => ImportProfile::from_path(path)
            .with_context(|| format!("loading profile {}", path.display()))?,
        None => ImportProfile::default(),
    };

    let rows = read_ledger(&cli.input, &profile)
        .with_context(|| format!("reading ledger from {}", cli.input.display()))?;
    let reference = read_reference(&cli.input, &profile)
        .with_context(|| format!("reading reference list from {}", cli.input.display()))?;

    let filter = RowFilter::new(profile.excluded_labels.clone());
    let mut rows = filter.retain(rows);
    let refs = ReferenceList::new(reference);
    tracing::info!(rows = rows.len(), references = refs.len(), "loaded workbook");

    let engine = if cli.exact {
        tracing::info!("exact matching requested; fuzzy scoring disabled");
        ReconEngine::exact_only()
    } else {
        ReconEngine::default()
    };

    let raws: Vec<Option<String>> = rows.iter().map(|r| r.detail.clone()).collect();
    let results = engine.match_batch(&raws, &refs);

    let mut matched = 0usize;
    for (row, result) in rows.iter_mut().zip(&results) {
        if let Some(text) = result.as_matched() {
            row.detail = Some(text.to_string());
            matched += 1;
        }
    }
    tracing::info!(
        matched,
        unmatched = results.len() - matched,
        "reconciled descriptions"
    );

    std::fs::create_dir_all(&cli.out_dir)
        .with_context(|| format!("creating {}", cli.out_dir.display()))?;

    let groups = split_by_group(&rows);
    if groups.is_empty() {
        tracing::warn!("no rows carry a group value; nothing to write");
        return Ok(());
    }

    for (group, group_rows) in &groups {
        let extension = match cli.format {
            OutputFormat::Xlsx => "xlsx",
            OutputFormat::Csv => "csv",
        };
        let path = cli
            .out_dir
            .join(format!("{}.{extension}", sanitize_filename(group)));
        match cli.format {
            OutputFormat::Xlsx => write_group_xlsx(&path, group_rows)?,
            OutputFormat::Csv => write_group_csv_path(&path, group_rows)?,
        }
        tracing::info!(group = %group, rows = group_rows.len(), path = %path.display(), "wrote group file");
    }

    Ok(())
}
