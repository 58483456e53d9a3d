use std::fs::File;

use anyhow::{Context, Result};
use comfy_table::Table;

use neo_core::{ProcessOptions, process_file};
use neo_model::RunSummary;

use crate::cli::ProcessArgs;
use crate::summary::apply_table_style;

pub fn run_process(args: &ProcessArgs) -> Result<RunSummary> {
    let options = ProcessOptions {
        as_of: args.as_of,
        output_dir: args.output_dir.clone(),
        dry_run: args.dry_run,
    };
    let summary = process_file(&args.input, &options)?;
    if let Some(path) = &args.summary_json {
        let file = File::create(path)
            .with_context(|| format!("create summary file {}", path.display()))?;
        serde_json::to_writer_pretty(file, &summary)
            .with_context(|| format!("write summary json {}", path.display()))?;
    }
    Ok(summary)
}

pub fn run_rules() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec!["#", "Check", "Rejection"]);
    apply_table_style(&mut table);
    table.add_row(vec!["1", "Cell is blank after trimming", "Empty ID"]);
    table.add_row(vec![
        "2",
        "Any character is not a decimal digit",
        "Contains non-numeric characters",
    ]);
    table.add_row(vec![
        "3",
        "Digit count is not exactly 8",
        "Wrong length: {n} digits (expected 8)",
    ]);
    table.add_row(vec!["4", "First digit is not 0", "Does not start with 0"]);
    table.add_row(vec![
        "-",
        "All checks pass",
        "Accepted as 'u' + trailing 7 digits",
    ]);
    println!("{table}");
    Ok(())
}
