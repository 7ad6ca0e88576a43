//! Implementation of the `stackgen list` command.

use serde::Serialize;

use stackgen_core::domain::BuiltinTemplate;

use crate::{
    cli::{ListArgs, ListFormat},
    error::{CliError, CliResult},
    output::OutputManager,
};

#[derive(Debug, Serialize)]
struct TemplateRow {
    id: &'static str,
    description: &'static str,
}

/// Execute the `stackgen list` command.
pub fn execute(args: ListArgs, output: OutputManager) -> CliResult<()> {
    let rows: Vec<TemplateRow> = BuiltinTemplate::ALL
        .into_iter()
        .map(|b| TemplateRow {
            id: b.id(),
            description: b.description(),
        })
        .collect();

    match args.format {
        ListFormat::Table => {
            output.header("Bundled templates")?;
            let width = rows.iter().map(|r| r.id.len()).max().unwrap_or(0);
            for row in &rows {
                output.print(&format!("  {:width$}  {}", row.id, row.description))?;
            }
            output.print("")?;
            output.print("Any other value is treated as a path to a template file.")?;
        }
        ListFormat::List => {
            for row in &rows {
                output.print(row.id)?;
            }
        }
        ListFormat::Json => {
            let json = serde_json::to_string_pretty(&rows).map_err(|e| CliError::IoError {
                message: "failed to serialize template list".into(),
                source: std::io::Error::other(e),
            })?;
            output.print(&json)?;
        }
    }

    Ok(())
}
