//! The human-readable dry-run report.

use super::{option_source, DryRunMode, Provenance};
use crate::{
    config::Field,
    constants::{COMPUTED_FIELDS, HIDDEN_REPORT_FIELDS},
    error::Result,
    store::{display_value, ValueStore},
};
use console::style;
use std::io::Write;

/// How one field appears in the configuration listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowStatus {
    Resolved { value: String, source: Provenance },
    Missing,
    WouldPrompt,
    Omitted,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRow {
    pub name: &'static str,
    pub status: RowStatus,
}

/// Which unresolved fields are failures and which would merely be asked.
pub struct Requirements<'a> {
    pub required: &'a [&'static str],
    pub prompted: &'a [&'static str],
}

/// One row per visible field, followed by internally computed values.
pub fn configuration_rows(
    fields: &[&'static Field],
    store: &ValueStore,
    mode: DryRunMode,
    requirements: &Requirements<'_>,
) -> Vec<ReportRow> {
    let names = fields
        .iter()
        .map(|field| field.name)
        .chain(COMPUTED_FIELDS.iter().copied())
        .filter(|name| !HIDDEN_REPORT_FIELDS.contains(name));

    let mut rows: Vec<ReportRow> = Vec::new();
    for name in names {
        if rows.iter().any(|row| row.name == name) {
            continue;
        }
        let status = match (store.get_value(name), option_source(name, mode, store)) {
            (Some(value), source) if source != Provenance::Missing => {
                RowStatus::Resolved { value: display_value(value), source }
            }
            _ if requirements.required.contains(&name) => RowStatus::Missing,
            _ if requirements.prompted.contains(&name) => RowStatus::WouldPrompt,
            _ => RowStatus::Omitted,
        };
        rows.push(ReportRow { name, status });
    }
    rows
}

/// Prints the configuration listing and returns the missing field names.
pub fn print_configuration(out: &mut dyn Write, rows: &[ReportRow]) -> Result<Vec<String>> {
    writeln!(out, "\n{}", style("DRY RUN - Configuration").cyan())?;
    writeln!(out, "{}", style("Final configuration that would be used:").yellow())?;

    let mut missing = Vec::new();
    for row in rows {
        let name = style(row.name).cyan();
        match &row.status {
            RowStatus::Resolved { value, source } => {
                let tag = format!("({source})");
                let tag = match source {
                    Provenance::CliArg => style(tag).blue(),
                    Provenance::PromptAnswer => style(tag).green().bold(),
                    _ => style(tag).dim(),
                };
                writeln!(out, "  {} {name}: {value} {tag}", style("✓").green())?;
            }
            RowStatus::Missing => {
                writeln!(out, "  {} {name}: {}", style("❌").red(), style("missing").red())?;
                missing.push(row.name.to_string());
            }
            RowStatus::WouldPrompt => {
                writeln!(out, "  {} {name}: {}", style("❓").yellow(), style("<would prompt>").yellow())?;
            }
            RowStatus::Omitted => {}
        }
    }
    Ok(missing)
}

/// Lists every error and the failure banner.
pub fn print_validation_failure(out: &mut dyn Write, errors: &[String], missing: &[String]) -> Result<()> {
    writeln!(out, "\n{}", style("❌ Validation errors:").red())?;
    for error in errors {
        writeln!(out, "{}", style(format!("  • {error}")).red())?;
    }
    writeln!(out, "\n{}", style("DRY RUN SUMMARY:").red())?;
    writeln!(out, "{}", style("❌ Generator would fail due to validation errors").red())?;
    if !missing.is_empty() {
        print_missing_fields(out, missing)?;
    }
    Ok(())
}

fn print_missing_fields(out: &mut dyn Write, missing: &[String]) -> Result<()> {
    writeln!(out, "{}", style("❌ Generator would fail due to missing required fields:").red())?;
    for field in missing {
        writeln!(out, "{}", style(format!("  • {field}: Required field is missing")).red())?;
    }
    Ok(())
}

pub fn print_missing_summary(out: &mut dyn Write, missing: &[String]) -> Result<()> {
    writeln!(out, "\n{}", style("DRY RUN SUMMARY:").red())?;
    print_missing_fields(out, missing)
}

/// Sorted tracked files and the success banner.
pub fn print_file_analysis(out: &mut dyn Write, tracked_files: &[String]) -> Result<()> {
    let mut files = tracked_files.to_vec();
    files.sort();

    writeln!(out, "\n{}", style("DRY RUN - File analysis").cyan())?;
    writeln!(out, "{}", style("Files to be created/modified:").yellow())?;
    if files.is_empty() {
        writeln!(out, "{}", style("  No files tracked yet").dim())?;
    }
    for file in &files {
        writeln!(out, "{}", style(format!("  {file}")).green())?;
    }

    writeln!(out, "\n{}", style("DRY RUN SUMMARY:").cyan())?;
    if !files.is_empty() {
        writeln!(out, "{}", style(format!("Files that would be created/modified: {}", files.len())).blue())?;
    }
    writeln!(out, "{}", style("✅ Generator would complete successfully").green())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::APP_FIELDS;
    use serde_json::json;

    fn render(f: impl FnOnce(&mut dyn Write) -> Result<()>) -> String {
        let mut out = Vec::new();
        f(&mut out).unwrap();
        console::strip_ansi_codes(&String::from_utf8(out).unwrap()).to_string()
    }

    fn app_fields() -> Vec<&'static Field> {
        APP_FIELDS.iter().collect()
    }

    #[test]
    fn rows_carry_values_and_sources() {
        let mut store = ValueStore::new();
        store.set_option("appName", json!("Test App"));
        store.set_prop("folderName", json!("test-app"));
        store.set_prop("productId", json!("abc"));
        store.set_prop("subFolder", json!("../"));
        let requirements = Requirements { required: &["appName", "entryName"], prompted: &["rootUrl"] };

        let rows = configuration_rows(&app_fields(), &store, DryRunMode::NonInteractive, &requirements);
        let find = |name: &str| rows.iter().find(|row| row.name == name).map(|row| row.status.clone());

        assert_eq!(
            find("appName"),
            Some(RowStatus::Resolved { value: "Test App".into(), source: Provenance::CliArg })
        );
        assert_eq!(
            find("folderName"),
            Some(RowStatus::Resolved { value: "test-app".into(), source: Provenance::ComputedDefault })
        );
        assert_eq!(find("entryName"), Some(RowStatus::Missing));
        assert_eq!(find("rootUrl"), Some(RowStatus::WouldPrompt));
        assert_eq!(find("slackGroup"), Some(RowStatus::Omitted));
        assert_eq!(find("productId"), None);
        assert_eq!(
            find("subFolder"),
            Some(RowStatus::Resolved { value: "../".into(), source: Provenance::Computed })
        );
    }

    #[test]
    fn configuration_listing_reports_missing_fields() {
        let rows = vec![
            ReportRow {
                name: "appName",
                status: RowStatus::Resolved { value: "Test App".into(), source: Provenance::CliArg },
            },
            ReportRow { name: "folderName", status: RowStatus::Missing },
            ReportRow { name: "rootUrl", status: RowStatus::WouldPrompt },
            ReportRow { name: "slackGroup", status: RowStatus::Omitted },
        ];
        let mut missing = Vec::new();
        let text = render(|out| {
            missing = print_configuration(out, &rows)?;
            Ok(())
        });

        assert!(text.contains("DRY RUN - Configuration\nFinal configuration that would be used:\n"));
        assert!(text.contains("  ✓ appName: Test App (CLI arg)\n"));
        assert!(text.contains("  ❌ folderName: missing\n"));
        assert!(text.contains("  ❓ rootUrl: <would prompt>\n"));
        assert!(!text.contains("slackGroup"));
        assert_eq!(missing, vec!["folderName"]);
    }

    #[test]
    fn validation_failure_banner() {
        let errors = vec!["--folder-name: Required when using non-interactive mode".to_string()];
        let text = render(|out| print_validation_failure(out, &errors, &["folderName".to_string()]));
        assert!(text.contains("❌ Validation errors:\n  • --folder-name: Required when using non-interactive mode\n"));
        assert!(text.contains("DRY RUN SUMMARY:\n❌ Generator would fail due to validation errors\n"));
        assert!(text.contains("  • folderName: Required field is missing\n"));
    }

    #[test]
    fn file_analysis_is_sorted_and_counted() {
        let files = vec!["src/b.js".to_string(), "../content-build/registry.json".to_string()];
        let text = render(|out| print_file_analysis(out, &files));
        assert!(text.contains(
            "Files to be created/modified:\n  ../content-build/registry.json\n  src/b.js\n"
        ));
        assert!(text.contains("Files that would be created/modified: 2\n"));
        assert!(text.ends_with("✅ Generator would complete successfully\n"));
    }

    #[test]
    fn empty_file_analysis() {
        let text = render(|out| print_file_analysis(out, &[]));
        assert!(text.contains("  No files tracked yet\n"));
        assert!(!text.contains("Files that would be created/modified:"));
    }
}
