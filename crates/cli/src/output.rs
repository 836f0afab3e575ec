//! Output formatting for translated configurations

use check_lib::translate::{ConfigEntry, TitanSmaReport};
use clap::ValueEnum;
use colored::Colorize;
use tabled::{settings::Style, Table, Tabled};

/// Output format for the translated configuration
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Table format (default)
    #[default]
    Table,
    /// JSON format
    Json,
}

#[derive(Tabled)]
struct SettingRow<'a> {
    #[tabled(rename = "Setting")]
    name: &'a str,
    #[tabled(rename = "Value")]
    value: &'a str,
}

fn settings_table(entries: &[ConfigEntry]) -> String {
    let rows: Vec<SettingRow> = entries
        .iter()
        .map(|entry| SettingRow {
            name: &entry.name,
            value: &entry.value,
        })
        .collect();
    Table::new(rows).with(Style::rounded()).to_string()
}

/// Render a translated configuration as a printable string.
pub fn render(report: &TitanSmaReport, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
        OutputFormat::Table => {
            let mut sections = vec![format!(
                "{}\n{}",
                "Device Settings".bold(),
                settings_table(&report.device)
            )];
            for streamer in &report.streamers {
                let title = format!("{} {}", streamer.kind.title(), streamer.index);
                sections.push(format!(
                    "{}\n{}",
                    title.bold(),
                    settings_table(&streamer.entries)
                ));
            }
            Ok(sections.join("\n\n"))
        }
    }
}
