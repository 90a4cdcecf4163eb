//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use kinship_domain::{Member, MemberId, RelationshipEdge};
use kinship_resolver::{Resolution, Step};
use std::collections::HashMap;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format members output.
    pub fn format_members(&self, members: &[Member]) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let json: Vec<serde_json::Value> = members.iter().map(member_json).collect();
                Ok(serde_json::to_string_pretty(&json)?)
            }
            OutputFormat::Table => {
                if members.is_empty() {
                    return Ok(self.colorize("No members found.", "yellow"));
                }

                let mut builder = Builder::default();
                builder.push_record(["ID", "Name", "Gender"]);
                for member in members {
                    builder.push_record([
                        member.id.to_string(),
                        member.name.clone(),
                        member.gender.as_str().to_string(),
                    ]);
                }
                Ok(self.table(builder))
            }
            OutputFormat::Quiet => {
                let ids: Vec<String> = members.iter().map(|m| m.id.to_string()).collect();
                Ok(ids.join("\n"))
            }
        }
    }

    /// Format relationship edges, naming members where known.
    pub fn format_edges(
        &self,
        edges: &[RelationshipEdge],
        names: &HashMap<MemberId, String>,
    ) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let json: Vec<serde_json::Value> = edges
                    .iter()
                    .map(|e| {
                        serde_json::json!({
                            "scope": e.scope.as_str(),
                            "from": e.from.to_string(),
                            "to": e.to.to_string(),
                            "relationship_type": e.relationship_type.as_str(),
                        })
                    })
                    .collect();
                Ok(serde_json::to_string_pretty(&json)?)
            }
            OutputFormat::Table => {
                if edges.is_empty() {
                    return Ok(self.colorize("No relationships found.", "yellow"));
                }

                let mut builder = Builder::default();
                builder.push_record(["From", "Kind", "To"]);
                for edge in edges {
                    builder.push_record([
                        name_of(names, edge.from),
                        edge.relationship_type.as_str().to_string(),
                        name_of(names, edge.to),
                    ]);
                }
                Ok(self.table(builder))
            }
            OutputFormat::Quiet => {
                let lines: Vec<String> = edges
                    .iter()
                    .map(|e| format!("{} {} {}", e.from, e.relationship_type.as_str(), e.to))
                    .collect();
                Ok(lines.join("\n"))
            }
        }
    }

    /// Format a single resolution of `alter` relative to `ego`.
    pub fn format_resolution(
        &self,
        ego: &Member,
        alter: &Member,
        resolution: &Resolution,
        names: &HashMap<MemberId, String>,
    ) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let mut json = resolution_json(resolution);
                json["ego"] = member_json(ego);
                json["alter"] = member_json(alter);
                Ok(serde_json::to_string_pretty(&json)?)
            }
            OutputFormat::Table => {
                let mut lines = vec![format!(
                    "{} is {}'s {}",
                    alter.name,
                    ego.name,
                    self.label(resolution)
                )];

                if let Some(kinship) = resolution.kinship() {
                    lines.push(format!("  category: {}", kinship.category));
                    lines.push(format!("  path:     {}", describe_path(&kinship.steps, &kinship.via, names)));
                    if let Some(ancestor) = kinship.common_ancestor {
                        lines.push(format!("  via:      {}", name_of(names, ancestor)));
                    }
                }
                Ok(lines.join("\n"))
            }
            OutputFormat::Quiet => Ok(resolution.label().to_string()),
        }
    }

    /// Format the roster of every member relative to `ego`.
    pub fn format_roster(
        &self,
        ego: &Member,
        roster: &[(MemberId, Resolution)],
        names: &HashMap<MemberId, String>,
    ) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let json: Vec<serde_json::Value> = roster
                    .iter()
                    .map(|(id, resolution)| {
                        let mut entry = resolution_json(resolution);
                        entry["member"] = serde_json::json!({
                            "id": id.to_string(),
                            "name": names.get(id),
                        });
                        entry
                    })
                    .collect();
                Ok(serde_json::to_string_pretty(&serde_json::json!({
                    "ego": member_json(ego),
                    "roster": json,
                }))?)
            }
            OutputFormat::Table => {
                if roster.is_empty() {
                    return Ok(self.colorize(&format!("No other members related to {}.", ego.name), "yellow"));
                }

                let mut builder = Builder::default();
                builder.push_record(["Member", "Relationship", "Category"]);
                for (id, resolution) in roster {
                    let category = resolution
                        .kinship()
                        .map(|k| k.category.as_str())
                        .unwrap_or("-");
                    builder.push_record([
                        name_of(names, *id),
                        self.label(resolution),
                        category.to_string(),
                    ]);
                }
                Ok(self.table(builder))
            }
            OutputFormat::Quiet => {
                let lines: Vec<String> = roster
                    .iter()
                    .map(|(id, resolution)| format!("{}\t{}", id, resolution.label()))
                    .collect();
                Ok(lines.join("\n"))
            }
        }
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Whether output is machine-readable JSON.
    pub fn is_json(&self) -> bool {
        self.format == OutputFormat::Json
    }

    fn label(&self, resolution: &Resolution) -> String {
        match resolution {
            Resolution::Related(kinship) => self.colorize(&kinship.label, "cyan"),
            other => self.colorize(other.label(), "magenta"),
        }
    }

    fn table(&self, builder: Builder) -> String {
        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));
        table.to_string()
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().to_string(),
            "magenta" => text.magenta().to_string(),
            _ => text.to_string(),
        }
    }
}

fn member_json(member: &Member) -> serde_json::Value {
    serde_json::json!({
        "id": member.id.to_string(),
        "name": member.name,
        "gender": member.gender.as_str(),
    })
}

fn resolution_json(resolution: &Resolution) -> serde_json::Value {
    match resolution.kinship() {
        Some(k) => serde_json::json!({
            "label": k.label,
            "category": k.category.as_str(),
            "base_term": k.base_term,
            "degree": k.degree,
            "removal": k.removal,
            "modifiers": k.modifiers.iter().map(|m| m.as_str()).collect::<Vec<_>>(),
            "gender": k.gender.as_str(),
            "steps": k.steps.iter().map(Step::token).collect::<Vec<_>>(),
            "via": k.via.iter().map(|id| id.to_string()).collect::<Vec<_>>(),
            "common_ancestor": k.common_ancestor.map(|id| id.to_string()),
        }),
        None => serde_json::json!({
            "label": resolution.label(),
            "category": serde_json::Value::Null,
        }),
    }
}

fn name_of(names: &HashMap<MemberId, String>, id: MemberId) -> String {
    names.get(&id).cloned().unwrap_or_else(|| id.to_string())
}

/// "Ada -parent-> Byron -spouse-> Annabella"
fn describe_path(steps: &[Step], via: &[MemberId], names: &HashMap<MemberId, String>) -> String {
    let mut text = via.first().map(|id| name_of(names, *id)).unwrap_or_default();
    for (step, id) in steps.iter().zip(via.iter().skip(1)) {
        text.push_str(&format!(" -{}-> {}", step.token(), name_of(names, *id)));
    }
    text
}
