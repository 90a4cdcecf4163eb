//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use kinship_domain::RelationshipType;

/// Kinship CLI - Record family relationships and ask how people are related.
#[derive(Debug, Parser)]
#[command(name = "kinship")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Database path
    #[arg(short, long, global = true, env = "KINSHIP_DATABASE")]
    pub database: Option<String>,

    /// Relationship scope (family tree) to work in
    #[arg(short, long, global = true, env = "KINSHIP_SCOPE")]
    pub scope: Option<String>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (IDs and labels only)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage members
    Member(MemberArgs),

    /// Record a relationship between two members
    Relate(RelateArgs),

    /// Remove a relationship between two members
    Unrelate(RelateArgs),

    /// List the relationships of the scope
    Edges,

    /// Show what ALTER is to EGO
    Label(LabelArgs),

    /// Show what every member of the scope is to EGO
    Roster(RosterArgs),
}

/// Arguments for member management.
#[derive(Debug, Parser)]
pub struct MemberArgs {
    #[command(subcommand)]
    pub action: MemberAction,
}

/// Member management actions.
#[derive(Debug, Subcommand)]
pub enum MemberAction {
    /// Register a member
    Add {
        /// Display name
        name: String,
        /// Gender used for gendered terms
        #[arg(short, long, value_enum, default_value = "unspecified")]
        gender: GenderArg,
    },

    /// List all members
    List,
}

/// Arguments for the relate and unrelate commands.
#[derive(Debug, Parser)]
pub struct RelateArgs {
    /// First member (id or name); the parent for `--kind parent`
    pub a: String,

    /// Second member (id or name); the child for `--kind parent`
    pub b: String,

    /// Relationship kind
    #[arg(short, long, value_enum)]
    pub kind: KindArg,
}

/// Arguments for the label command.
#[derive(Debug, Parser)]
pub struct LabelArgs {
    /// Member the label is relative to (id or name)
    pub ego: String,

    /// Member being described (id or name)
    pub alter: String,

    /// Override the maximum path length
    #[arg(short, long)]
    pub max_depth: Option<usize>,
}

/// Arguments for the roster command.
#[derive(Debug, Parser)]
pub struct RosterArgs {
    /// Member the labels are relative to (id or name)
    pub ego: String,

    /// Hide unrelated members
    #[arg(long)]
    pub related_only: bool,
}

/// Relationship kind argument.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum KindArg {
    /// A is a parent of B
    Parent,
    /// A and B are married
    Spouse,
    /// A and B are unmarried partners
    Partner,
}

/// Gender argument.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum GenderArg {
    /// Male
    Male,
    /// Female
    Female,
    /// Unspecified
    Unspecified,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}

impl From<KindArg> for RelationshipType {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Parent => RelationshipType::Parent,
            KindArg::Spouse => RelationshipType::Spouse,
            KindArg::Partner => RelationshipType::Partner,
        }
    }
}

impl From<GenderArg> for kinship_domain::Gender {
    fn from(gender: GenderArg) -> Self {
        match gender {
            GenderArg::Male => kinship_domain::Gender::Male,
            GenderArg::Female => kinship_domain::Gender::Female,
            GenderArg::Unspecified => kinship_domain::Gender::Unspecified,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_command() {
        let cli = Cli::parse_from(["kinship", "label", "Ada", "Byron", "--max-depth", "4"]);
        match cli.command {
            Command::Label(args) => {
                assert_eq!(args.ego, "Ada");
                assert_eq!(args.alter, "Byron");
                assert_eq!(args.max_depth, Some(4));
            }
            _ => panic!("Expected Label command"),
        }
    }

    #[test]
    fn test_relate_command() {
        let cli = Cli::parse_from(["kinship", "--scope", "lovelace", "relate", "Byron", "Ada", "--kind", "parent"]);
        assert_eq!(cli.scope.as_deref(), Some("lovelace"));
        match cli.command {
            Command::Relate(args) => {
                assert_eq!(RelationshipType::from(args.kind), RelationshipType::Parent);
            }
            _ => panic!("Expected Relate command"),
        }
    }

    #[test]
    fn test_member_add_defaults_to_unspecified() {
        let cli = Cli::parse_from(["kinship", "member", "add", "Ada"]);
        match cli.command {
            Command::Member(MemberArgs {
                action: MemberAction::Add { name, gender },
            }) => {
                assert_eq!(name, "Ada");
                assert_eq!(kinship_domain::Gender::from(gender), kinship_domain::Gender::Unspecified);
            }
            _ => panic!("Expected member add"),
        }
    }

    #[test]
    fn test_verbosity_counts() {
        let cli = Cli::parse_from(["kinship", "-vv", "edges"]);
        assert_eq!(cli.verbose, 2);
    }
}
