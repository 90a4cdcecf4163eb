//! Relate and unrelate command implementations.

use super::find_member;
use crate::cli::RelateArgs;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use kinship_domain::traits::RelationshipStore;
use kinship_domain::{RelationshipEdge, Scope};
use kinship_resolver::{EdgeValidator, GraphBuilder};
use kinship_store::SqliteStore;

fn edge_from_args(args: &RelateArgs, store: &SqliteStore, scope: &Scope) -> Result<RelationshipEdge> {
    if scope.is_empty() {
        return Err(CliError::InvalidInput("A non-empty scope is required".to_string()));
    }

    let a = find_member(store, &args.a)?;
    let b = find_member(store, &args.b)?;
    Ok(RelationshipEdge::new(scope.clone(), a.id, b.id, args.kind.into()))
}

/// Execute the relate command.
///
/// The edge is checked against a fresh snapshot of the scope first.
pub fn execute_relate(
    args: RelateArgs,
    store: &mut SqliteStore,
    scope: &Scope,
    formatter: &Formatter,
) -> Result<()> {
    let edge = edge_from_args(&args, store, scope)?;

    let graph = GraphBuilder::load(&*store, scope)?;
    let result = EdgeValidator::new().validate(&graph, &edge);
    if !result.is_accepted() {
        let reasons: Vec<String> = result.reasons.iter().map(ToString::to_string).collect();
        return Err(CliError::Rejected(reasons.join("; ")));
    }

    store.add_relationship(edge.clone())?;
    tracing::info!(
        "Recorded {} edge {} -> {} in scope '{}'",
        edge.relationship_type.as_str(),
        edge.from,
        edge.to,
        scope
    );

    println!(
        "{}",
        formatter.success(&format!(
            "Recorded {} relationship: {} and {}",
            edge.relationship_type.as_str(),
            args.a,
            args.b
        ))
    );
    Ok(())
}

/// Execute the unrelate command.
pub fn execute_unrelate(
    args: RelateArgs,
    store: &mut SqliteStore,
    scope: &Scope,
    formatter: &Formatter,
) -> Result<()> {
    let edge = edge_from_args(&args, store, scope)?;

    if store.remove_relationship(&edge)? {
        println!(
            "{}",
            formatter.success(&format!(
                "Removed {} relationship: {} and {}",
                edge.relationship_type.as_str(),
                args.a,
                args.b
            ))
        );
    } else {
        println!("{}", formatter.warning("No matching relationship found"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::KindArg;
    use crate::config::OutputFormat;
    use kinship_domain::{Gender, Member};

    fn setup() -> (SqliteStore, Formatter) {
        let mut store = SqliteStore::new(":memory:").unwrap();
        store.add_member(Member::new("Byron", Gender::Male)).unwrap();
        store.add_member(Member::new("Ada", Gender::Female)).unwrap();
        (store, Formatter::new(OutputFormat::Quiet, false))
    }

    fn args(a: &str, b: &str, kind: KindArg) -> RelateArgs {
        RelateArgs {
            a: a.to_string(),
            b: b.to_string(),
            kind,
        }
    }

    #[test]
    fn test_relate_then_reject_cycle() {
        let (mut store, formatter) = setup();
        let scope = Scope::new("lovelace");

        execute_relate(args("Byron", "Ada", KindArg::Parent), &mut store, &scope, &formatter).unwrap();
        assert_eq!(store.list_edges(&scope).unwrap().len(), 1);

        let result = execute_relate(args("Ada", "Byron", KindArg::Parent), &mut store, &scope, &formatter);
        assert!(matches!(result, Err(CliError::Rejected(_))));
        assert_eq!(store.list_edges(&scope).unwrap().len(), 1);
    }

    #[test]
    fn test_relate_rejects_duplicates_and_self() {
        let (mut store, formatter) = setup();
        let scope = Scope::new("lovelace");

        execute_relate(args("Byron", "Ada", KindArg::Spouse), &mut store, &scope, &formatter).unwrap();
        let duplicate = execute_relate(args("Ada", "Byron", KindArg::Spouse), &mut store, &scope, &formatter);
        assert!(matches!(duplicate, Err(CliError::Rejected(_))));

        let itself = execute_relate(args("Ada", "Ada", KindArg::Partner), &mut store, &scope, &formatter);
        assert!(matches!(itself, Err(CliError::Rejected(_))));
    }

    #[test]
    fn test_unrelate_symmetric_edge() {
        let (mut store, formatter) = setup();
        let scope = Scope::new("lovelace");

        execute_relate(args("Byron", "Ada", KindArg::Partner), &mut store, &scope, &formatter).unwrap();
        execute_unrelate(args("Ada", "Byron", KindArg::Partner), &mut store, &scope, &formatter).unwrap();
        assert!(store.list_edges(&scope).unwrap().is_empty());
    }

    #[test]
    fn test_unknown_member_and_empty_scope() {
        let (mut store, formatter) = setup();

        let unknown = execute_relate(args("Byron", "Nobody", KindArg::Parent), &mut store, &Scope::new("x"), &formatter);
        assert!(matches!(unknown, Err(CliError::MemberNotFound(_))));

        let empty = execute_relate(args("Byron", "Ada", KindArg::Parent), &mut store, &Scope::new(""), &formatter);
        assert!(matches!(empty, Err(CliError::InvalidInput(_))));
    }
}
