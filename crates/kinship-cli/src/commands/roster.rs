//! Roster command implementation.

use super::{find_member, member_names};
use crate::cli::RosterArgs;
use crate::error::Result;
use crate::output::Formatter;
use kinship_domain::Scope;
use kinship_resolver::{GraphBuilder, KinshipResolver, ResolverConfig};
use kinship_store::SqliteStore;

/// Execute the roster command.
///
/// Every member is resolved against the same snapshot of the scope.
pub fn execute_roster(
    args: RosterArgs,
    store: &SqliteStore,
    scope: &Scope,
    config: &ResolverConfig,
    formatter: &Formatter,
) -> Result<()> {
    let resolver = KinshipResolver::new(config.clone())?;
    let ego = find_member(store, &args.ego)?;

    let graph = GraphBuilder::load(store, scope)?;
    if !graph.contains(ego.id) {
        eprintln!(
            "{}",
            formatter.warning(&format!("{} has no relationships in scope '{}'", ego.name, scope))
        );
    }

    let mut roster = resolver.roster(&graph, ego.id);
    if args.related_only {
        roster.retain(|(_, resolution)| resolution.is_related());
    }

    let names = member_names(store)?;
    println!("{}", formatter.format_roster(&ego, &roster, &names)?);
    Ok(())
}
