//! Label command implementation.

use super::{find_member, member_names};
use crate::cli::LabelArgs;
use crate::error::Result;
use crate::output::Formatter;
use kinship_domain::{Member, Scope};
use kinship_resolver::{GraphBuilder, KinshipResolver, Resolution, ResolverConfig};
use kinship_store::SqliteStore;

/// Resolve what `alter` is to `ego` within one scope.
pub fn resolve_label(
    store: &SqliteStore,
    scope: &Scope,
    ego: &str,
    alter: &str,
    config: ResolverConfig,
) -> Result<(Member, Member, Resolution)> {
    let resolver = KinshipResolver::new(config)?;
    let ego = find_member(store, ego)?;
    let alter = find_member(store, alter)?;

    let graph = GraphBuilder::load(store, scope)?;
    let resolution = resolver.resolve(&graph, ego.id, alter.id);
    Ok((ego, alter, resolution))
}

/// Execute the label command.
pub fn execute_label(
    args: LabelArgs,
    store: &SqliteStore,
    scope: &Scope,
    config: &ResolverConfig,
    formatter: &Formatter,
) -> Result<()> {
    let mut config = config.clone();
    if let Some(max_depth) = args.max_depth {
        config.max_depth = max_depth;
    }

    let (ego, alter, resolution) = resolve_label(store, scope, &args.ego, &args.alter, config)?;
    let names = member_names(store)?;

    println!("{}", formatter.format_resolution(&ego, &alter, &resolution, &names)?);
    Ok(())
}
