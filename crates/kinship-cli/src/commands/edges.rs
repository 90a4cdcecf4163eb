//! Edges command implementation.

use super::member_names;
use crate::error::Result;
use crate::output::Formatter;
use kinship_domain::traits::RelationshipStore;
use kinship_domain::Scope;
use kinship_store::SqliteStore;

/// Execute the edges command.
pub fn execute_edges(store: &SqliteStore, scope: &Scope, formatter: &Formatter) -> Result<()> {
    let edges = store.list_edges(scope)?;
    let names = member_names(store)?;
    println!("{}", formatter.format_edges(&edges, &names)?);
    Ok(())
}
