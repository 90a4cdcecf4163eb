//! Command implementations.

pub mod edges;
pub mod label;
pub mod member;
pub mod relate;
pub mod roster;

pub use self::edges::execute_edges;
pub use self::label::execute_label;
pub use self::member::execute_member;
pub use self::relate::{execute_relate, execute_unrelate};
pub use self::roster::execute_roster;

use crate::error::{CliError, Result};
use kinship_domain::traits::RelationshipStore;
use kinship_domain::{Member, MemberId};
use kinship_store::SqliteStore;
use std::collections::HashMap;

/// Look a member up by UUID, falling back to an exact name match.
pub fn find_member(store: &SqliteStore, reference: &str) -> Result<Member> {
    if let Ok(id) = MemberId::from_string(reference) {
        if let Some(member) = store.get_member(id)? {
            return Ok(member);
        }
    }

    store
        .find_member_by_name(reference)?
        .ok_or_else(|| CliError::MemberNotFound(reference.to_string()))
}

/// Display names of every registered member.
pub fn member_names(store: &SqliteStore) -> Result<HashMap<MemberId, String>> {
    Ok(store
        .list_members()?
        .into_iter()
        .map(|member| (member.id, member.name))
        .collect())
}
