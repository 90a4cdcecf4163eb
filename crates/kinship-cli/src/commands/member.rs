//! Member command implementation.

use crate::cli::{MemberAction, MemberArgs};
use crate::error::{CliError, Result};
use crate::output::Formatter;
use kinship_domain::traits::RelationshipStore;
use kinship_domain::Member;
use kinship_store::SqliteStore;

/// Execute the member command.
pub fn execute_member(args: MemberArgs, store: &mut SqliteStore, formatter: &Formatter) -> Result<()> {
    match args.action {
        MemberAction::Add { name, gender } => {
            let name = name.trim();
            if name.is_empty() {
                return Err(CliError::InvalidInput("Member name cannot be empty".to_string()));
            }

            if store.find_member_by_name(name)?.is_some() {
                eprintln!(
                    "{}",
                    formatter.warning(&format!("Another member is already named '{}'", name))
                );
            }

            let member = Member::new(name, gender.into());
            store.add_member(member.clone())?;
            tracing::info!("Added member {} ({})", member.name, member.id);

            if formatter.is_json() {
                println!("{}", formatter.format_members(&[member])?);
            } else {
                println!("{}", formatter.success(&format!("Member added: {} ({})", member.name, member.id)));
            }
        }
        MemberAction::List => {
            let members = store.list_members()?;
            println!("{}", formatter.format_members(&members)?);
        }
    }

    Ok(())
}
