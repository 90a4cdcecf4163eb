//! Kinship Storage Layer
//!
//! Implements the RelationshipStore trait on top of SQLite.
//!
//! # Architecture
//!
//! - `members` holds the member registry (id, name, gender)
//! - `relationships` holds scoped edges exactly as they were recorded
//! - Deduplication of symmetric edges is left to the graph builder, which
//!   has to cope with either orientation anyway
//!
//! # Examples
//!
//! ```no_run
//! use kinship_store::SqliteStore;
//!
//! let store = SqliteStore::new(":memory:").unwrap();
//! // Store is now ready for member and relationship operations
//! ```

#![warn(missing_docs)]

use kinship_domain::{Gender, Member, MemberId, RelationshipEdge, RelationshipType, Scope};
use kinship_domain::traits::RelationshipStore;
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};
use thiserror::Error;

/// Errors that can occur during storage operations
#[derive(Error, Debug)]
pub enum StoreError {
    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// Member not found
    #[error("Member not found: {0}")]
    NotFound(String),

    /// Invalid data format
    #[error("Invalid data: {0}")]
    InvalidData(String),

    /// Duplicate member detected
    #[error("Duplicate member detected")]
    Duplicate,
}

/// SQLite-based implementation of RelationshipStore
///
/// # Thread Safety
///
/// SQLite connections are not thread-safe. Each thread should have its own
/// SqliteStore instance; resolution itself runs on the snapshot built from
/// the store, which can be shared freely.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Create a new SqliteStore with the given database path
    ///
    /// Use `:memory:` for an in-memory database (useful for testing).
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let conn = Connection::open(path)?;
        let mut store = Self { conn };
        store.initialize_schema()?;
        Ok(store)
    }

    /// Initialize the database schema
    fn initialize_schema(&mut self) -> Result<(), StoreError> {
        let schema = include_str!("schema.sql");
        self.conn.execute_batch(schema)?;
        Ok(())
    }

    /// Update the gender of an existing member
    pub fn set_gender(&mut self, id: MemberId, gender: Gender) -> Result<(), StoreError> {
        let updated = self.conn.execute(
            "UPDATE members SET gender = ?1 WHERE id = ?2",
            params![gender.as_str(), Self::member_id_to_bytes(id)],
        )?;

        if updated == 0 {
            return Err(StoreError::NotFound(id.to_string()));
        }
        Ok(())
    }

    /// List the distinct scopes that hold at least one edge
    pub fn list_scopes(&self) -> Result<Vec<Scope>, StoreError> {
        let mut stmt = self
            .conn
            .prepare("SELECT DISTINCT scope FROM relationships ORDER BY scope")?;

        let scopes = stmt
            .query_map([], |row| row.get::<_, String>(0))?
            .map(|r| r.map(Scope::new))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(scopes)
    }

    /// Convert MemberId to bytes for storage
    fn member_id_to_bytes(id: MemberId) -> Vec<u8> {
        id.value().to_be_bytes().to_vec()
    }

    /// Convert bytes to MemberId
    fn bytes_to_member_id(bytes: &[u8]) -> Result<MemberId, StoreError> {
        if bytes.len() != 16 {
            return Err(StoreError::InvalidData(format!(
                "Expected 16 bytes for MemberId, got {}",
                bytes.len()
            )));
        }
        let mut arr = [0u8; 16];
        arr.copy_from_slice(bytes);
        Ok(MemberId::from_value(u128::from_be_bytes(arr)))
    }

    /// Read a member id column, surfacing conversion failures as SQLite errors
    fn member_id_column(row: &Row<'_>, idx: usize) -> rusqlite::Result<MemberId> {
        let bytes: Vec<u8> = row.get(idx)?;
        Self::bytes_to_member_id(&bytes).map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(idx, rusqlite::types::Type::Blob, Box::new(e))
        })
    }

    /// Map a `members` row (id, name, gender)
    fn row_to_member(row: &Row<'_>) -> rusqlite::Result<Member> {
        let gender: String = row.get(2)?;
        Ok(Member {
            id: Self::member_id_column(row, 0)?,
            name: row.get(1)?,
            gender: Gender::parse(&gender).unwrap_or_default(),
        })
    }

    /// Current timestamp in seconds since Unix epoch
    fn current_timestamp() -> i64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs() as i64)
            .unwrap_or(0)
    }
}

impl RelationshipStore for SqliteStore {
    type Error = StoreError;

    fn add_member(&mut self, member: Member) -> Result<MemberId, Self::Error> {
        let id_bytes = Self::member_id_to_bytes(member.id);

        let exists: bool = self
            .conn
            .query_row(
                "SELECT 1 FROM members WHERE id = ?1",
                params![&id_bytes],
                |_| Ok(true),
            )
            .optional()?
            .unwrap_or(false);

        if exists {
            return Err(StoreError::Duplicate);
        }

        self.conn.execute(
            "INSERT INTO members (id, name, gender) VALUES (?1, ?2, ?3)",
            params![&id_bytes, &member.name, member.gender.as_str()],
        )?;

        Ok(member.id)
    }

    fn get_member(&self, id: MemberId) -> Result<Option<Member>, Self::Error> {
        let member = self
            .conn
            .query_row(
                "SELECT id, name, gender FROM members WHERE id = ?1",
                params![Self::member_id_to_bytes(id)],
                Self::row_to_member,
            )
            .optional()?;

        Ok(member)
    }

    fn find_member_by_name(&self, name: &str) -> Result<Option<Member>, Self::Error> {
        // Lowest id wins when names collide so lookups stay deterministic
        let member = self
            .conn
            .query_row(
                "SELECT id, name, gender FROM members WHERE name = ?1 ORDER BY id LIMIT 1",
                params![name],
                Self::row_to_member,
            )
            .optional()?;

        Ok(member)
    }

    fn list_members(&self) -> Result<Vec<Member>, Self::Error> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, name, gender FROM members ORDER BY id")?;

        let members = stmt
            .query_map([], Self::row_to_member)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(members)
    }

    fn add_relationship(&mut self, edge: RelationshipEdge) -> Result<(), Self::Error> {
        self.conn.execute(
            "INSERT INTO relationships (scope, member_a, member_b, relationship_type, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5)
             ON CONFLICT(scope, member_a, member_b, relationship_type) DO NOTHING",
            params![
                edge.scope.as_str(),
                Self::member_id_to_bytes(edge.from),
                Self::member_id_to_bytes(edge.to),
                edge.relationship_type.as_str(),
                Self::current_timestamp(),
            ],
        )?;

        Ok(())
    }

    fn remove_relationship(&mut self, edge: &RelationshipEdge) -> Result<bool, Self::Error> {
        let from = Self::member_id_to_bytes(edge.from);
        let to = Self::member_id_to_bytes(edge.to);
        let rel_type = edge.relationship_type.as_str();

        let mut removed = self.conn.execute(
            "DELETE FROM relationships
             WHERE scope = ?1 AND member_a = ?2 AND member_b = ?3 AND relationship_type = ?4",
            params![edge.scope.as_str(), &from, &to, rel_type],
        )?;

        // Symmetric edges may have been recorded the other way round
        if edge.relationship_type.is_symmetric() {
            removed += self.conn.execute(
                "DELETE FROM relationships
                 WHERE scope = ?1 AND member_a = ?2 AND member_b = ?3 AND relationship_type = ?4",
                params![edge.scope.as_str(), &to, &from, rel_type],
            )?;
        }

        Ok(removed > 0)
    }

    fn list_edges(&self, scope: &Scope) -> Result<Vec<RelationshipEdge>, Self::Error> {
        let mut stmt = self.conn.prepare(
            "SELECT member_a, member_b, relationship_type
             FROM relationships WHERE scope = ?1
             ORDER BY relationship_type, member_a, member_b",
        )?;

        let edges = stmt
            .query_map(params![scope.as_str()], |row| {
                let rel_type_str: String = row.get(2)?;
                let relationship_type = RelationshipType::parse(&rel_type_str).ok_or_else(|| {
                    rusqlite::Error::FromSqlConversionFailure(
                        2,
                        rusqlite::types::Type::Text,
                        Box::new(StoreError::InvalidData(format!(
                            "Unknown relationship type: {}",
                            rel_type_str
                        ))),
                    )
                })?;

                Ok(RelationshipEdge {
                    scope: scope.clone(),
                    from: Self::member_id_column(row, 0)?,
                    to: Self::member_id_column(row, 1)?,
                    relationship_type,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        tracing::debug!("Loaded {} edges for scope '{}'", edges.len(), scope);
        Ok(edges)
    }

    fn get_gender(&self, id: MemberId) -> Result<Gender, Self::Error> {
        let gender: Option<String> = self
            .conn
            .query_row(
                "SELECT gender FROM members WHERE id = ?1",
                params![Self::member_id_to_bytes(id)],
                |row| row.get(0),
            )
            .optional()?;

        Ok(gender
            .and_then(|g| Gender::parse(&g))
            .unwrap_or_default())
    }
}
