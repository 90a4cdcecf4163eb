//! Member module - the people a kinship graph is made of

use std::fmt;

/// Unique identifier for a member based on UUIDv7
///
/// Ordering follows the underlying 128-bit value, which makes it usable as a
/// deterministic tie-break anywhere members need a stable order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MemberId(u128);

impl MemberId {
    /// Generate a new UUIDv7-based MemberId
    ///
    /// # Examples
    ///
    /// ```
    /// use kinship_domain::MemberId;
    ///
    /// let id = MemberId::new();
    /// assert!(id.value() > 0);
    /// ```
    pub fn new() -> Self {
        Self(uuid::Uuid::now_v7().as_u128())
    }

    /// Create a MemberId from a raw u128 value
    ///
    /// This is primarily for storage layer deserialization and fixtures.
    pub fn from_value(value: u128) -> Self {
        Self(value)
    }

    /// Parse a MemberId from a UUID string
    ///
    /// # Examples
    ///
    /// ```
    /// use kinship_domain::MemberId;
    ///
    /// let id = MemberId::new();
    /// let parsed = MemberId::from_string(&id.to_string()).unwrap();
    /// assert_eq!(id, parsed);
    /// ```
    pub fn from_string(s: &str) -> Result<Self, String> {
        uuid::Uuid::parse_str(s)
            .map(|u| Self(u.as_u128()))
            .map_err(|e| format!("Invalid member id: {}", e))
    }

    /// Get the raw u128 value
    pub fn value(&self) -> u128 {
        self.0
    }
}

impl Default for MemberId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for MemberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", uuid::Uuid::from_u128(self.0))
    }
}

/// Gender attribute used to pick gendered kinship terms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Gender {
    /// Selects masculine terms (Father, Uncle, ...)
    Male,

    /// Selects feminine terms (Mother, Aunt, ...)
    Female,

    /// Selects neutral terms (Parent, Pibling, ...)
    #[default]
    Unspecified,
}

impl Gender {
    /// Get the gender name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Unspecified => "unspecified",
        }
    }

    /// Parse a gender from a string (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" => Some(Gender::Male),
            "female" | "f" => Some(Gender::Female),
            "unspecified" | "" => Some(Gender::Unspecified),
            _ => None,
        }
    }
}

impl std::str::FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid gender: {}", s))
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A member of a community
///
/// Owned by the member registry; kinship resolution only reads it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    /// Unique identifier
    pub id: MemberId,

    /// Display name
    pub name: String,

    /// Optional gender attribute
    pub gender: Gender,
}

impl Member {
    /// Create a new member with a freshly generated id
    pub fn new(name: impl Into<String>, gender: Gender) -> Self {
        Self {
            id: MemberId::new(),
            name: name.into(),
            gender,
        }
    }

    /// Create a member with an explicit id
    pub fn with_id(id: MemberId, name: impl Into<String>, gender: Gender) -> Self {
        Self {
            id,
            name: name.into(),
            gender,
        }
    }
}
