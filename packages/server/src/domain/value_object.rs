//! Value objects
//!
//! 生成時に検証を行い、不正な値を持つインスタンスが存在しないことを保証します。

use std::{fmt, net::IpAddr};

use uuid::Uuid;

use super::error::ValueObjectError;

/// Server-assigned identity of one connection.
///
/// Lives exactly as long as the connection; never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConnectionId(Uuid);

impl ConnectionId {
    pub fn new(id: Uuid) -> Self {
        Self(id)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for ConnectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Factory for fresh connection identities
pub struct ConnectionIdFactory;

impl ConnectionIdFactory {
    /// Generate a new random (UUID v4) connection id
    pub fn generate() -> ConnectionId {
        ConnectionId(Uuid::new_v4())
    }
}

/// Network origin of a client (forwarded-for entry or peer IP)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OriginAddress(String);

impl OriginAddress {
    pub fn new(value: String) -> Result<Self, ValueObjectError> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValueObjectError::EmptyOriginAddress);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<IpAddr> for OriginAddress {
    fn from(ip: IpAddr) -> Self {
        Self(ip.to_string())
    }
}

impl TryFrom<String> for OriginAddress {
    type Error = ValueObjectError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Display for OriginAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Trimmed, non-empty user-agent string of a client
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ClientAgent(String);

impl ClientAgent {
    pub fn new(value: String) -> Result<Self, ValueObjectError> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValueObjectError::EmptyClientAgent);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ClientAgent {
    type Error = ValueObjectError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Position of a cell inside a canvas of known length.
///
/// Only obtainable through `PixelIndex::checked`, so it is always `< cell_count`
/// of the canvas it was checked against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PixelIndex(usize);

impl PixelIndex {
    /// Returns `None` unless `0 <= raw < cell_count`
    pub fn checked(raw: i64, cell_count: usize) -> Option<Self> {
        let index = usize::try_from(raw).ok()?;
        (index < cell_count).then_some(Self(index))
    }

    pub fn value(&self) -> usize {
        self.0
    }
}

/// Unix timestamp in milliseconds
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Timestamp(i64);

impl Timestamp {
    pub fn new(millis: i64) -> Self {
        Self(millis)
    }

    pub fn value(&self) -> i64 {
        self.0
    }

    /// Milliseconds from `earlier` to `self` (negative if the clock went backwards)
    pub fn millis_since(&self, earlier: Timestamp) -> i64 {
        self.0.saturating_sub(earlier.0)
    }
}
