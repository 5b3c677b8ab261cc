//! Binary catalog snapshots.
//!
//! Freezes a catalog's entry table to a compact `bitcode` blob with a
//! versioned header, so tools can ship or cache a table without re-parsing
//! data files. Thawing re-registers every entry through [`CatalogBuilder`],
//! so a tampered blob fails the same validation a hand-built table would.

use crate::catalog::{Catalog, CatalogBuilder, CatalogError, EntityDef};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Magic number identifying a catalog snapshot.
pub const SNAPSHOT_MAGIC: u32 = 0xC05F_0001;

/// Current format version. Increment when breaking the wire format.
pub const FORMAT_VERSION: u32 = 1;

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Errors that can occur while freezing a catalog.
#[derive(Debug, thiserror::Error)]
pub enum SerializeError {
    #[error("bitcode encoding failed: {0}")]
    Encode(String),
}

/// Errors that can occur while thawing a catalog.
#[derive(Debug, thiserror::Error)]
pub enum DeserializeError {
    #[error("invalid magic number: expected 0x{:08X}, got 0x{:08X}", SNAPSHOT_MAGIC, .0)]
    InvalidMagic(u32),
    #[error("snapshot from future version {0} (this build supports up to {FORMAT_VERSION})")]
    FutureVersion(u32),
    #[error("unsupported format version: expected {}, got {}", FORMAT_VERSION, .0)]
    UnsupportedVersion(u32),
    #[error("bitcode decoding failed: {0}")]
    Decode(String),
    #[error("snapshot holds an invalid table: {0}")]
    Invalid(#[from] CatalogError),
}

// ---------------------------------------------------------------------------
// Snapshot header
// ---------------------------------------------------------------------------

/// Header prepended to every serialized catalog. Enables format detection
/// and version checking before rebuilding the table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotHeader {
    /// Magic number for format detection.
    pub magic: u32,
    /// Format version for forward compatibility.
    pub version: u32,
    /// Number of entries in the payload.
    pub entry_count: u32,
}

impl SnapshotHeader {
    /// Create a header for the current format version.
    pub fn new(entry_count: u32) -> Self {
        Self {
            magic: SNAPSHOT_MAGIC,
            version: FORMAT_VERSION,
            entry_count,
        }
    }

    /// Validate the header. Returns `Ok(())` if valid.
    pub fn validate(&self) -> Result<(), DeserializeError> {
        if self.magic != SNAPSHOT_MAGIC {
            return Err(DeserializeError::InvalidMagic(self.magic));
        }
        if self.version > FORMAT_VERSION {
            return Err(DeserializeError::FutureVersion(self.version));
        }
        if self.version < FORMAT_VERSION {
            return Err(DeserializeError::UnsupportedVersion(self.version));
        }
        Ok(())
    }
}

/// Try to read just the snapshot header from serialized data.
///
/// Decodes the full snapshot but only returns the header; bitcode does not
/// support partial deserialization.
pub fn read_snapshot_header(data: &[u8]) -> Result<SnapshotHeader, DeserializeError> {
    let snapshot: CatalogSnapshot =
        bitcode::deserialize(data).map_err(|e| DeserializeError::Decode(e.to_string()))?;
    Ok(snapshot.header)
}

// ---------------------------------------------------------------------------
// Snapshot payload
// ---------------------------------------------------------------------------

/// The serialized form: a header plus the entries in registration order.
/// Derived lookup maps are rebuilt on thaw, not stored.
#[derive(Debug, Serialize, Deserialize)]
struct CatalogSnapshot {
    header: SnapshotHeader,
    entries: Vec<EntityDef>,
}

// ---------------------------------------------------------------------------
// Freeze / thaw
// ---------------------------------------------------------------------------

/// Serialize a catalog to a binary blob via bitcode.
pub fn serialize_catalog(catalog: &Catalog) -> Result<Vec<u8>, SerializeError> {
    let snapshot = CatalogSnapshot {
        header: SnapshotHeader::new(catalog.len() as u32),
        entries: catalog.all().to_vec(),
    };
    bitcode::serialize(&snapshot).map_err(|e| SerializeError::Encode(e.to_string()))
}

/// Deserialize a catalog from a binary blob.
///
/// Validates the header (magic number, version) and then re-registers every
/// entry, so all table invariants are checked again. Returns an error (not a
/// panic) on version mismatch or a corrupt table.
pub fn deserialize_catalog(data: &[u8]) -> Result<Catalog, DeserializeError> {
    let snapshot: CatalogSnapshot =
        bitcode::deserialize(data).map_err(|e| DeserializeError::Decode(e.to_string()))?;
    snapshot.header.validate()?;

    let mut builder = CatalogBuilder::new();
    for def in snapshot.entries {
        builder.register(def)?;
    }
    Ok(builder.build()?)
}

// ===========================================================================
// Tests
// ===========================================================================
