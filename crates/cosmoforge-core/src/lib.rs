//! Cosmoforge Core -- the progression calculation engine for space-empire games.
//!
//! This crate answers three questions about every buildable or researchable
//! entity of a game account, purely from numeric state: what does the next
//! level cost, how long does it take to build, and are its prerequisites met.
//! The arithmetic reproduces the reference game server bit-for-bit
//! (exponential cost growth with half-up rounding, facility-divided build
//! times truncated to whole seconds), so consuming automation can schedule
//! build orders without drifting from the server.
//!
//! # Calculation Flow
//!
//! Callers supply a target entity, a target level, the empire's current
//! levels, and the universe speed; the engine returns cost, time, and
//! feasibility. Nothing here performs I/O or holds state between calls.
//!
//! ```rust
//! use cosmoforge_core::catalog::Catalog;
//! use cosmoforge_core::facilities::Facilities;
//! use cosmoforge_core::standard;
//! use cosmoforge_core::{cost, time};
//!
//! let catalog = Catalog::standard();
//! let facilities = Facilities { research_lab: 3, ..Facilities::default() };
//! let price = cost::cost_in(catalog, standard::ENERGY_TECHNOLOGY, 5).unwrap();
//! let wait = time::construction_time_in(catalog, standard::ENERGY_TECHNOLOGY, 5, 7, &facilities).unwrap();
//! assert_eq!(wait.as_secs(), 1645);
//! assert_eq!(price.crystal, 12_800);
//! ```
//!
//! # Key Types
//!
//! - [`catalog::Catalog`] -- Immutable registry of entity definitions
//!   (frozen at startup, shared across threads).
//! - [`resources::Resources`] -- Metal/crystal/deuterium/energy amounts
//!   with saturating arithmetic.
//! - [`facilities::Facilities`] -- Snapshot of the four time-dividing
//!   facility levels.
//! - [`requirements::LevelMap`] -- Caller-owned map of current entity
//!   levels (absent = 0).
//! - [`query::UpgradeReport`] -- Combined cost/time/feasibility answer for
//!   one candidate upgrade.
//! - [`serialize`] -- Versioned binary catalog snapshots via bitcode.
//! - [`standard`] -- The reference server's constant table and entity ids.

pub mod catalog;
pub mod cost;
pub mod error;
pub mod facilities;
pub mod id;
pub mod query;
pub mod requirements;
pub mod resources;
pub mod serialize;
pub mod standard;
pub mod time;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use error::CalcError;
pub use id::{EntityId, Level, UniverseSpeed};
