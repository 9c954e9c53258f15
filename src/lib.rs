//! Farm asset management: farms, their reservoirs and areas, and the
//! materials kept in inventory.
//!
//! Farms hold denormalized mirrors of their reservoirs and areas; the
//! command handlers keep those mirrors in step through
//! [`domain::farm::mutate_and_sync`]. Materials are folds over an
//! append-only transition log.

pub mod config;
pub mod domain;
pub mod event_sourcing;
pub mod repository;
pub mod validation;
