//! Probabilistic membership filtering
//!
//! Fast-reject layer used in front of the authoritative credential maps.

pub mod bloom;
pub mod hashes;

pub use bloom::MembershipFilter;
