//! Port traits defining external boundaries.
//!
//! Each trait represents a boundary between the quest log and something it
//! does not own (time, identifiers, the signed-in player).
//! Implementations live in `src/adapters/`.

pub mod clock;
pub mod id_gen;
pub mod identity;

pub use clock::Clock;
pub use id_gen::IdGenerator;
pub use identity::IdentityProvider;
