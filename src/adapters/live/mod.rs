//! Live adapters backed by the process environment.

pub mod clock;
pub mod id_gen;
pub mod identity;

pub use clock::LiveClock;
pub use id_gen::LiveIdGenerator;
pub use identity::EnvIdentity;
