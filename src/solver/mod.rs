//! Automated guessing
//!
//! Used by the simulation command to drive the engine without a player.

mod consistent;

pub use consistent::ConsistentGuesser;
