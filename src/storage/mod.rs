//! Persisted cycle state
//!
//! The engine is stateless between cycles; the binary keeps the cursor and
//! running totals in a small JSON file next to its config.

mod state_file;


pub use state_file::{PersistedState, StateFile};
