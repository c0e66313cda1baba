//! Runtime-tunable search parameters.
//!
//! Holds the engine's named search coefficients, each tuned externally as a
//! scaled integer and consumed internally as a real number. A controller
//! (or tuning harness) can read and rewrite values while the engine runs,
//! through the option-declaration and JSON report formats or the update
//! entry point on [`Registry`].

mod defaults;
mod registry;
mod tunable;

pub use defaults::{default_registry, defaults};
pub use registry::Registry;
pub use tunable::Tunable;
