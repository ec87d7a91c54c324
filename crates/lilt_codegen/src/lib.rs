//! JavaScript emission for classified lilt statements.
//!
//! Transforms:
//! - `value n is 25`       → `let n = 25;`
//! - `until n equals max`  → `while (n !== max) {`
//! - `log 'hi {name}'`     → ``console.log(`hi ${name}`);``
//! - `using fetch`         → the registry's fetch helper block

pub mod emit;
pub mod emitter;
pub mod registry;

pub use emit::emit_statement;
pub use emitter::Emitter;
