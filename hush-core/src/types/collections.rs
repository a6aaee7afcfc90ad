//! Hash collections used across the workspace.
//!
//! FxHash is a non-cryptographic hasher; node ids and small string keys are
//! the only key types we hash, so DoS resistance is not a concern here.

pub use rustc_hash::{FxHashMap, FxHashSet};
