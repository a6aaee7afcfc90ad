//! hush classification engine.
//!
//! A rule-based, sensitivity-tiered text classifier that runs repeatedly and
//! incrementally over a mutating tree of content. Fragments (text runs plus
//! their nearest element container) are classified against per-category,
//! per-severity-tier pattern sets; matched containers are suppressed from
//! view exactly once. A per-fragment domain heuristic (news vs. social)
//! selects which configured strictness applies.
//!
//! Everything here is synchronous, single-threaded CPU work bounded by the
//! size of newly inserted subtrees, never the whole document.

pub mod ads;
pub mod advisory;
pub mod catalog;
pub mod classify;
pub mod error;
pub mod scan;
pub mod session;
pub mod suppress;
pub mod tree;

pub use ads::AdDetector;
pub use catalog::{PatternCatalog, TieredMatcher};
pub use classify::{Classifier, DomainHeuristic};
pub use error::EngineError;
pub use scan::{ScanDriver, ScanPassStats};
pub use session::SessionContext;
pub use suppress::SuppressionEngine;
pub use tree::{ContentTree, Fragment, NodeId, NodeSpec, Subscription};
