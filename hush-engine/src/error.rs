//! Engine errors.

/// Errors that can occur while building the engine's matcher sets.
///
/// These are construction-time only: once a session is up, classification and
/// suppression never fail. The worst failure mode is under- or
/// over-suppression, not a crash of the scan loop.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("Lexical pattern set failed to compile: {0}")]
    Pattern(#[from] regex::Error),

    #[error("Structural marker set failed to compile: {0}")]
    Marker(#[from] aho_corasick::BuildError),
}
