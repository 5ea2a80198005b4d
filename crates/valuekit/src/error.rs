use thiserror::Error;

/// Errors produced by the internal fallible layer.
///
/// These never escape the public predicates, comparators, or configurators:
/// each public function collapses them to its documented fail-safe result
/// (`true` for nullness checks, `false` for comparisons, the caller default
/// for accessors) and emits a `tracing` debug event instead.
#[derive(Error, Debug)]
pub enum ValueError {
    #[error("invalid JSON text: {0}")]
    JsonText(#[from] serde_json::Error),

    #[error("JSON text is not an object: {0}")]
    NotAnObject(&'static str),

    #[error("invalid replace pattern: {0}")]
    Pattern(#[from] regex::Error),
}
