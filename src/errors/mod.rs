use thiserror::Error;

/// Data-integrity failures raised while reading stats pages
#[derive(Debug, Error, PartialEq)]
pub enum StatsError {
    /// A single season row carried more than one MVP voting finish
    #[error("more than one MVP award in season {year}: {awards:?}")]
    MultipleMvpAwards { year: String, awards: Vec<String> },
}

/// Add context to selector/regex construction errors
pub fn pattern_context(pattern: &str) -> String {
    format!("Failed to compile pattern: {}", pattern)
}
