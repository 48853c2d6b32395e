use thiserror::Error;

/// Top-level error type for the page-curl engine.
#[derive(Debug, Error)]
pub enum CurlError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Page(#[from] PageError),
}

/// Errors related to engine configuration and viewport setup.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid viewport {width} x {height}: dimensions must be positive and finite")]
    InvalidViewport { width: f64, height: f64 },

    #[error("{parameter} = {value} must be positive and finite")]
    NonPositive { parameter: &'static str, value: f64 },

    #[error("{0} must be a non-zero duration")]
    InvalidDuration(&'static str),
}

/// Errors related to page bookkeeping.
#[derive(Debug, Error)]
pub enum PageError {
    #[error("page index {index} is out of range for {page_count} pages")]
    IndexOutOfRange { index: usize, page_count: usize },
}

/// Convenience type alias for results using [`CurlError`].
pub type Result<T> = std::result::Result<T, CurlError>;
