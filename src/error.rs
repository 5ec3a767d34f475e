//! Error taxonomy for the scoring pipeline.
//!
//! Keep the surface small: the pipeline either completes fully or fails
//! before producing any output, so two variants cover every contract
//! violation a caller can trigger. A flat (zero-variance) input is defined
//! behavior, an all-zero mask and score `0`, and never surfaces here.
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Zero-area dimensions or a pixel buffer inconsistent with them.
    #[error("invalid image: {0}")]
    InvalidImage(String),

    /// Threshold pair outside `0 <= low <= high <= 1`.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_violated_contract() {
        let img = Error::InvalidImage("zero-area dimensions 0x10".into());
        assert_eq!(img.to_string(), "invalid image: zero-area dimensions 0x10");

        let cfg = Error::InvalidConfiguration("threshold pair (0.5, 0.2)".into());
        assert!(cfg.to_string().starts_with("invalid configuration:"));
    }
}
