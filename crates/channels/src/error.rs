use std::error::Error as StdError;

/// Crate-wide result type for channel operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Typed channel errors shared across channel traits.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Input payload or parameter is invalid.
    #[error("invalid channel input: {message}")]
    InvalidInput { message: String },

    /// A chunk could not be delivered. Chunks before `index` were sent,
    /// chunks from `index` on were not.
    #[error("failed to deliver chunk {position} of {total}: {source}", position = .index + 1)]
    Delivery {
        index: usize,
        total: usize,
        #[source]
        source: Box<Error>,
    },

    /// Wrapped source error from an external dependency.
    #[error("channel operation failed: {context}: {source}")]
    External {
        context: String,
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },
}

impl Error {
    #[must_use]
    pub fn invalid_input(message: impl std::fmt::Display) -> Self {
        Self::InvalidInput {
            message: message.to_string(),
        }
    }

    #[must_use]
    pub fn external(
        context: impl Into<String>,
        source: impl StdError + Send + Sync + 'static,
    ) -> Self {
        Self::External {
            context: context.into(),
            source: Box::new(source),
        }
    }

    /// Index of the chunk that failed, for delivery errors.
    #[must_use]
    pub fn failed_chunk(&self) -> Option<usize> {
        match self {
            Self::Delivery { index, .. } => Some(*index),
            _ => None,
        }
    }
}

#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delivery_error_reports_one_based_position() {
        let err = Error::Delivery {
            index: 1,
            total: 3,
            source: Box::new(Error::invalid_input("chat not found")),
        };
        assert_eq!(
            err.to_string(),
            "failed to deliver chunk 2 of 3: invalid channel input: chat not found"
        );
        assert_eq!(err.failed_chunk(), Some(1));
    }

    #[test]
    fn external_keeps_source() {
        let io = std::io::Error::other("connection reset");
        let err = Error::external("send chunk", io);
        assert!(err.source().is_some());
        assert_eq!(err.failed_chunk(), None);
    }
}
