use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum ProductListError {
    /// An argument is outside the range the operation accepts.
    InvalidArgument { name: &'static str, reason: String },
}

impl ProductListError {
    pub(crate) fn invalid_argument(name: &'static str, reason: impl Into<String>) -> Self {
        ProductListError::InvalidArgument {
            name,
            reason: reason.into(),
        }
    }
}

impl fmt::Display for ProductListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProductListError::InvalidArgument { name, reason } => {
                write!(f, "invalid argument `{name}`: {reason}")
            }
        }
    }
}

impl std::error::Error for ProductListError {}
