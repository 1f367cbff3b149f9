use std::fmt;

/// An image could not be loaded: the resource was unreachable, or its data is
/// corrupted or in an unsupported format.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageLoadingError(pub String);

impl ImageLoadingError {
    pub(crate) fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }
}

impl From<anyhow::Error> for ImageLoadingError {
    fn from(err: anyhow::Error) -> Self {
        Self(format!("{err:#}"))
    }
}

impl fmt::Display for ImageLoadingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for ImageLoadingError {}
