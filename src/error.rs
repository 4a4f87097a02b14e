use crate::grammar::ParseError;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid category name {name:?}")]
    InvalidCategory { name: String },

    #[error("failed to generate `{category}`: {source}")]
    MalformedLine {
        category: String,
        #[source]
        source: ParseError,
    },
}

impl Error {
    /// The grammar line that aborted generation, if any.
    pub fn line(&self) -> Option<&str> {
        match self {
            Error::InvalidCategory { .. } => None,
            Error::MalformedLine { source, .. } => Some(source.line.as_str()),
        }
    }
}
