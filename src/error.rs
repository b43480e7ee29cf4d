use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by the client itself.
///
/// Transport errors are not part of this enum: they keep the error type of the
/// [`HttpSender`](crate::HttpSender) that produced them.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("environment id cannot be empty")]
    EmptyEnvironmentId,
    #[error("invalid base_url configuration")]
    InvalidBaseUrl(#[source] url::ParseError),
    #[error("base_url {0:?} cannot have path segments")]
    BaseUrlCannotBeABase(String),
    #[error("unknown response mode {0:?}, expected one of \"normal\", \"simple\" or \"full\"")]
    InvalidMode(String),
}
