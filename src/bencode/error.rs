use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BencodeError {
    #[error("document length {0} is outside the accepted range")]
    DocumentLength(usize),

    #[error("top-level value is not a non-empty dictionary")]
    RootNotDictionary,
}
