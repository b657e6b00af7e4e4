use thiserror::Error;

/// Malformed input, detected before the model is touched.
///
/// Parse failures never mutate the model. Command-shape failures carry the
/// command's usage string; field failures carry that field's own constraint
/// message instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Invalid command format! \n{usage}")]
    InvalidFormat { usage: &'static str },

    #[error("Unknown command")]
    UnknownCommand,

    /// A field value failed its type's validation; the message is the field's.
    #[error("{0}")]
    Field(&'static str),

    /// A prefix was present but its value was blank where one is required.
    #[error("{0}")]
    Empty(&'static str),

    #[error("Multiple values specified for the following single-valued field(s): {0}")]
    DuplicatePrefixes(String),

    #[error("At least one field to edit must be provided.")]
    NothingToEdit,
}

/// Well-formed input that is invalid against the current model state.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("This person already exists in TAssist")]
    DuplicatePerson,

    #[error("The person index provided is invalid")]
    InvalidIndex,
}

#[derive(Error, Debug)]
pub enum TassistError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Command(#[from] CommandError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Storage error: {0}")]
    Storage(String),
}

pub type Result<T> = std::result::Result<T, TassistError>;
