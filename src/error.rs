use thiserror::Error;

#[derive(Error, Debug)]
pub enum CardError {
    #[error("Card number contains a non-digit character: '{0}'")]
    InvalidCharacter(char),

    #[error("Card number has {0} digit(s), at least {min} are required", min = crate::card::MIN_DIGITS)]
    TooShort(usize),

    #[error("Failed to read input")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CardError>;
