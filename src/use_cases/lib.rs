use std::fmt;

pub mod recurrence;

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    BadRequest(String), // 400
}

impl fmt::Display for UseCaseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UseCaseError::BadRequest(message) => write!(f, "Bad request: {}", message),
        }
    }
}
