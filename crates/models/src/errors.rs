use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    /// One message per violated field, in the order the checks ran.
    #[error("validation error: {}", .0.join("; "))]
    Validation(Vec<String>),
}

impl ModelError {
    pub fn messages(&self) -> &[String] {
        match self {
            Self::Validation(msgs) => msgs,
        }
    }
}
