use std::fmt;

#[derive(Debug)]
pub enum StoreError {
    NotFound(&'static str),
    DatabaseError(sqlx::Error),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::NotFound(what) => write!(f, "{} not found", what),
            StoreError::DatabaseError(e) => write!(f, "database error: {}", e),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StoreError::DatabaseError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<sqlx::Error> for StoreError {
    fn from(value: sqlx::Error) -> Self {
        Self::DatabaseError(value)
    }
}

impl StoreError {
    /// True when the underlying driver reported a UNIQUE constraint failure,
    /// e.g. a second user registered with an already-taken username or email.
    pub fn is_unique_violation(&self) -> bool {
        match self {
            StoreError::DatabaseError(sqlx::Error::Database(e)) => {
                e.message().contains("UNIQUE constraint failed")
            }
            _ => false,
        }
    }

    /// True when the underlying driver rejected a write for violating a CHECK
    /// or foreign-key constraint.
    pub fn is_constraint_violation(&self) -> bool {
        match self {
            StoreError::DatabaseError(sqlx::Error::Database(e)) => {
                let message = e.message();
                message.contains("constraint failed") || message.contains("FOREIGN KEY")
            }
            _ => false,
        }
    }
}
