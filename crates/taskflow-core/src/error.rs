use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Invariant violated: {0}")]
    Invariant(String),
}

impl CoreError {
    pub(crate) fn task_not_found(id: impl std::fmt::Display) -> Self {
        CoreError::NotFound(format!("task {id}"))
    }

    pub(crate) fn series_not_found(id: impl std::fmt::Display) -> Self {
        CoreError::NotFound(format!("series {id}"))
    }

    pub(crate) fn category_not_found(id: impl std::fmt::Display) -> Self {
        CoreError::NotFound(format!("category {id}"))
    }
}
