use common::format_validation_errors;
use sea_orm::{DbErr, EntityTrait};
use validator::ValidationErrors;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] DbErr),

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Password hashing failed: {0}")]
    PasswordHash(String),
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        AppError::Validation(format_validation_errors(&errors))
    }
}

/// Converts a validated create payload into an insertable active model.
pub trait ToActiveModel<E>
where
    E: EntityTrait,
{
    fn into_active_model(self) -> Result<<E as EntityTrait>::ActiveModel, AppError>;
}
