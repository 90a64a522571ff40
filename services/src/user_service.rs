use crate::service::{AppError, ToActiveModel};
use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
};
use chrono::Utc;
use db::models::user::{ActiveModel, Column, Entity, Model};
use rand::rngs::OsRng;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    Set,
};
use validator::Validate;

pub use db::models::user::Model as User;

#[derive(Debug, Clone, Validate)]
pub struct CreateUser {
    #[validate(length(min = 1, message = "Name cannot be empty"))]
    pub name: String,

    #[validate(email(message = "Invalid email address"))]
    pub email: String,

    #[validate(
        length(min = 1, max = 72, message = "Password must be between 1 and 72 characters"),
        must_match(
            other = "password_confirmation",
            message = "Password confirmation does not match"
        )
    )]
    pub password: String,

    pub password_confirmation: String,
}

impl ToActiveModel<Entity> for CreateUser {
    fn into_active_model(self) -> Result<ActiveModel, AppError> {
        self.validate()?;

        let now = Utc::now();
        Ok(ActiveModel {
            name: Set(self.name),
            email: Set(self.email),
            password_hash: Set(UserService::hash_password(&self.password)?),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        })
    }
}

pub struct UserService;

impl UserService {
    /// Validates `params`, hashes the password and inserts the user.
    ///
    /// Nothing is written when validation fails.
    pub async fn create(db: &DatabaseConnection, params: CreateUser) -> Result<Model, AppError> {
        let active = params.into_active_model()?;
        let user = active.insert(db).await?;
        log::info!("Created user {} <{}>", user.id, user.email);
        Ok(user)
    }

    /// Removes every user. Returns the number of rows deleted.
    pub async fn delete_all(db: &DatabaseConnection) -> Result<u64, AppError> {
        let res = Entity::delete_many().exec(db).await?;
        log::info!("Deleted {} users", res.rows_affected);
        Ok(res.rows_affected)
    }

    pub async fn count(db: &DatabaseConnection) -> Result<u64, AppError> {
        Ok(Entity::find().count(db).await?)
    }

    pub async fn find_by_email(
        db: &DatabaseConnection,
        email: &str,
    ) -> Result<Option<Model>, AppError> {
        Ok(Entity::find()
            .filter(Column::Email.eq(email.trim()))
            .one(db)
            .await?)
    }

    pub fn hash_password(password: &str) -> Result<String, AppError> {
        let salt = SaltString::generate(&mut OsRng);
        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| AppError::PasswordHash(e.to_string()))
    }

    pub fn verify_password(user: &Model, password: &str) -> bool {
        let parsed = match PasswordHash::new(&user.password_hash) {
            Ok(parsed) => parsed,
            Err(_) => return false,
        };

        Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use db::test_utils::setup_test_db;

    fn params(email: &str) -> CreateUser {
        CreateUser {
            name: "Test User".into(),
            email: email.into(),
            password: "secret1".into(),
            password_confirmation: "secret1".into(),
        }
    }

    #[tokio::test]
    async fn test_create_hashes_password() {
        let db = setup_test_db().await;

        let user = UserService::create(&db, params("hash@example.com"))
            .await
            .unwrap();

        assert_ne!(user.password_hash, "secret1");
        assert!(user.password_hash.starts_with("$argon2"));
        assert!(UserService::verify_password(&user, "secret1"));
        assert!(!UserService::verify_password(&user, "wrong"));
    }

    #[tokio::test]
    async fn test_create_rejects_mismatched_confirmation() {
        let db = setup_test_db().await;
        let mut p = params("mismatch@example.com");
        p.password_confirmation = "other".into();

        let err = UserService::create(&db, p).await.unwrap_err();

        assert!(
            matches!(&err, AppError::Validation(msg) if msg.contains("confirmation")),
            "unexpected error: {err}"
        );
        assert_eq!(UserService::count(&db).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_create_rejects_invalid_email() {
        let db = setup_test_db().await;

        let err = UserService::create(&db, params("not-an-email"))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn test_create_rejects_empty_name() {
        let db = setup_test_db().await;
        let mut p = params("noname@example.com");
        p.name = String::new();

        let err = UserService::create(&db, p).await.unwrap_err();

        assert!(matches!(&err, AppError::Validation(msg) if msg.contains("Name")));
    }

    #[tokio::test]
    async fn test_duplicate_email_is_database_error() {
        let db = setup_test_db().await;
        UserService::create(&db, params("dup@example.com"))
            .await
            .unwrap();

        let err = UserService::create(&db, params("dup@example.com"))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Database(_)));
        assert_eq!(UserService::count(&db).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_find_by_email_and_delete_all() {
        let db = setup_test_db().await;
        UserService::create(&db, params("a@example.com")).await.unwrap();
        UserService::create(&db, params("b@example.com")).await.unwrap();

        let found = UserService::find_by_email(&db, " a@example.com ")
            .await
            .unwrap();
        assert_eq!(found.map(|u| u.email), Some("a@example.com".to_string()));

        assert_eq!(UserService::delete_all(&db).await.unwrap(), 2);
        assert_eq!(UserService::count(&db).await.unwrap(), 0);
        assert!(
            UserService::find_by_email(&db, "a@example.com")
                .await
                .unwrap()
                .is_none()
        );
    }

    #[test]
    fn test_verify_password_rejects_garbage_hash() {
        let now = Utc::now();
        let user = Model {
            id: 1,
            name: "x".into(),
            email: "x@example.com".into(),
            password_hash: "not-a-phc-string".into(),
            created_at: now,
            updated_at: now,
        };

        assert!(!UserService::verify_password(&user, "anything"));
    }
}
