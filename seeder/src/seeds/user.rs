use crate::seed::Seeder;
use sea_orm::DatabaseConnection;
use services::service::AppError;
use services::user_service::{CreateUser, UserService};

pub const FIXED_USER_NAME: &str = "田中 太郎";
pub const FIXED_USER_EMAIL: &str = "test@user.com";
pub const FIXED_USER_PASSWORD: &str = "test123";

pub struct UserSeeder;

#[async_trait::async_trait]
impl Seeder for UserSeeder {
    async fn seed(&self, db: &DatabaseConnection) -> Result<(), AppError> {
        UserService::create(
            db,
            CreateUser {
                name: FIXED_USER_NAME.into(),
                email: FIXED_USER_EMAIL.into(),
                password: FIXED_USER_PASSWORD.into(),
                password_confirmation: FIXED_USER_PASSWORD.into(),
            },
        )
        .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use db::test_utils::setup_test_db;

    #[tokio::test]
    async fn test_fixed_user_is_created() {
        let db = setup_test_db().await;

        UserSeeder.seed(&db).await.unwrap();

        let user = UserService::find_by_email(&db, FIXED_USER_EMAIL)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(user.name, FIXED_USER_NAME);
        assert!(UserService::verify_password(&user, FIXED_USER_PASSWORD));
    }

    #[tokio::test]
    async fn test_second_run_without_reset_fails() {
        let db = setup_test_db().await;

        UserSeeder.seed(&db).await.unwrap();
        let err = UserSeeder.seed(&db).await.unwrap_err();

        assert!(matches!(err, AppError::Database(_)));
    }
}
