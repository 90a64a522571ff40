use crate::seed::Seeder;
use sea_orm::DatabaseConnection;
use services::post_service::PostService;
use services::service::AppError;
use services::user_service::UserService;

pub struct ResetSeeder;

#[async_trait::async_trait]
impl Seeder for ResetSeeder {
    async fn seed(&self, db: &DatabaseConnection) -> Result<(), AppError> {
        PostService::delete_all(db).await?;
        UserService::delete_all(db).await?;
        Ok(())
    }
}
