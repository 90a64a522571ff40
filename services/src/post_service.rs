use crate::service::{AppError, ToActiveModel};
use chrono::Utc;
use db::models::post::{ActiveModel, Entity, Model};
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, PaginatorTrait, Set};
use validator::Validate;

pub use db::models::post::Model as Post;

#[derive(Debug, Clone, Validate)]
pub struct CreatePost {
    #[validate(length(min = 1, message = "Title cannot be empty"))]
    pub title: String,

    #[validate(length(min = 1, message = "Body cannot be empty"))]
    pub body: String,
}

impl ToActiveModel<Entity> for CreatePost {
    fn into_active_model(self) -> Result<ActiveModel, AppError> {
        self.validate()?;

        let now = Utc::now();
        Ok(ActiveModel {
            title: Set(self.title),
            body: Set(self.body),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        })
    }
}

pub struct PostService;

impl PostService {
    pub async fn create(db: &DatabaseConnection, params: CreatePost) -> Result<Model, AppError> {
        let post = params.into_active_model()?.insert(db).await?;
        log::debug!("Created post {}: {}", post.id, post.title);
        Ok(post)
    }

    /// Removes every post. Returns the number of rows deleted.
    pub async fn delete_all(db: &DatabaseConnection) -> Result<u64, AppError> {
        let res = Entity::delete_many().exec(db).await?;
        log::info!("Deleted {} posts", res.rows_affected);
        Ok(res.rows_affected)
    }

    pub async fn count(db: &DatabaseConnection) -> Result<u64, AppError> {
        Ok(Entity::find().count(db).await?)
    }
}
