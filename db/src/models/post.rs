use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Deserialize, Serialize)]
#[sea_orm(table_name = "posts")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub body: String,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::setup_test_db;
    use sea_orm::{ActiveModelTrait, PaginatorTrait, Set};

    #[tokio::test]
    async fn test_delete_many_clears_table() {
        let db = setup_test_db().await;
        let now = Utc::now();

        for i in 0..3 {
            ActiveModel {
                title: Set(format!("Title {i}")),
                body: Set("Body".to_owned()),
                created_at: Set(now),
                updated_at: Set(now),
                ..Default::default()
            }
            .insert(&db)
            .await
            .unwrap();
        }
        assert_eq!(Entity::find().count(&db).await.unwrap(), 3);

        let res = Entity::delete_many().exec(&db).await.unwrap();
        assert_eq!(res.rows_affected, 3);
        assert_eq!(Entity::find().count(&db).await.unwrap(), 0);
    }
}
