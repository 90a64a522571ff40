use crate::seed::Seeder;
use fake::Fake;
use fake::faker::lorem::en::{Paragraphs, Sentence};
use sea_orm::DatabaseConnection;
use services::post_service::{CreatePost, PostService};
use services::service::AppError;

pub const POST_COUNT: usize = 10;

pub struct PostSeeder;

#[async_trait::async_trait]
impl Seeder for PostSeeder {
    async fn seed(&self, db: &DatabaseConnection) -> Result<(), AppError> {
        for _ in 0..POST_COUNT {
            PostService::create(db, fake_post()).await?;
        }
        Ok(())
    }
}

/// One capitalized lorem sentence of 4 to 8 words as the title, three lorem
/// paragraphs flattened onto one line and joined by a single space as the body.
pub fn fake_post() -> CreatePost {
    let title: String = Sentence(4..9).fake();
    let paragraphs: Vec<String> = Paragraphs(3..4).fake();

    CreatePost {
        title: capitalize_first(&title),
        body: join_paragraphs(&paragraphs),
    }
}

fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

// `Paragraphs` separates sentences inside a paragraph with '\n'.
fn join_paragraphs(paragraphs: &[String]) -> String {
    paragraphs
        .iter()
        .map(|p| p.split_whitespace().collect::<Vec<_>>().join(" "))
        .collect::<Vec<_>>()
        .join(" ")
}
