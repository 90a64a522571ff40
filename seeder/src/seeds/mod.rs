pub mod post;
pub mod reset;
pub mod user;

use crate::seed::Seeder;

/// Seeders in the order they must run. Reset clears existing rows first.
pub fn all() -> Vec<(Box<dyn Seeder + Send + Sync>, &'static str)> {
    vec![
        (Box::new(reset::ResetSeeder), "Reset"),
        (Box::new(user::UserSeeder), "User"),
        (Box::new(post::PostSeeder), "Post"),
    ]
}
