pub mod m202510160001_create_users;
pub mod m202510160002_create_posts;
