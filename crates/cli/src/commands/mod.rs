pub mod migrate;
pub mod prune_posts;
pub mod serve;
