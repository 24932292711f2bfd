pub mod prune_remote_posts;

pub use prune_remote_posts::PruneRemotePostsUseCase;
