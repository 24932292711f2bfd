pub mod instance;
pub mod retention;

// Re-export use cases
pub use instance::{
    DescribeInstanceUseCase, GetInstanceStatsUseCase, GetLanguagesUseCase, GetPeersUseCase,
    GetWeeklyActivityUseCase, InstanceDescription,
};
pub use retention::PruneRemotePostsUseCase;
