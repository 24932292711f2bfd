pub mod describe_instance;
pub mod get_languages;
pub mod get_peers;
pub mod get_stats;
pub mod get_weekly_activity;

pub use describe_instance::{DescribeInstanceUseCase, InstanceDescription};
pub use get_languages::GetLanguagesUseCase;
pub use get_peers::GetPeersUseCase;
pub use get_stats::GetInstanceStatsUseCase;
pub use get_weekly_activity::{week_windows, GetWeeklyActivityUseCase, ACTIVITY_WEEKS};
