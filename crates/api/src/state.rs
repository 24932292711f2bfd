use driftwood_application::use_cases::{
    DescribeInstanceUseCase, GetInstanceStatsUseCase, GetLanguagesUseCase, GetPeersUseCase,
    GetWeeklyActivityUseCase,
};
use driftwood_domain::config::InstanceConfig;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub instance: Arc<InstanceConfig>,
    pub get_stats: Arc<GetInstanceStatsUseCase>,
    pub get_activity: Arc<GetWeeklyActivityUseCase>,
    pub get_peers: Arc<GetPeersUseCase>,
    pub get_languages: Arc<GetLanguagesUseCase>,
    pub describe_instance: Arc<DescribeInstanceUseCase>,
}
