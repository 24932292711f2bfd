use super::Repositories;
use driftwood_application::use_cases::{
    DescribeInstanceUseCase, GetInstanceStatsUseCase, GetLanguagesUseCase, GetPeersUseCase,
    GetWeeklyActivityUseCase, PruneRemotePostsUseCase,
};
use driftwood_domain::config::InstanceConfig;
use std::sync::Arc;

pub struct UseCases {
    pub prune_remote_posts: Arc<PruneRemotePostsUseCase>,
    pub get_stats: Arc<GetInstanceStatsUseCase>,
    pub get_activity: Arc<GetWeeklyActivityUseCase>,
    pub get_peers: Arc<GetPeersUseCase>,
    pub get_languages: Arc<GetLanguagesUseCase>,
    pub describe_instance: Arc<DescribeInstanceUseCase>,
}

impl UseCases {
    pub fn new(repos: &Repositories, instance: &InstanceConfig) -> Self {
        Self {
            prune_remote_posts: Arc::new(PruneRemotePostsUseCase::new(repos.post.clone())),
            get_stats: Arc::new(GetInstanceStatsUseCase::new(repos.instance.clone())),
            get_activity: Arc::new(GetWeeklyActivityUseCase::new(repos.instance.clone())),
            get_peers: Arc::new(GetPeersUseCase::new(repos.instance.clone())),
            get_languages: Arc::new(GetLanguagesUseCase::new()),
            describe_instance: Arc::new(DescribeInstanceUseCase::new(
                repos.instance.clone(),
                instance.main_domain.clone(),
            )),
        }
    }
}
