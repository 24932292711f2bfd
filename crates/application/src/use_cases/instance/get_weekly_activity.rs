use crate::ports::InstanceRepository;
use crate::services::ResultCache;
use chrono::{DateTime, Datelike, Duration as ChronoDuration, NaiveTime, Utc};
use driftwood_domain::{DomainError, WeeklyActivity};
use std::sync::Arc;
use std::time::Duration;

pub const ACTIVITY_WEEKS: usize = 12;

const ACTIVITY_CACHE_KEY: &str = "instance_activity_stats";
const ACTIVITY_TTL: Duration = Duration::from_secs(300);

/// `[start, end)` ranges of the most recent `weeks` calendar weeks, newest
/// first. Weeks start on Monday 00:00 UTC; the first range contains `now`.
pub fn week_windows(now: DateTime<Utc>, weeks: usize) -> Vec<(DateTime<Utc>, DateTime<Utc>)> {
    let midnight = now.date_naive().and_time(NaiveTime::MIN).and_utc();
    let since_monday = i64::from(now.weekday().num_days_from_monday());
    let mut week_start = midnight - ChronoDuration::days(since_monday);

    let mut windows = Vec::with_capacity(weeks);
    for _ in 0..weeks {
        let week_end = week_start + ChronoDuration::days(7);
        windows.push((week_start, week_end));
        week_start -= ChronoDuration::days(7);
    }
    windows
}

pub struct GetWeeklyActivityUseCase {
    repository: Arc<dyn InstanceRepository>,
    cache: ResultCache<Vec<WeeklyActivity>>,
}

impl GetWeeklyActivityUseCase {
    pub fn new(repository: Arc<dyn InstanceRepository>) -> Self {
        Self {
            repository,
            cache: ResultCache::new(),
        }
    }

    pub async fn execute(&self) -> Result<Vec<WeeklyActivity>, DomainError> {
        self.execute_at(Utc::now()).await
    }

    pub async fn execute_at(&self, now: DateTime<Utc>) -> Result<Vec<WeeklyActivity>, DomainError> {
        self.cache
            .get_or_refresh(ACTIVITY_CACHE_KEY, ACTIVITY_TTL, || async {
                let mut stats = Vec::with_capacity(ACTIVITY_WEEKS);
                for (start, end) in week_windows(now, ACTIVITY_WEEKS) {
                    let (statuses, registrations) = tokio::join!(
                        self.repository.count_local_posts_between(start, end),
                        self.repository.count_local_identities_between(start, end)
                    );
                    stats.push(WeeklyActivity {
                        week: start.timestamp(),
                        statuses: statuses?,
                        // Login tracking does not exist yet.
                        logins: 0,
                        registrations: registrations?,
                    });
                }
                Ok::<_, DomainError>(stats)
            })
            .await
    }
}
