use driftwood_domain::WeeklyActivity;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ActivityResponse {
    pub week: i64,
    pub statuses: u64,
    pub logins: u64,
    pub registrations: u64,
}

impl From<WeeklyActivity> for ActivityResponse {
    fn from(activity: WeeklyActivity) -> Self {
        Self {
            week: activity.week,
            statuses: activity.statuses,
            logins: activity.logins,
            registrations: activity.registrations,
        }
    }
}
