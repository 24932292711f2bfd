use serde::Serialize;

/// Counters shown in the v1 instance document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct InstanceStats {
    pub user_count: u64,
    pub status_count: u64,
    pub domain_count: u64,
}

/// One week of local activity, keyed by the unix timestamp of its Monday.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct WeeklyActivity {
    pub week: i64,
    pub statuses: u64,
    pub logins: u64,
    pub registrations: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstanceDomain {
    pub domain: String,
    pub local: bool,
    pub blocked: bool,
}
