use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub id: i64,
    pub username: String,
    pub domain: String,
    pub name: Option<String>,
    pub local: bool,
    pub created: DateTime<Utc>,
}

impl Identity {
    pub fn handle(&self) -> String {
        format!("{}@{}", self.username, self.domain)
    }
}

/// Public view of an identity as embedded in instance metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccountSummary {
    pub id: String,
    pub username: String,
    pub acct: String,
    pub display_name: String,
    pub created_at: String,
}

impl From<&Identity> for AccountSummary {
    fn from(identity: &Identity) -> Self {
        Self {
            id: identity.id.to_string(),
            username: identity.username.clone(),
            acct: if identity.local {
                identity.username.clone()
            } else {
                identity.handle()
            },
            display_name: identity.name.clone().unwrap_or_default(),
            created_at: identity.created.to_rfc3339(),
        }
    }
}
