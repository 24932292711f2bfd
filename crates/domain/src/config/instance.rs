use serde::{Deserialize, Serialize};

/// Site-wide settings published through the instance metadata endpoints.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct InstanceConfig {
    #[serde(default = "default_main_domain")]
    pub main_domain: String,

    #[serde(default = "default_site_name")]
    pub site_name: String,

    #[serde(default)]
    pub site_banner: String,

    #[serde(default = "default_true")]
    pub signup_allowed: bool,

    #[serde(default = "default_post_length")]
    pub post_length: u32,

    #[serde(default = "default_max_media_attachments")]
    pub max_media_attachments: u32,

    #[serde(default)]
    pub vapid_public_key: Option<String>,

    #[serde(default)]
    pub source_url: String,
}

impl Default for InstanceConfig {
    fn default() -> Self {
        Self {
            main_domain: default_main_domain(),
            site_name: default_site_name(),
            site_banner: String::new(),
            signup_allowed: true,
            post_length: default_post_length(),
            max_media_attachments: default_max_media_attachments(),
            vapid_public_key: None,
            source_url: String::new(),
        }
    }
}

fn default_main_domain() -> String {
    "localhost".to_string()
}

fn default_site_name() -> String {
    "Driftwood".to_string()
}

fn default_true() -> bool {
    true
}

fn default_post_length() -> u32 {
    500
}

fn default_max_media_attachments() -> u32 {
    4
}
