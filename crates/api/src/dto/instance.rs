use crate::SOFTWARE_VERSION;
use driftwood_application::use_cases::InstanceDescription;
use driftwood_domain::config::InstanceConfig;
use driftwood_domain::{AccountSummary, InstanceStats};
use serde::Serialize;

const CHARACTERS_RESERVED_PER_URL: u32 = 23;
const IMAGE_SIZE_LIMIT: u64 = 10 * 1024 * 1024;
const IMAGE_MATRIX_LIMIT: u64 = 2000 * 2000;
const SUPPORTED_MIME_TYPES: [&str; 6] = [
    "image/apng",
    "image/avif",
    "image/gif",
    "image/jpeg",
    "image/png",
    "image/webp",
];

#[derive(Debug, Default, Serialize)]
pub struct EmptyObject {}

#[derive(Debug, Serialize)]
pub struct StatusLimits {
    pub max_characters: u32,
    pub max_media_attachments: u32,
    pub characters_reserved_per_url: u32,
}

impl StatusLimits {
    fn from_config(config: &InstanceConfig) -> Self {
        Self {
            max_characters: config.post_length,
            max_media_attachments: config.max_media_attachments,
            characters_reserved_per_url: CHARACTERS_RESERVED_PER_URL,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MediaLimits {
    pub supported_mime_types: Vec<&'static str>,
    pub image_size_limit: u64,
    pub image_matrix_limit: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_size_limit: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_frame_rate_limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_matrix_limit: Option<u64>,
}

impl MediaLimits {
    fn images_only() -> Self {
        Self {
            supported_mime_types: SUPPORTED_MIME_TYPES.to_vec(),
            image_size_limit: IMAGE_SIZE_LIMIT,
            image_matrix_limit: IMAGE_MATRIX_LIMIT,
            video_size_limit: None,
            video_frame_rate_limit: None,
            video_matrix_limit: None,
        }
    }

    fn with_video_limits(mut self) -> Self {
        self.video_size_limit = Some(0);
        self.video_frame_rate_limit = Some(60);
        self.video_matrix_limit = Some(IMAGE_MATRIX_LIMIT);
        self
    }
}

#[derive(Debug, Serialize)]
pub struct PollLimits {
    pub max_options: u32,
    pub max_characters_per_option: u32,
    pub min_expiration: u64,
    pub max_expiration: u64,
}

impl Default for PollLimits {
    fn default() -> Self {
        Self {
            max_options: 4,
            max_characters_per_option: 50,
            min_expiration: 300,
            max_expiration: 2_629_746,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct V1Configuration {
    pub accounts: EmptyObject,
    pub statuses: StatusLimits,
    pub media_attachments: MediaLimits,
    pub polls: PollLimits,
}

#[derive(Debug, Serialize)]
pub struct InstanceV1Response {
    pub uri: String,
    pub title: String,
    pub short_description: String,
    pub description: String,
    pub email: String,
    pub version: &'static str,
    pub urls: EmptyObject,
    pub stats: InstanceStats,
    pub thumbnail: String,
    pub languages: Vec<&'static str>,
    pub registrations: bool,
    pub approval_required: bool,
    pub invites_enabled: bool,
    pub configuration: V1Configuration,
    pub contact_account: Option<AccountSummary>,
    pub rules: Vec<String>,
}

impl InstanceV1Response {
    pub fn new(uri: String, config: &InstanceConfig, stats: InstanceStats) -> Self {
        Self {
            uri,
            title: config.site_name.clone(),
            short_description: String::new(),
            description: String::new(),
            email: String::new(),
            version: SOFTWARE_VERSION,
            urls: EmptyObject::default(),
            stats,
            thumbnail: config.site_banner.clone(),
            languages: vec!["en"],
            registrations: config.signup_allowed,
            approval_required: false,
            invites_enabled: false,
            configuration: V1Configuration {
                accounts: EmptyObject::default(),
                statuses: StatusLimits::from_config(config),
                media_attachments: MediaLimits::images_only(),
                polls: PollLimits::default(),
            },
            contact_account: None,
            rules: Vec::new(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct UserUsage {
    pub active_month: u64,
}

#[derive(Debug, Serialize)]
pub struct Usage {
    pub users: UserUsage,
}

#[derive(Debug, Serialize)]
pub struct Thumbnail {
    pub url: String,
}

#[derive(Debug, Serialize)]
pub struct Vapid {
    pub public_key: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AccountLimits {
    pub max_featured_tags: u32,
    pub max_pinned_statuses: u32,
}

#[derive(Debug, Serialize)]
pub struct Translation {
    pub enabled: bool,
}

#[derive(Debug, Serialize)]
pub struct V2Configuration {
    pub urls: EmptyObject,
    pub vapid: Vapid,
    pub accounts: AccountLimits,
    pub statuses: StatusLimits,
    pub media_attachments: MediaLimits,
    pub polls: PollLimits,
    pub translation: Translation,
}

#[derive(Debug, Serialize)]
pub struct Registrations {
    pub enabled: bool,
    pub approval_required: bool,
    pub message: Option<String>,
    pub url: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct Contact {
    pub email: String,
    pub account: Option<AccountSummary>,
}

#[derive(Debug, Serialize)]
pub struct InstanceV2Response {
    pub domain: String,
    pub title: String,
    pub version: &'static str,
    pub source_url: String,
    pub description: String,
    pub usage: Usage,
    pub thumbnail: Thumbnail,
    pub languages: Vec<&'static str>,
    pub configuration: V2Configuration,
    pub registrations: Registrations,
    pub contact: Contact,
    pub rules: Vec<String>,
}

impl InstanceV2Response {
    pub fn new(description: InstanceDescription, config: &InstanceConfig) -> Self {
        Self {
            domain: description.domain.domain,
            title: config.site_name.clone(),
            version: SOFTWARE_VERSION,
            source_url: config.source_url.clone(),
            description: String::new(),
            usage: Usage {
                users: UserUsage {
                    active_month: description.active_month,
                },
            },
            thumbnail: Thumbnail {
                url: config.site_banner.clone(),
            },
            languages: vec!["en"],
            configuration: V2Configuration {
                urls: EmptyObject::default(),
                vapid: Vapid {
                    public_key: config.vapid_public_key.clone(),
                },
                accounts: AccountLimits {
                    max_featured_tags: 10,
                    max_pinned_statuses: 5,
                },
                statuses: StatusLimits::from_config(config),
                media_attachments: MediaLimits::images_only().with_video_limits(),
                polls: PollLimits::default(),
                translation: Translation { enabled: false },
            },
            registrations: Registrations {
                enabled: config.signup_allowed,
                approval_required: false,
                message: None,
                url: None,
            },
            contact: Contact {
                email: String::new(),
                account: description.contact,
            },
            rules: Vec::new(),
        }
    }
}
