pub mod activity;
pub mod instance;
pub mod language;

pub use activity::ActivityResponse;
pub use instance::{InstanceV1Response, InstanceV2Response};
pub use language::LanguageResponse;
