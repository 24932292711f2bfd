pub mod health;
pub mod instance;

pub use health::health_check;
pub use instance::{get_activity, get_instance_v1, get_instance_v2, get_languages, get_peers};
