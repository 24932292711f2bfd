pub mod dto;
pub mod errors;
pub mod handlers;
pub mod routes;
pub mod state;

pub use routes::create_api_routes;
pub use state::AppState;

/// Software identifier reported by the instance endpoints.
pub const SOFTWARE_VERSION: &str = concat!("driftwood/", env!("CARGO_PKG_VERSION"));
