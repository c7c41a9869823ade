//! Application Layer
//!
//! Use cases and application services.

pub mod check_session;
pub mod config;
pub mod rate_limit;
pub mod sign_in;
pub mod sign_out;

// Re-exports
pub use check_session::CheckSessionUseCase;
pub use config::AdminConfig;
pub use rate_limit::RateLimitUseCase;
pub use sign_in::{SignInInput, SignInOutput, SignInUseCase};
pub use sign_out::SignOutUseCase;
