//! Shared Kernel - Domain-crossing minimal core
//!
//! This crate contains the small vocabulary every backend crate agrees on:
//! - The unified error type and its classification
//! - The clock abstraction used for every expiry decision
//!
//! Only things with the same meaning in the admin and content domains belong here.

pub mod error {
    pub mod app_error;
    #[cfg(feature = "axum")]
    pub mod conversions;
    pub mod kind;
}
pub mod clock;
