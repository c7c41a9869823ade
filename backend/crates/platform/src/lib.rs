//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Cryptographic utilities (random tokens, SHA-256, constant-time comparison)
//! - Cookie building and extraction
//! - Client identification from request headers
//! - Fixed-window rate limiting primitives
//! - Zeroizing secret wrapper

pub mod client;
pub mod cookie;
pub mod crypto;
pub mod rate_limit;
pub mod secret;
