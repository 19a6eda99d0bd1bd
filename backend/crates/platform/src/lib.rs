//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Cookie building and parsing
//! - Constant-time secret comparison
//! - Client identification from request headers

pub mod client;
pub mod cookie;
pub mod crypto;
