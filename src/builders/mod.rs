//! # Builders
//!
//! Configuration for the two directions of the pipeline.
//!
//! ## Modules
//!
//! - [`decrypt_options`] - Limits and strictness switches for decryption
//! - [`encrypt_options`] - Transform rounds, compression and block size for the writer
//!
//! ## Usage
//!
//! Both follow the same fluent pattern: start from `new()` (strong defaults from
//! [`consts`](crate::consts)) and adjust with `with_*` methods.

pub mod decrypt_options;
pub mod encrypt_options;
