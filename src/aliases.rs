//! # Secure-Gate Type Aliases
//!
//! Type aliases for secret-holding buffers, built on [`secure-gate`](https://github.com/Slurp9187/secure-gate).
//! Every secret in the pipeline (credentials and each intermediate key) lives in one
//! of these wrappers and is reached only through `.expose_secret()` / `.expose_secret_mut()`.
//!
//! ## Type Categories
//!
//! ### Generic Secure Buffers
//! - [`SpanBuffer<N>`] - Generic secure stack buffer for any size `N`
//!
//! ### Key Derivation Chain
//! - [`CompositeKey32`] - SHA-256 of the password and keyfile components
//! - [`TransformedKey32`] - Composite key after the AES-KDF rounds and a final SHA-256
//! - [`Aes256Key32`] - Master key used for the payload cipher
//!
//! ### Scratch
//! - [`Block16`] - One AES block of decrypted plaintext
//!
//! ### Dynamic Secrets
//! - [`PasswordBytes`] - Password as raw bytes
//! - [`KeyfileBytes`] - Raw keyfile contents

use secure_gate::dynamic_alias;
use secure_gate::fixed_alias;

// ─────────────────────────────────────────────────────────────────────────────
// SpanBuffer — generic secure stack buffer (direct alias to secure-gate's Fixed)
// ─────────────────────────────────────────────────────────────────────────────
pub type SpanBuffer<const N: usize> = secure_gate::Fixed<[u8; N]>;

// Semantic sub-types — compile-time safe
pub type Block16 = SpanBuffer<16>; // one AES block

// ─────────────────────────────────────────────────────────────────────────────
// Dynamic secrets
// ─────────────────────────────────────────────────────────────────────────────
dynamic_alias!(pub KeyfileBytes, Vec<u8>);
dynamic_alias!(pub PasswordBytes, Vec<u8>);

// ─────────────────────────────────────────────────────────────────────────────
// Fixed-size concrete secrets — alphabetical order
// ─────────────────────────────────────────────────────────────────────────────
fixed_alias!(pub Aes256Key32, 32); // master key
fixed_alias!(pub CompositeKey32, 32); // hash(hash(password) ‖ keyfile key)
fixed_alias!(pub KeyfileKey32, 32); // keyfile component of the composite key
fixed_alias!(pub TransformedKey32, 32); // hash(AES-KDF^rounds(composite))
