//! File I/O helpers around RSA key material: JSON configuration maps, raw
//! bytes, UTF-8 text and PEM-encoded public/private keys. All cryptographic
//! work is delegated to the `rsa` crate; this crate only persists and loads.

pub mod common;
pub mod test_utils;

pub use common::error::CodecError;
