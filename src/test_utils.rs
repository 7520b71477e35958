use rand::rngs::OsRng;
use rsa::{RsaPrivateKey, RsaPublicKey};

/// Key size used by tests; small enough to keep generation fast
pub const TEST_KEY_BITS: usize = 1024;

/// Generates a fresh RSA key pair for round-trip testing
pub fn generate_keypair() -> (RsaPrivateKey, RsaPublicKey) {
    let mut rng = OsRng;
    let private_key = RsaPrivateKey::new(&mut rng, TEST_KEY_BITS).expect("RSA key generation");
    let public_key = RsaPublicKey::from(&private_key);
    (private_key, public_key)
}
