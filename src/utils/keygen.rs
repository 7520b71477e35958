use rand::rngs::OsRng;
use rsa::{RsaPrivateKey, RsaPublicKey};

use key_artifacts::common::codec;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(false)
        .without_time()
        .with_line_number(false)
        .init();

    // Get the output paths from command line arguments or use defaults
    let private_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "private_key.pem".to_string());
    let public_path = std::env::args()
        .nth(2)
        .unwrap_or_else(|| "public_key.pem".to_string());

    // Generate a new RSA key pair
    let mut rng = OsRng;
    let bits = 2048;
    let private_key = RsaPrivateKey::new(&mut rng, bits)?;
    let public_key = RsaPublicKey::from(&private_key);

    // Save the private key (traditional PKCS#1 PEM, unencrypted)
    codec::write_private_key(&private_key, &private_path)?;
    tracing::info!("Private key saved to {}", private_path);

    // Save the public key (SubjectPublicKeyInfo PEM)
    codec::write_public_key(&public_key, &public_path)?;
    tracing::info!("Public key saved to {}", public_path);

    Ok(())
}
