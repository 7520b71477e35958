use std::collections::HashMap;
use std::fs;
use std::path::Path;

use rsa::pkcs1::{DecodeRsaPrivateKey, EncodeRsaPrivateKey};
use rsa::pkcs8::{DecodePublicKey, EncodePublicKey, LineEnding};
use rsa::{RsaPrivateKey, RsaPublicKey};

use crate::common::error::CodecError;

/// Reads a JSON file into a string-to-string configuration map
pub fn read_json(path: impl AsRef<Path>) -> Result<HashMap<String, String>, CodecError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|error| io_error(path, error))?;

    // The map's shape beyond string->string is the caller's responsibility
    serde_json::from_str(&text).map_err(|error| format_error(path, error.to_string()))
}

/// Writes raw bytes to a file, overwriting any previous content
pub fn write_bytes(data: &[u8], path: impl AsRef<Path>) -> Result<(), CodecError> {
    let path = path.as_ref();
    fs::write(path, data).map_err(|error| io_error(path, error))
}

/// Reads the full content of a file as raw bytes
pub fn read_bytes(path: impl AsRef<Path>) -> Result<Vec<u8>, CodecError> {
    let path = path.as_ref();
    fs::read(path).map_err(|error| io_error(path, error))
}

/// Reads the full content of a file as UTF-8 text
pub fn read_text(path: impl AsRef<Path>) -> Result<String, CodecError> {
    let path = path.as_ref();
    fs::read_to_string(path).map_err(|error| io_error(path, error))
}

/// Writes UTF-8 text to a file, overwriting any previous content
pub fn write_text(text: &str, path: impl AsRef<Path>) -> Result<(), CodecError> {
    let path = path.as_ref();
    fs::write(path, text).map_err(|error| io_error(path, error))
}

/// Writes a public key to a file as SubjectPublicKeyInfo PEM
pub fn write_public_key(key: &RsaPublicKey, path: impl AsRef<Path>) -> Result<(), CodecError> {
    let path = path.as_ref();

    // Serialize to PEM armor, then persist through the plain byte path
    let pem = key
        .to_public_key_pem(LineEnding::LF)
        .map_err(|error| spki_error(path, error))?;
    write_bytes(pem.as_bytes(), path)
}

/// Writes a private key to a file as traditional PKCS#1 PEM.
///
/// The key is written **unencrypted**; no passphrase protection is applied.
/// That matches the documented on-disk contract of this crate and must not
/// be changed without changing the file format everywhere.
pub fn write_private_key(key: &RsaPrivateKey, path: impl AsRef<Path>) -> Result<(), CodecError> {
    let path = path.as_ref();

    let pem = key
        .to_pkcs1_pem(LineEnding::LF)
        .map_err(|error| pkcs1_error(path, error))?;
    write_bytes(pem.as_bytes(), path)
}

/// Reads a SubjectPublicKeyInfo PEM file back into a public key
pub fn read_public_key(path: impl AsRef<Path>) -> Result<RsaPublicKey, CodecError> {
    let path = path.as_ref();
    let pem = read_text(path)?;

    RsaPublicKey::from_public_key_pem(&pem).map_err(|error| spki_error(path, error))
}

/// Reads a traditional PKCS#1 PEM file back into a private key.
///
/// Assumes the key was stored without a passphrase.
pub fn read_private_key(path: impl AsRef<Path>) -> Result<RsaPrivateKey, CodecError> {
    let path = path.as_ref();
    let pem = read_text(path)?;

    RsaPrivateKey::from_pkcs1_pem(&pem).map_err(|error| pkcs1_error(path, error))
}

fn io_error(path: &Path, source: std::io::Error) -> CodecError {
    CodecError::Io {
        path: path.to_path_buf(),
        source,
    }
}

fn format_error(path: &Path, reason: String) -> CodecError {
    CodecError::Format {
        path: path.to_path_buf(),
        reason,
    }
}

fn key_error(path: &Path, reason: String) -> CodecError {
    CodecError::Key {
        path: path.to_path_buf(),
        reason,
    }
}

// ASN.1/PEM-layer failures are format errors; anything the key codec reports
// above that layer (wrong version, unknown algorithm, crypto checks) means
// the file does not hold a usable key of the requested kind.
fn pkcs1_error(path: &Path, error: rsa::pkcs1::Error) -> CodecError {
    match error {
        rsa::pkcs1::Error::Asn1(inner) => format_error(path, inner.to_string()),
        other => key_error(path, other.to_string()),
    }
}

fn spki_error(path: &Path, error: rsa::pkcs8::spki::Error) -> CodecError {
    match error {
        rsa::pkcs8::spki::Error::Asn1(inner) => format_error(path, inner.to_string()),
        other => key_error(path, other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use tempfile::tempdir;

    #[test]
    fn bytes_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("blob.bin");

        let payload = vec![0u8, 1, 2, 255, 254, 7];
        write_bytes(&payload, &path).unwrap();
        assert_eq!(read_bytes(&path).unwrap(), payload);
    }

    #[test]
    fn empty_bytes_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("empty.bin");

        write_bytes(&[], &path).unwrap();
        assert_eq!(read_bytes(&path).unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn text_round_trip_with_multibyte_characters() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("note.txt");

        let text = "héllo wörld, ключ, 鍵\n";
        write_text(text, &path).unwrap();
        assert_eq!(read_text(&path).unwrap(), text);
    }

    #[test]
    fn empty_text_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("empty.txt");

        write_text("", &path).unwrap();
        assert_eq!(read_text(&path).unwrap(), "");
    }

    #[test]
    fn write_overwrites_previous_content() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.txt");

        write_text("first version, rather long", &path).unwrap();
        write_text("second", &path).unwrap();
        assert_eq!(read_text(&path).unwrap(), "second");
    }

    #[test]
    fn json_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.json");

        let mut expected = HashMap::new();
        expected.insert("initial_file".to_string(), "files/plain.txt".to_string());
        expected.insert("encrypted_file".to_string(), "files/cipher.bin".to_string());

        let encoded = serde_json::to_string(&expected).unwrap();
        write_text(&encoded, &path).unwrap();
        assert_eq!(read_json(&path).unwrap(), expected);
    }

    #[test]
    fn read_bytes_missing_path_is_io_error() {
        let error = read_bytes("/nonexistent/path/blob.bin").unwrap_err();
        assert_matches!(error, CodecError::Io { .. });
    }

    #[test]
    fn read_json_rejects_invalid_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("broken.json");

        write_text("not json", &path).unwrap();
        let error = read_json(&path).unwrap_err();
        assert_matches!(error, CodecError::Format { .. });
    }

    #[test]
    fn error_message_names_the_path() {
        let error = read_text("/nonexistent/path/note.txt").unwrap_err();
        assert!(error.to_string().contains("/nonexistent/path/note.txt"));
    }
}
