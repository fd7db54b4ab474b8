//! TLS configuration and certificate loading.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use axum_server::tls_rustls::RustlsConfig;
use thiserror::Error;

/// Errors raised while loading the certificate/key pair.
#[derive(Debug, Error)]
pub enum TlsError {
    #[error("cannot read {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("no certificates found in {0:?}")]
    NoCertificates(PathBuf),

    #[error("no private key found in {0:?}")]
    NoPrivateKey(PathBuf),

    /// rustls rejected the pair (e.g. the key does not match).
    #[error("invalid certificate/key pair: {0}")]
    Invalid(std::io::Error),
}

/// Load TLS configuration from PEM certificate and key files.
pub async fn load_tls_config(cert_path: &Path, key_path: &Path) -> Result<RustlsConfig, TlsError> {
    let certs = read_certs(cert_path)?;
    let key = read_key(key_path)?;

    tracing::info!(cert = ?cert_path, certificates = certs.len(), "TLS material loaded");

    RustlsConfig::from_der(certs, key)
        .await
        .map_err(TlsError::Invalid)
}

fn open(path: &Path) -> Result<BufReader<File>, TlsError> {
    File::open(path)
        .map(BufReader::new)
        .map_err(|source| TlsError::Read {
            path: path.to_path_buf(),
            source,
        })
}

fn read_certs(path: &Path) -> Result<Vec<Vec<u8>>, TlsError> {
    let mut reader = open(path)?;
    let certs = rustls_pemfile::certs(&mut reader)
        .map(|cert| cert.map(|der| der.to_vec()))
        .collect::<Result<Vec<_>, _>>()
        .map_err(|source| TlsError::Read {
            path: path.to_path_buf(),
            source,
        })?;

    if certs.is_empty() {
        return Err(TlsError::NoCertificates(path.to_path_buf()));
    }
    Ok(certs)
}

fn read_key(path: &Path) -> Result<Vec<u8>, TlsError> {
    let mut reader = open(path)?;
    let key = rustls_pemfile::private_key(&mut reader).map_err(|source| TlsError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    key.map(|key| key.secret_der().to_vec())
        .ok_or_else(|| TlsError::NoPrivateKey(path.to_path_buf()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[tokio::test]
    async fn test_missing_files_fail() {
        let err = load_tls_config(
            Path::new("/nonexistent/server.crt"),
            Path::new("/nonexistent/server.key"),
        )
        .await
        .unwrap_err();
        assert!(matches!(err, TlsError::Read { .. }));
    }

    #[tokio::test]
    async fn test_file_without_pem_blocks_fails() {
        let mut cert = NamedTempFile::new().unwrap();
        writeln!(cert, "not a certificate").unwrap();
        let mut key = NamedTempFile::new().unwrap();
        writeln!(key, "not a key").unwrap();

        let err = load_tls_config(cert.path(), key.path()).await.unwrap_err();
        assert!(matches!(err, TlsError::NoCertificates(_)));
    }

    #[tokio::test]
    async fn test_fixture_pair_loads() {
        let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/tls");

        load_tls_config(&dir.join("server.crt"), &dir.join("server.key"))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_certificate_without_key_fails() {
        let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/tls");

        let err = load_tls_config(&dir.join("server.crt"), &dir.join("server.crt"))
            .await
            .unwrap_err();
        assert!(matches!(err, TlsError::NoPrivateKey(_)));
    }
}
