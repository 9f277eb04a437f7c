//! Certificate material introspection for `/ssl-status`.
//!
//! This service never loads the certificate itself (TLS terminates at the
//! proxy); it only reports whether the configured files are present so
//! operators can verify a deployment before flipping HTTPS on.

use std::path::Path;

use serde::Serialize;

/// Snapshot of the configured certificate material on disk.
#[derive(Debug, Serialize)]
pub struct CertificateStatus {
    pub certificate_path: String,
    pub key_path: String,
    pub certificate_exists: bool,
    pub key_exists: bool,
}

/// Stat the configured certificate and key paths. Direct filesystem check,
/// no caching; each call reflects the disk state at that moment.
pub fn inspect(cert_path: &str, key_path: &str) -> CertificateStatus {
    CertificateStatus {
        certificate_path: cert_path.to_string(),
        key_path: key_path.to_string(),
        certificate_exists: is_file(cert_path),
        key_exists: is_file(key_path),
    }
}

fn is_file(path: &str) -> bool {
    std::fs::metadata(Path::new(path))
        .map(|m| m.is_file())
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn missing_paths_report_absent() {
        let status = inspect("/nonexistent/server.crt", "/nonexistent/server.key");
        assert!(!status.certificate_exists);
        assert!(!status.key_exists);
    }

    #[test]
    fn present_files_report_existing() {
        let dir = tempfile::tempdir().unwrap();
        let cert = dir.path().join("server.crt");
        let key = dir.path().join("server.key");
        writeln!(std::fs::File::create(&cert).unwrap(), "cert").unwrap();
        writeln!(std::fs::File::create(&key).unwrap(), "key").unwrap();

        let status = inspect(cert.to_str().unwrap(), key.to_str().unwrap());
        assert!(status.certificate_exists);
        assert!(status.key_exists);
    }

    #[test]
    fn directories_do_not_count_as_certificates() {
        let dir = tempfile::tempdir().unwrap();
        let status = inspect(dir.path().to_str().unwrap(), "/nonexistent/server.key");
        assert!(!status.certificate_exists);
    }
}
