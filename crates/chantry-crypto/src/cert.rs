//! Certificate verification
//!
//! Validates an end-entity certificate against a CA certificate and CRL
//! loaded from the filesystem, with revocation checking enabled. The outcome
//! is three-way: a trust verdict (valid or invalid) when the evaluation ran,
//! or `CryptoError::TrustMaterial` when the CA or CRL could not be loaded —
//! an unreadable file is an operational failure, not a statement about the
//! certificate under test.

use crate::CryptoError;
use rustls_pki_types::{CertificateDer, UnixTime};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use webpki::{
    anchor_from_trusted_cert, BorrowedCertRevocationList, CertRevocationList, EndEntityCert,
    KeyUsage, RevocationOptionsBuilder,
};

/// Trust verdict for a certificate that was actually evaluated
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CertStatus {
    /// Chains to the CA, within its validity window, not revoked
    Valid,
    /// Malformed, untrusted, expired or revoked
    Invalid {
        /// What the path validator rejected
        reason: String,
    },
}

fn load_ca(ca_path: &Path) -> Result<CertificateDer<'static>, CryptoError> {
    let file = File::open(ca_path).map_err(|e| {
        tracing::warn!(path = %ca_path.display(), error = %e, "CA certificate unreadable");
        CryptoError::TrustMaterial(format!("CA certificate {}: {e}", ca_path.display()))
    })?;
    let mut reader = BufReader::new(file);
    let mut certs = rustls_pemfile::certs(&mut reader);
    match certs.next() {
        Some(Ok(der)) => Ok(der),
        Some(Err(e)) => Err(CryptoError::TrustMaterial(format!(
            "CA certificate {}: {e}",
            ca_path.display()
        ))),
        None => Err(CryptoError::TrustMaterial(format!(
            "CA certificate {}: no PEM certificate found",
            ca_path.display()
        ))),
    }
}

fn load_crl(crl_path: &Path) -> Result<Vec<u8>, CryptoError> {
    let file = File::open(crl_path).map_err(|e| {
        tracing::warn!(path = %crl_path.display(), error = %e, "CRL unreadable");
        CryptoError::TrustMaterial(format!("CRL {}: {e}", crl_path.display()))
    })?;
    let mut reader = BufReader::new(file);
    let mut crls = rustls_pemfile::crls(&mut reader);
    match crls.next() {
        Some(Ok(der)) => Ok(der.as_ref().to_vec()),
        Some(Err(e)) => Err(CryptoError::TrustMaterial(format!(
            "CRL {}: {e}",
            crl_path.display()
        ))),
        None => Err(CryptoError::TrustMaterial(format!(
            "CRL {}: no PEM CRL found",
            crl_path.display()
        ))),
    }
}

/// Verify `target` against the CA certificate and CRL at the given paths.
///
/// The chain is validated to the CA as trust anchor, at the current time,
/// with the CRL consulted for revocation. A target that fails any of those
/// checks yields `Ok(CertStatus::Invalid { .. })`; only trust-material load
/// or parse failures yield `Err`.
pub fn verify_certificate(
    ca_path: &Path,
    crl_path: &Path,
    target: &CertificateDer<'_>,
) -> Result<CertStatus, CryptoError> {
    let ca_der = load_ca(ca_path)?;
    let anchor = anchor_from_trusted_cert(&ca_der).map_err(|e| {
        CryptoError::TrustMaterial(format!("CA certificate {}: {e}", ca_path.display()))
    })?;

    let crl_der = load_crl(crl_path)?;
    let crl: CertRevocationList = BorrowedCertRevocationList::from_der(&crl_der)
        .map_err(|e| CryptoError::TrustMaterial(format!("CRL {}: {e}", crl_path.display())))?
        .into();
    let crls = [&crl];
    let revocation = RevocationOptionsBuilder::new(&crls)
        .map_err(|_| CryptoError::TrustMaterial("no CRL available".to_string()))?
        .build();

    // A target that does not even parse is an invalid certificate, not an
    // operational failure.
    let end_entity = match EndEntityCert::try_from(target) {
        Ok(cert) => cert,
        Err(e) => {
            return Ok(CertStatus::Invalid {
                reason: format!("malformed certificate: {e}"),
            })
        }
    };

    let verdict = match end_entity.verify_for_usage(
        webpki::ALL_VERIFICATION_ALGS,
        &[anchor],
        &[],
        UnixTime::now(),
        KeyUsage::server_auth(),
        Some(revocation),
        None,
    ) {
        Ok(_) => CertStatus::Valid,
        Err(e) => CertStatus::Invalid {
            reason: e.to_string(),
        },
    };

    tracing::debug!(?verdict, "certificate verification completed");
    Ok(verdict)
}
