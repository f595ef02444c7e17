//! Request serialization and signing
//!
//! # Signature
//!
//! With an explicit algorithm, every non-blank field is signed: fields are
//! sorted by upper-cased name and concatenated as `NAME=value<passphrase>`,
//! then hashed. Without one, the legacy scheme hashes a fixed list of field
//! values followed by the passphrase with SHA-1. Digests are sent as
//! upper-case hex in `SHASign`.

use crate::config::SignatureEncryptor;
use crate::core::request::{
    AMOUNT, ALIAS, CARD_NUMBER, CURRENCY, OPERATION, ORDER_ID, SIGNATURE,
};
use crate::types::RequestFields;
use sha1::Sha1;
use sha2::{Digest, Sha256, Sha512};
use url::form_urlencoded;

const LEGACY_SIGNED_FIELDS: [&str; 7] =
    [ORDER_ID, AMOUNT, CURRENCY, CARD_NUMBER, "PSPID", OPERATION, ALIAS];

/// Computes `SHASign` values
#[derive(Clone, PartialEq, Eq)]
pub struct RequestSigner {
    passphrase: Option<String>,
    encryptor: Option<SignatureEncryptor>,
}

impl RequestSigner {
    /// Create a signer; a blank passphrase disables signing
    pub fn new(passphrase: Option<&str>, encryptor: Option<SignatureEncryptor>) -> Self {
        RequestSigner {
            passphrase: passphrase
                .filter(|p| !p.trim().is_empty())
                .map(str::to_string),
            encryptor,
        }
    }

    /// Signer that never signs
    pub fn unsigned() -> Self {
        RequestSigner::new(None, Some(SignatureEncryptor::None))
    }

    pub fn is_enabled(&self) -> bool {
        self.passphrase.is_some() && self.encryptor != Some(SignatureEncryptor::None)
    }

    /// Whether requests go out unsigned without the merchant opting in
    pub fn is_implicitly_unsigned(&self) -> bool {
        self.passphrase.is_none() && self.encryptor != Some(SignatureEncryptor::None)
    }

    /// Signature for `fields`, or `None` when signing is disabled
    pub fn signature(&self, fields: &RequestFields) -> Option<String> {
        if !self.is_enabled() {
            return None;
        }
        let passphrase = self.passphrase.as_deref()?;

        let signature = match self.encryptor {
            None => hex::encode_upper(Sha1::digest(legacy_preimage(fields, passphrase))),
            Some(SignatureEncryptor::Sha1) => {
                hex::encode_upper(Sha1::digest(sha_preimage(fields, passphrase)))
            }
            Some(SignatureEncryptor::Sha256) => {
                hex::encode_upper(Sha256::digest(sha_preimage(fields, passphrase)))
            }
            Some(SignatureEncryptor::Sha512) => {
                hex::encode_upper(Sha512::digest(sha_preimage(fields, passphrase)))
            }
            Some(SignatureEncryptor::None) => return None,
        };
        Some(signature)
    }
}

impl std::fmt::Debug for RequestSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequestSigner")
            .field("enabled", &self.is_enabled())
            .field("encryptor", &self.encryptor)
            .finish()
    }
}

fn sha_preimage(fields: &RequestFields, passphrase: &str) -> String {
    let mut signed: Vec<(String, &str)> = fields
        .iter()
        .filter(|(_, value)| !value.trim().is_empty())
        .map(|(name, value)| (name.to_uppercase(), value))
        .collect();
    signed.sort_by(|a, b| a.0.cmp(&b.0));

    signed
        .into_iter()
        .map(|(name, value)| format!("{}={}{}", name, value, passphrase))
        .collect()
}

fn legacy_preimage(fields: &RequestFields, passphrase: &str) -> String {
    let mut preimage: String = LEGACY_SIGNED_FIELDS
        .iter()
        .map(|name| fields.get(name).unwrap_or_default())
        .collect();
    preimage.push_str(passphrase);
    preimage
}

/// Serialize a request body
///
/// Adds the `Operation` field and, when signing is enabled, `SHASign`, then
/// form-encodes the fields in order.
pub fn post_data(action: &str, fields: &mut RequestFields, signer: &RequestSigner) -> String {
    fields.add_pair(OPERATION, Some(action));
    if let Some(signature) = signer.signature(fields) {
        fields.set(SIGNATURE, &signature);
    }

    form_urlencoded::Serializer::new(String::new())
        .extend_pairs(fields.iter())
        .finish()
}
