//! Upload key generation and content-type validation policy.
//!
//! Both upload paths (direct body upload and presigned URL) go through this
//! module, so a key minted by either path is indistinguishable downstream.
//! The allow-list is an immutable table injected at construction rather than
//! a process-wide mutable value, which keeps the mapping unit-testable in
//! isolation and immune to cross-request mutation.

use rand::Rng;

use crate::error::AppError;

/// Media kind of an allowed content type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Video,
}

/// One allow-list entry: the exact MIME string, the mapped file extension
/// (with leading dot), and the media kind.
#[derive(Debug, Clone, Copy)]
pub struct AllowedType {
    pub mime: &'static str,
    pub extension: &'static str,
    pub kind: MediaKind,
}

/// Default allow-list: the nine image and video types the gateway accepts.
const DEFAULT_ALLOWED_TYPES: &[AllowedType] = &[
    AllowedType { mime: "image/jpeg", extension: ".jpg", kind: MediaKind::Image },
    AllowedType { mime: "image/jpg", extension: ".jpg", kind: MediaKind::Image },
    AllowedType { mime: "image/png", extension: ".png", kind: MediaKind::Image },
    AllowedType { mime: "image/webp", extension: ".webp", kind: MediaKind::Image },
    AllowedType { mime: "image/gif", extension: ".gif", kind: MediaKind::Image },
    AllowedType { mime: "video/mp4", extension: ".mp4", kind: MediaKind::Video },
    AllowedType { mime: "video/webm", extension: ".webm", kind: MediaKind::Video },
    AllowedType { mime: "video/quicktime", extension: ".mov", kind: MediaKind::Video },
    AllowedType { mime: "video/avi", extension: ".avi", kind: MediaKind::Video },
];

/// Alphabet for the random key suffix: base-36, lowercase.
const KEY_SUFFIX_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Length of the random key suffix. 36^11 values per millisecond bucket.
const KEY_SUFFIX_LEN: usize = 11;

/// Content-type allow-list and storage-key minting.
#[derive(Debug, Clone)]
pub struct UploadPolicy {
    types: &'static [AllowedType],
}

impl Default for UploadPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_ALLOWED_TYPES)
    }
}

impl UploadPolicy {
    pub fn new(types: &'static [AllowedType]) -> Self {
        Self { types }
    }

    fn entry(&self, content_type: &str) -> Option<&AllowedType> {
        self.types.iter().find(|t| t.mime == content_type)
    }

    /// True iff `content_type` is exactly one of the allow-listed MIME
    /// strings. Case-sensitive, no wildcard or parameter parsing:
    /// `image/jpeg;charset=x` is not a match.
    pub fn is_allowed(&self, content_type: &str) -> bool {
        self.types.iter().any(|t| t.mime == content_type)
    }

    pub fn is_image(&self, content_type: &str) -> bool {
        self.entry(content_type)
            .is_some_and(|t| t.kind == MediaKind::Image)
    }

    pub fn is_video(&self, content_type: &str) -> bool {
        self.entry(content_type)
            .is_some_and(|t| t.kind == MediaKind::Video)
    }

    /// File extension (with leading dot) for an allowed content type, `""`
    /// when unmapped. Callers gate on `is_allowed` first; the empty fallback
    /// keeps key generation total.
    pub fn extension_for(&self, content_type: &str) -> &'static str {
        self.entry(content_type).map(|t| t.extension).unwrap_or("")
    }

    /// Mint a storage key for an accepted upload:
    /// `{millisecond-timestamp}-{11-char base36 suffix}{extension}`.
    ///
    /// The suffix is drawn from the thread-local CSPRNG over `0-9a-z`,
    /// giving 36^11 (~1.3e17) possible values per millisecond. Collisions
    /// are treated as practically impossible and are not detected; a
    /// colliding key would silently overwrite the earlier object.
    pub fn generate_key(&self, content_type: &str) -> String {
        let timestamp = chrono::Utc::now().timestamp_millis();
        let mut rng = rand::rng();
        let suffix: String = (0..KEY_SUFFIX_LEN)
            .map(|_| KEY_SUFFIX_ALPHABET[rng.random_range(0..KEY_SUFFIX_ALPHABET.len())] as char)
            .collect();
        format!("{}-{}{}", timestamp, suffix, self.extension_for(content_type))
    }
}

/// Validate a path-supplied asset id. Ids are opaque, but must be non-empty.
pub fn validate_asset_id(id: &str) -> Result<(), AppError> {
    if id.trim().is_empty() {
        return Err(AppError::InvalidInput("Invalid ID parameter".to_string()));
    }
    Ok(())
}
