use std::time::{SystemTime, UNIX_EPOCH};

use rand::Rng;

/// Characters the random suffix is drawn from
pub const SUFFIX_ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

pub const SUFFIX_LEN: usize = 8;

/// Per-call token attached to goods list requests as the `REQUESTID` header.
///
/// Formatted as `{unix millis}-{8 lowercase alphanumeric chars}`. Unique with high
/// probability, but it is neither reproducible nor cryptographically strong, so it
/// must not be used as a cache or idempotency key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RequestId(String);

impl RequestId {
    /// Generate new id from the current wall-clock time and the thread RNG
    pub fn generate() -> Self {
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|time| time.as_millis())
            .unwrap_or_default();

        Self::with_timestamp(millis)
    }

    /// Generate new id with given timestamp prefix and a random suffix
    pub fn with_timestamp(millis: u128) -> Self {
        let mut rng = rand::thread_rng();

        let suffix = (0..SUFFIX_LEN)
            .map(|_| SUFFIX_ALPHABET[rng.gen_range(0..SUFFIX_ALPHABET.len())] as char)
            .collect::<String>();

        Self(format!("{millis}-{suffix}"))
    }

    /// Check that given string has the `{millis}-{suffix}` form
    pub fn is_valid(id: impl AsRef<str>) -> bool {
        let Some((timestamp, suffix)) = id.as_ref().split_once('-') else {
            return false;
        };

        !timestamp.is_empty()
            && timestamp.bytes().all(|byte| byte.is_ascii_digit())
            && suffix.len() == SUFFIX_LEN
            && suffix.bytes().all(|byte| SUFFIX_ALPHABET.contains(&byte))
    }

    #[inline]
    pub fn timestamp(&self) -> &str {
        self.0.split_once('-')
            .map(|(timestamp, _)| timestamp)
            .unwrap_or_default()
    }

    #[inline]
    pub fn suffix(&self) -> &str {
        self.0.split_once('-')
            .map(|(_, suffix)| suffix)
            .unwrap_or_default()
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[inline]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for RequestId {
    #[inline]
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
