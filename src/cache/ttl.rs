//! TTL Spec Module
//!
//! Parses the caller-supplied expiration string ("1m", "10s", "1µs", ...).

use std::time::Duration;

// == TTL Spec ==
/// The caller's requested lifetime for an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TtlSpec {
    /// No expiration string was supplied
    Absent,
    /// A well-formed duration (possibly zero)
    Duration(Duration),
    /// Something that is not a duration, e.g. a bare integer without a unit
    Invalid,
}

impl TtlSpec {
    // == Parse ==
    /// Parses an expiration string.
    ///
    /// Accepts the usual unit suffixes (`ns`, `us`/`µs`, `ms`, `s`, `m`, `h`,
    /// `d`) and whitespace-separated compounds such as `"1h 30m"`.
    pub fn parse(spec: &str) -> Self {
        let spec = spec.trim();
        if spec.is_empty() {
            return TtlSpec::Absent;
        }

        // humantime only knows the ASCII spelling of microseconds
        let normalized = spec.replace("µs", "us").replace("μs", "us");

        match humantime::parse_duration(&normalized) {
            Ok(duration) => TtlSpec::Duration(duration),
            Err(_) => TtlSpec::Invalid,
        }
    }

    // == Resolve ==
    /// Resolves the effective TTL against the engine's default.
    ///
    /// Returns None when the entry must never expire.
    pub fn resolve(self, default_ttl: Duration) -> Option<Duration> {
        let ttl = match self {
            TtlSpec::Duration(duration) => duration,
            TtlSpec::Absent | TtlSpec::Invalid => default_ttl,
        };

        if ttl.is_zero() {
            None
        } else {
            Some(ttl)
        }
    }
}
