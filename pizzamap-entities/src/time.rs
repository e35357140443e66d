use std::fmt;
use time::{format_description::well_known::Rfc3339, OffsetDateTime};

/// A point in time with second precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Timestamp(OffsetDateTime);

impl Timestamp {
    pub fn now() -> Self {
        Self(OffsetDateTime::now_utc())
    }

    pub const fn from_inner(from: OffsetDateTime) -> Self {
        Self(from)
    }

    pub const fn into_inner(self) -> OffsetDateTime {
        self.0
    }

    pub fn from_secs(seconds: i64) -> Option<Self> {
        OffsetDateTime::from_unix_timestamp(seconds).ok().map(Self)
    }

    pub fn as_secs(self) -> i64 {
        self.0.unix_timestamp()
    }

    pub fn parse_rfc3339(s: &str) -> Result<Self, time::error::Parse> {
        OffsetDateTime::parse(s, &Rfc3339).map(Self)
    }

    pub fn format_rfc3339(self) -> String {
        // Formatting a valid `OffsetDateTime` as RFC 3339 only
        // fails for years beyond 9999.
        self.0
            .format(&Rfc3339)
            .unwrap_or_else(|_| self.0.unix_timestamp().to_string())
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        f.write_str(&self.format_rfc3339())
    }
}
