//! Wall-clock timestamps for account metadata
//!
//! Timestamps are local time with second precision and are always rendered as
//! `YYYY-MM-DD HH:MM:SS`, both for display and in the data file.

use chrono::{Local, NaiveDateTime, SubsecRound};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Textual layout of every timestamp the ledger reads or writes
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A local date and time, truncated to whole seconds
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(NaiveDateTime);

impl Timestamp {
    /// The current local time
    ///
    /// Sub-second precision is dropped so the value compares equal to itself
    /// after a trip through its textual form.
    pub fn now() -> Self {
        Timestamp(Local::now().naive_local().trunc_subsecs(0))
    }

    /// Wrap an existing date and time, truncating it to whole seconds
    pub fn from_naive(value: NaiveDateTime) -> Self {
        Timestamp(value.trunc_subsecs(0))
    }

    /// The underlying date and time
    pub fn as_naive(&self) -> NaiveDateTime {
        self.0
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(TIMESTAMP_FORMAT))
    }
}

impl FromStr for Timestamp {
    type Err = chrono::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveDateTime::parse_from_str(s.trim(), TIMESTAMP_FORMAT).map(Timestamp)
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(|e| {
            serde::de::Error::custom(format!(
                "invalid timestamp '{}' (expected YYYY-MM-DD HH:MM:SS): {}",
                raw, e
            ))
        })
    }
}
