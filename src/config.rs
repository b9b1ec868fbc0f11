//! Service configuration loaded from environment variables.

use std::env;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use chrono::FixedOffset;

/// Default campus feed endpoint.
pub const DEFAULT_FEED_URL: &str = "https://portalapi2.uwaterloo.ca/v2/map/OpenClassrooms";

const DEFAULT_FEED_TIMEOUT_SECS: u64 = 15;
const DEFAULT_CAMPUS_UTC_OFFSET: &str = "-04:00";

/// Runtime configuration, loaded once at startup.
///
/// # Environment Variables
/// - `FEED_URL` (optional): upstream feed endpoint
/// - `FEED_TIMEOUT_SECS` (optional, default: 15): upstream request timeout
/// - `CAMPUS_UTC_OFFSET` (optional, default: -04:00): fixed campus UTC
///   offset as `+HH:MM` or `-HH:MM`
#[derive(Debug, Clone)]
pub struct Config {
    /// Upstream feed endpoint
    pub feed_url: String,
    /// Bound on the single outbound fetch per request
    pub feed_timeout: Duration,
    /// The campus's fixed timezone offset; all "now" values are taken here
    pub campus_offset: FixedOffset,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let feed_url = env::var("FEED_URL").unwrap_or_else(|_| DEFAULT_FEED_URL.to_string());

        let feed_timeout = match env::var("FEED_TIMEOUT_SECS") {
            Ok(raw) => Duration::from_secs(
                raw.parse()
                    .context("FEED_TIMEOUT_SECS must be an integer number of seconds")?,
            ),
            Err(_) => Duration::from_secs(DEFAULT_FEED_TIMEOUT_SECS),
        };

        let offset_raw = env::var("CAMPUS_UTC_OFFSET")
            .unwrap_or_else(|_| DEFAULT_CAMPUS_UTC_OFFSET.to_string());
        let campus_offset = parse_utc_offset(&offset_raw)?;

        Ok(Self {
            feed_url,
            feed_timeout,
            campus_offset,
        })
    }
}

/// Parse a `+HH:MM` / `-HH:MM` offset string into a fixed offset.
pub fn parse_utc_offset(raw: &str) -> Result<FixedOffset> {
    let (sign, rest) = match raw.as_bytes().first() {
        Some(b'+') => (1, &raw[1..]),
        Some(b'-') => (-1, &raw[1..]),
        _ => bail!("UTC offset {raw:?} must start with '+' or '-'"),
    };
    let (hours, minutes) = rest
        .split_once(':')
        .with_context(|| format!("UTC offset {raw:?} must look like +HH:MM"))?;
    let hours: i32 = hours
        .parse()
        .with_context(|| format!("bad hours in UTC offset {raw:?}"))?;
    let minutes: i32 = minutes
        .parse()
        .with_context(|| format!("bad minutes in UTC offset {raw:?}"))?;
    if !(0..=14).contains(&hours) || !(0..60).contains(&minutes) {
        bail!("UTC offset {raw:?} out of range");
    }
    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
        .with_context(|| format!("UTC offset {raw:?} out of range"))
}
