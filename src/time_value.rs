//! Duration expressed as an amount of a time unit

use crate::Error;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// Time units understood by [`TimeValue`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeUnit {
    Milliseconds,
    Seconds,
    Minutes,
    Hours,
    Days,
}

impl TimeUnit {
    fn millis_per_unit(&self) -> i64 {
        match self {
            TimeUnit::Milliseconds => 1,
            TimeUnit::Seconds => 1_000,
            TimeUnit::Minutes => 60_000,
            TimeUnit::Hours => 3_600_000,
            TimeUnit::Days => 86_400_000,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TimeUnit::Milliseconds => "ms",
            TimeUnit::Seconds => "s",
            TimeUnit::Minutes => "m",
            TimeUnit::Hours => "h",
            TimeUnit::Days => "d",
        }
    }
}

impl FromStr for TimeUnit {
    type Err = Error;

    fn from_str(value: &str) -> std::result::Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "ms" | "millis" | "milliseconds" => Ok(Self::Milliseconds),
            "s" | "sec" | "secs" | "seconds" => Ok(Self::Seconds),
            "m" | "min" | "mins" | "minutes" => Ok(Self::Minutes),
            "h" | "hour" | "hours" => Ok(Self::Hours),
            "d" | "day" | "days" => Ok(Self::Days),
            other => Err(Error::InvalidTimeUnit(other.to_string())),
        }
    }
}

/// An amount of time in a given unit, e.g. `TimeValue::new(2, TimeUnit::Days)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimeValue {
    value: i64,
    unit: TimeUnit,
}

impl TimeValue {
    pub fn new(value: i64, unit: TimeUnit) -> Self {
        Self { value, unit }
    }

    pub fn seconds(value: i64) -> Self {
        Self::new(value, TimeUnit::Seconds)
    }

    pub fn days(value: i64) -> Self {
        Self::new(value, TimeUnit::Days)
    }

    pub fn value(&self) -> i64 {
        self.value
    }

    pub fn unit(&self) -> TimeUnit {
        self.unit
    }

    /// Whole seconds, truncating sub-second remainders and saturating on
    /// overflow.
    pub fn to_seconds(&self) -> i64 {
        self.to_millis() / 1_000
    }

    pub fn to_millis(&self) -> i64 {
        self.value.saturating_mul(self.unit.millis_per_unit())
    }
}

impl From<Duration> for TimeValue {
    fn from(duration: Duration) -> Self {
        let millis = i64::try_from(duration.as_millis()).unwrap_or(i64::MAX);
        Self::new(millis, TimeUnit::Milliseconds)
    }
}

impl FromStr for TimeValue {
    type Err = Error;

    /// Parses `"<amount><unit>"` such as `"30s"` or `"7 days"`.
    fn from_str(value: &str) -> std::result::Result<Self, Self::Err> {
        let value = value.trim();
        let split = value
            .find(|c: char| !(c.is_ascii_digit() || c == '-'))
            .unwrap_or(value.len());
        let (amount, unit) = value.split_at(split);
        let amount: i64 = amount.trim().parse()?;
        let unit = if unit.trim().is_empty() {
            TimeUnit::Seconds
        } else {
            unit.parse()?
        };
        Ok(Self::new(amount, unit))
    }
}

impl fmt::Display for TimeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value, self.unit.as_str())
    }
}
