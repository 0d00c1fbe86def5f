use std::{ops::Deref, str::FromStr};

use thiserror::Error;

/// Human readable duration such as `10s`, `1m 30s` or `500ms`.
///
/// A number without a unit is read as seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Duration(pub std::time::Duration);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid duration component `{0}`")]
pub struct ParseDurationError(String);

impl From<Duration> for std::time::Duration {
    fn from(value: Duration) -> Self {
        value.0
    }
}

impl Deref for Duration {
    type Target = std::time::Duration;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromStr for Duration {
    type Err = ParseDurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.split_whitespace()
            .try_fold(std::time::Duration::ZERO, |total, part| {
                let invalid = || ParseDurationError(part.into());
                let unit_start = part
                    .find(|c: char| !c.is_ascii_digit())
                    .unwrap_or(part.len());
                let (value, unit) = part.split_at(unit_start);
                let value: u64 = value.parse().map_err(|_| invalid())?;
                let component = match unit {
                    "ms" => std::time::Duration::from_millis(value),
                    "" | "s" => std::time::Duration::from_secs(value),
                    "m" => std::time::Duration::from_secs(value.saturating_mul(60)),
                    "h" => std::time::Duration::from_secs(value.saturating_mul(3600)),
                    _ => return Err(invalid()),
                };
                Ok(total.saturating_add(component))
            })
            .map(Self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse() {
        for (input, expected) in [
            ("10s", Some(10_000)),
            ("10", Some(10_000)),
            ("500ms", Some(500)),
            ("2m", Some(120_000)),
            ("1h", Some(3_600_000)),
            ("1m 30s", Some(90_000)),
            ("", Some(0)),
            ("s", None),
            ("1d", None),
            ("10ss", None),
            ("-1s", None),
        ] {
            let output = input.parse::<Duration>().ok().map(|x| x.as_millis());
            assert_eq!(output, expected, "{input:?}");
        }
    }
}
