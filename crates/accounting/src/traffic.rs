use std::net::IpAddr;

use serde::{Deserialize, Serialize};

use dormnet_core::{DomainError, ValueObject};

/// Largest counter a `DECIMAL(20,0)` column can hold.
pub const MAX_COUNTER: u128 = 99_999_999_999_999_999_999;

/// Wire shape of a stored traffic row, validated into [`TrafficRecord`].
#[derive(Debug, Clone, Deserialize)]
struct TrafficRow {
    timetag: i64,
    ip: IpAddr,
    input: u128,
    output: u128,
}

/// Per-address usage counters for one accounting period.
///
/// Counters are stored as 20-digit decimals upstream; `u128` holds any sum of
/// two of them. Deserialization rejects counters past [`MAX_COUNTER`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "TrafficRow")]
pub struct TrafficRecord {
    pub timetag: i64,
    pub ip: IpAddr,
    pub input: u128,
    pub output: u128,
}

impl TrafficRecord {
    /// `input + output`. Derived on read, never stored.
    pub fn overall(&self) -> u128 {
        self.input.saturating_add(self.output)
    }
}

impl TryFrom<TrafficRow> for TrafficRecord {
    type Error = DomainError;

    fn try_from(r: TrafficRow) -> Result<Self, Self::Error> {
        for (field, value) in [("input", r.input), ("output", r.output)] {
            if value > MAX_COUNTER {
                return Err(DomainError::validation(format!(
                    "traffic {field} counter {value} for {} exceeds 20 digits",
                    r.ip
                )));
            }
        }
        Ok(Self {
            timetag: r.timetag,
            ip: r.ip,
            input: r.input,
            output: r.output,
        })
    }
}

/// Summed counters over a set of traffic records.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TrafficTotals {
    pub input: u128,
    pub output: u128,
    pub overall: u128,
}

impl TrafficTotals {
    pub fn from_records<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a TrafficRecord>,
    {
        records.into_iter().fold(Self::default(), |acc, r| Self {
            input: acc.input.saturating_add(r.input),
            output: acc.output.saturating_add(r.output),
            overall: acc.overall.saturating_add(r.overall()),
        })
    }
}

impl ValueObject for TrafficTotals {}
