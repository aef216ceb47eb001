//! Timestamp codec.
//!
//! Text is an ISO-8601 date-time with an explicit offset. Naive input is
//! taken to be UTC and always written with `Z`. Decoding returns an
//! offset-aware value normalized to UTC, whatever offset the text carried:
//!
//! ```
//! use chrono::NaiveDate;
//! use sarmeta_codec::{Codec, Xdt, XdtCodec};
//!
//! let naive = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap().and_hms_micro_opt(12, 0, 0, 250).unwrap();
//! let elem = XdtCodec::default().make_elem("CollectStart", &Xdt::from(naive))?;
//! assert_eq!(elem.text(), Some("2024-03-01T12:00:00.000250Z"));
//! assert_eq!(XdtCodec::default().parse_elem(&elem)?, Xdt::Aware(naive.and_utc().fixed_offset()));
//! # Ok::<(), sarmeta_codec::CodecError>(())
//! ```

use crate::codec::Codec;
use crate::error::{CodecError, Result};
use chrono::{DateTime, FixedOffset, NaiveDateTime, SecondsFormat, TimeZone, Utc};
use sarmeta_xml::Element;

/// A timestamp with or without an associated UTC offset.
///
/// Equality between two `Aware` values compares instants, so values that
/// differ only in offset are equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Xdt {
    Naive(NaiveDateTime),
    Aware(DateTime<FixedOffset>),
}

impl Xdt {
    /// The value as an offset-aware timestamp, treating naive values as UTC.
    pub fn to_aware(&self) -> DateTime<FixedOffset> {
        match self {
            Xdt::Naive(naive) => naive.and_utc().fixed_offset(),
            Xdt::Aware(aware) => *aware,
        }
    }

    /// The instant in UTC.
    pub fn to_utc(&self) -> DateTime<Utc> {
        self.to_aware().with_timezone(&Utc)
    }
}

impl From<NaiveDateTime> for Xdt {
    fn from(naive: NaiveDateTime) -> Self {
        Xdt::Naive(naive)
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for Xdt {
    fn from(aware: DateTime<Tz>) -> Self {
        Xdt::Aware(aware.fixed_offset())
    }
}

/// Number of fractional-second digits written on encode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TimestampPrecision {
    /// Fewest of 3, 6 or 9 digits that represent the value exactly.
    #[default]
    Auto,
    Millis,
    Micros,
    Nanos,
}

impl TimestampPrecision {
    fn seconds_format(self, nanos: u32) -> SecondsFormat {
        match self {
            TimestampPrecision::Auto if nanos % 1_000_000 == 0 => SecondsFormat::Millis,
            TimestampPrecision::Auto if nanos % 1_000 == 0 => SecondsFormat::Micros,
            TimestampPrecision::Auto => SecondsFormat::Nanos,
            TimestampPrecision::Millis => SecondsFormat::Millis,
            TimestampPrecision::Micros => SecondsFormat::Micros,
            TimestampPrecision::Nanos => SecondsFormat::Nanos,
        }
    }
}

/// ISO-8601 timestamp codec.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct XdtCodec {
    precision: TimestampPrecision,
}

impl XdtCodec {
    pub fn with_precision(precision: TimestampPrecision) -> Self {
        Self { precision }
    }

    pub fn precision(&self) -> TimestampPrecision {
        self.precision
    }
}

impl Codec for XdtCodec {
    type Value = Xdt;

    fn parse_elem(&self, elem: &Element) -> Result<Xdt> {
        let text = elem.text().unwrap_or_default();
        let parsed = parse_timestamp(text.trim())
            .ok_or_else(|| CodecError::format(elem.tag(), "timestamp", text).traced())?;
        Ok(Xdt::Aware(parsed.with_timezone(&Utc).fixed_offset()))
    }

    fn set_elem(&self, elem: &mut Element, value: &Xdt) -> Result<()> {
        let aware = value.to_aware();
        let format = self.precision.seconds_format(aware.timestamp_subsec_nanos());
        let text = aware.to_rfc3339_opts(format, true);
        elem.set_text(text);
        Ok(())
    }
}

/// Offset-bearing text is read as RFC 3339; text without an offset is UTC.
fn parse_timestamp(text: &str) -> Option<DateTime<FixedOffset>> {
    if let Ok(aware) = DateTime::parse_from_rfc3339(text) {
        return Some(aware);
    }
    NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| naive.and_utc().fixed_offset())
}
