use crate::utils::error::{Result, ToolsError};
use serde::Serialize;
use std::borrow::Cow;
use std::fmt;
use std::path::PathBuf;

/// Number of digits in a BSN.
pub const BSN_LENGTH: usize = 9;

/// Largest value that still fits in nine digits.
pub const MAX_BSN_NUMBER: u64 = 999_999_999;

/// Raw input to the validator: either a number or a digit string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Candidate<'a> {
    Number(i128),
    Text(Cow<'a, str>),
}

macro_rules! candidate_from_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Candidate<'_> {
                fn from(value: $ty) -> Self {
                    Candidate::Number(i128::from(value))
                }
            }
        )*
    };
}

candidate_from_int!(u32, u64, i32, i64);

impl<'a> From<&'a str> for Candidate<'a> {
    fn from(value: &'a str) -> Self {
        Candidate::Text(Cow::Borrowed(value))
    }
}

impl<'a> From<&'a String> for Candidate<'a> {
    fn from(value: &'a String) -> Self {
        Candidate::Text(Cow::Borrowed(value.as_str()))
    }
}

impl From<String> for Candidate<'_> {
    fn from(value: String) -> Self {
        Candidate::Text(Cow::Owned(value))
    }
}

impl<'a> From<&'a Bsn> for Candidate<'a> {
    fn from(value: &'a Bsn) -> Self {
        Candidate::Text(Cow::Borrowed(value.as_str()))
    }
}

/// A well-formed BSN: exactly nine decimal digits, zero-padded.
///
/// Holding a `Bsn` says nothing about the 11-proof; use
/// [`crate::core::bsn::is_valid_bsn`] for that.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Bsn(String);

impl Bsn {
    /// Normalises a candidate into nine digits.
    ///
    /// Surrounding whitespace is ignored and shorter inputs are padded with
    /// leading zeros. Empty input, non-digit characters and more than nine
    /// digits are rejected with [`ToolsError::InvalidFormat`].
    pub fn parse<'a>(candidate: impl Into<Candidate<'a>>) -> Result<Self> {
        match candidate.into() {
            Candidate::Number(value) => {
                let value = u64::try_from(value)
                    .map_err(|_| ToolsError::invalid_format(&value.to_string(), "negative number"))?;
                Self::from_number(value)
            }
            Candidate::Text(text) => Self::from_text(&text),
        }
    }

    pub fn from_number(value: u64) -> Result<Self> {
        if value > MAX_BSN_NUMBER {
            return Err(ToolsError::invalid_format(
                &value.to_string(),
                format!("more than {} digits", BSN_LENGTH),
            ));
        }
        Ok(Self(format!("{:09}", value)))
    }

    fn from_text(text: &str) -> Result<Self> {
        let trimmed = text.trim();

        if trimmed.is_empty() {
            return Err(ToolsError::invalid_format(text, "input is empty"));
        }
        if !trimmed.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ToolsError::invalid_format(
                text,
                "contains a non-digit character",
            ));
        }
        if trimmed.len() > BSN_LENGTH {
            return Err(ToolsError::invalid_format(
                text,
                format!("more than {} digits", BSN_LENGTH),
            ));
        }

        Ok(Self(format!("{:0>width$}", trimmed, width = BSN_LENGTH)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Digit values d1..d9, left to right.
    pub fn digits(&self) -> [u8; BSN_LENGTH] {
        let mut digits = [0u8; BSN_LENGTH];
        for (slot, byte) in digits.iter_mut().zip(self.0.bytes()) {
            *slot = byte - b'0';
        }
        digits
    }

    pub fn is_all_zero(&self) -> bool {
        self.0.bytes().all(|b| b == b'0')
    }
}

impl fmt::Display for Bsn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Where a row in the BSN test file came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BsnSource {
    Sample,
    Generated,
}

/// One row of `bsn_testbestand.csv`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BsnRecord {
    pub bsn: Bsn,
    pub valid: bool,
    pub source: BsnSource,
}

/// Result of running a job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobOutcome {
    pub output_path: PathBuf,
    pub records: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_pads_short_input() {
        assert_eq!(Bsn::parse("12345678").unwrap().as_str(), "012345678");
        assert_eq!(Bsn::parse(12u64).unwrap().as_str(), "000000012");
        assert_eq!(Bsn::parse(" 123456782\n").unwrap().as_str(), "123456782");
    }

    #[test]
    fn test_parse_accepts_owned_strings_and_plain_literals() {
        assert_eq!(Bsn::parse(String::from("12")).unwrap().as_str(), "000000012");
        assert_eq!(Bsn::parse(123456782).unwrap().as_str(), "123456782");
        assert_eq!(Bsn::parse(12u32).unwrap().as_str(), "000000012");
        assert_eq!(Bsn::parse(12i64).unwrap().as_str(), "000000012");
        assert!(matches!(
            Bsn::parse(-12),
            Err(ToolsError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn test_parse_rejects_malformed_input() {
        assert!(matches!(
            Bsn::parse(""),
            Err(ToolsError::InvalidFormat { .. })
        ));
        assert!(matches!(
            Bsn::parse("12345678a"),
            Err(ToolsError::InvalidFormat { .. })
        ));
        assert!(matches!(
            Bsn::parse("-12345678"),
            Err(ToolsError::InvalidFormat { .. })
        ));
        assert!(matches!(
            Bsn::parse("1234567890"),
            Err(ToolsError::InvalidFormat { .. })
        ));
        assert!(matches!(
            Bsn::parse(1_000_000_000u64),
            Err(ToolsError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn test_digits() {
        let bsn = Bsn::parse("012345678").unwrap();
        assert_eq!(bsn.digits(), [0, 1, 2, 3, 4, 5, 6, 7, 8]);
        assert!(!bsn.is_all_zero());
        assert!(Bsn::parse(0u64).unwrap().is_all_zero());
    }

    #[test]
    fn test_record_serializes_lowercase_source() {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer
            .serialize(BsnRecord {
                bsn: Bsn::parse("123456782").unwrap(),
                valid: true,
                source: BsnSource::Sample,
            })
            .unwrap();
        let data = String::from_utf8(writer.into_inner().unwrap()).unwrap();
        assert_eq!(data, "bsn,valid,source\n123456782,true,sample\n");
    }
}
