//! Calendar date inputs.
//!
//! Contract terms and valuation dates arrive either as a `NaiveDate` or as
//! ISO-8601 text (`YYYY-MM-DD`). Both resolve through [`DateInput`], and a
//! parse failure always surfaces as [`PricingError::InvalidArgument`].

use chrono::NaiveDate;

use crate::error::{PricingError, PricingResult};

pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Something that can be resolved to a calendar date.
pub trait DateInput {
    fn into_date(self) -> PricingResult<NaiveDate>;
}

impl DateInput for NaiveDate {
    fn into_date(self) -> PricingResult<NaiveDate> {
        Ok(self)
    }
}

impl DateInput for &NaiveDate {
    fn into_date(self) -> PricingResult<NaiveDate> {
        Ok(*self)
    }
}

impl DateInput for &str {
    fn into_date(self) -> PricingResult<NaiveDate> {
        parse_iso_date(self)
    }
}

impl DateInput for &String {
    fn into_date(self) -> PricingResult<NaiveDate> {
        parse_iso_date(self)
    }
}

impl DateInput for String {
    fn into_date(self) -> PricingResult<NaiveDate> {
        parse_iso_date(&self)
    }
}

/// True for exactly ten ASCII bytes shaped `dddd-dd-dd`.
fn has_iso_shape(text: &str) -> bool {
    let bytes = text.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}

/// Parses `YYYY-MM-DD` text.
///
/// chrono alone accepts unpadded fields, leading whitespace and signed
/// years, so the shape is checked first.
pub fn parse_iso_date(text: &str) -> PricingResult<NaiveDate> {
    if !has_iso_shape(text) {
        return Err(PricingError::invalid_argument(format!(
            "'{text}' is not an ISO-8601 date (expected YYYY-MM-DD)"
        )));
    }
    NaiveDate::parse_from_str(text, ISO_DATE_FORMAT).map_err(|err| {
        PricingError::invalid_argument(format!("'{text}' is not an ISO-8601 date: {err}"))
    })
}

/// Whole days from `from` to `to`, counting `to` itself.
pub fn days_inclusive(from: NaiveDate, to: NaiveDate) -> i64 {
    (to - from).num_days() + 1
}
