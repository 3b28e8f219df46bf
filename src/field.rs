use crate::{series::StepSeries, Error, Result};
use std::collections::BTreeSet;

pub(crate) type FieldValue = u8;

/// The five schedule slots, each with fixed inclusive value bounds.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(crate) enum FieldKind {
    Minutes,
    Hours,
    Doms,
    Months,
    Dows,
}

impl FieldKind {
    fn min_max(&self) -> (FieldValue, FieldValue) {
        match self {
            Self::Minutes => (0, 59),
            Self::Hours => (0, 23),
            Self::Doms => (1, 31),
            Self::Months => (1, 12),
            Self::Dows => (0, 6),
        }
    }

    /// Parses a single field expression and expands it into the sorted,
    /// deduplicated set of values it matches.
    pub(crate) fn expand(&self, input: &str) -> Result<Vec<FieldValue>> {
        let (min, max) = self.min_max();
        Ok(FieldExpr::parse(input, min, max)?.values(min, max))
    }
}

/// One field expression, parsed and bounds-checked.
///
/// Dispatch between the forms is by character presence, in this order:
/// list (`,`), range (`-`), step (`/`), single value. The check is a
/// "contains" test, not an exact shape match, so a malformed combined
/// expression is reported through the path of its first special character:
/// `1-5/2` is classified as a range whose upper bound token `5/2` is not
/// a number.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(crate) enum FieldExpr {
    All,
    Single(FieldValue),
    // start-end, inclusive; start > end denotes the empty set
    Range(FieldValue, FieldValue),
    // start/step, with a `*` start already resolved to 0
    Step(FieldValue, FieldValue),
    List(Vec<FieldExpr>),
}

impl FieldExpr {
    pub(crate) fn parse(input: &str, min: FieldValue, max: FieldValue) -> Result<Self> {
        if input.contains(',') {
            let mut items = Vec::new();
            for sub in input.split(',') {
                items.push(Self::parse(sub, min, max)?);
            }
            Ok(Self::List(items))
        } else if input.contains('-') {
            Self::parse_range(input, min, max)
        } else if input.contains('/') {
            Self::parse_step(input, min, max)
        } else {
            Self::parse_value(input, min, max)
        }
    }

    fn parse_value(input: &str, min: FieldValue, max: FieldValue) -> Result<Self> {
        if input == "*" {
            return Ok(Self::All);
        }

        let value: i64 = input.parse().map_err(|_| Error::NumericalValueInvalid)?;
        if value < i64::from(min) {
            return Err(Error::ValueTooLow);
        }
        if value > i64::from(max) {
            return Err(Error::ValueTooHigh);
        }

        Ok(Self::Single(value as FieldValue))
    }

    fn parse_range(input: &str, min: FieldValue, max: FieldValue) -> Result<Self> {
        let (start, end) = range_bounds(input);
        if start.is_empty() {
            // the whole text starts with `-`: a bare negative number,
            // routed through the single value form
            return Self::parse_value(input, min, max);
        }

        let start: i64 = start.parse().map_err(|_| Error::NumericalValueInvalid)?;
        if start < i64::from(min) {
            return Err(Error::RangePatternBoundTooLow);
        }
        let end: i64 = end.parse().map_err(|_| Error::NumericalValueInvalid)?;
        if end > i64::from(max) {
            return Err(Error::RangePatternBoundTooHigh);
        }

        if start > end {
            // an inverted range expands to nothing; collapse it so the
            // stored bounds always fit the value type
            Ok(Self::Range(1, 0))
        } else {
            Ok(Self::Range(start as FieldValue, end as FieldValue))
        }
    }

    fn parse_step(input: &str, min: FieldValue, max: FieldValue) -> Result<Self> {
        let parts: Vec<&str> = input.split('/').collect();
        if parts.len() != 2 || parts[0].is_empty() || parts[1].is_empty() {
            return Err(Error::StepPatternIncomplete);
        }

        let start = if parts[0] == "*" {
            // a `*` start is literally 0, even for fields whose minimum is 1
            0
        } else {
            let start: i64 = parts[0].parse().map_err(|_| Error::StepPatternValueInvalid)?;
            if start < i64::from(min) {
                return Err(Error::StepPatternValueTooLow);
            }
            if start > i64::from(max) {
                return Err(Error::StepPatternValueTooHigh);
            }
            start as FieldValue
        };

        let step: i64 = parts[1].parse().map_err(|_| Error::StepValueInvalid)?;
        if step <= 0 || step > i64::from(max) {
            return Err(Error::StepValueOutsideRange);
        }

        Ok(Self::Step(start, step as FieldValue))
    }

    /// Expands a validated expression into the ordered set of values it
    /// matches. Infallible: every bound was checked during parsing.
    pub(crate) fn values(&self, min: FieldValue, max: FieldValue) -> Vec<FieldValue> {
        match self {
            Self::All => (min..=max).collect(),
            Self::Single(value) => vec![*value],
            Self::Range(start, end) => (*start..=*end).collect(),
            Self::Step(start, step) => StepSeries::new(*start, max, *step).collect(),
            Self::List(items) => {
                let mut pooled = BTreeSet::new();
                for item in items {
                    pooled.extend(item.values(min, max));
                }
                pooled.into_iter().collect()
            }
        }
    }
}

/// Splits range text into its two bound tokens, ignoring anything past the
/// second `-`. Text with exactly two dashes is assumed to start with one and
/// is re-assembled into a negative first token: `-5-10` gives `-5` and `10`.
fn range_bounds(input: &str) -> (String, String) {
    let (rest, prefix) = if input.matches('-').count() == 2 {
        (input.get(1..).unwrap_or_default(), "-")
    } else {
        (input, "")
    };

    let mut bounds = rest.split('-');
    let start = format!("{prefix}{}", bounds.next().unwrap_or_default());
    let end = bounds.next().unwrap_or_default().to_owned();

    (start, end)
}
