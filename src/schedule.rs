use crate::{
    field::{FieldKind, FieldValue},
    Error, Result,
};
use std::{fmt::Display, str::FromStr};

/// Evaluated schedule pattern: for each of the five time fields, the
/// concrete ascending set of values it matches.
///
/// Fields are validated independently; combinations that can never match a
/// real date (day 31 in February) are accepted as is.
///
/// For the schedule format clarification and usage examples, please refer to
/// the [crate documentation](crate).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pattern {
    minutes: Vec<FieldValue>,
    hours: Vec<FieldValue>,
    doms: Vec<FieldValue>,
    months: Vec<FieldValue>,
    dows: Vec<FieldValue>,
}

impl Pattern {
    /// Parses and validates the provided five-field schedule `pattern` and
    /// constructs a [`Pattern`] instance.
    ///
    /// The text must consist of exactly five non-empty fields separated by
    /// single spaces: minute, hour, day of month, month and day of week.
    /// Fields are evaluated left to right and the first [`Error`] aborts
    /// parsing.
    ///
    /// Alternative way to construct [`Pattern`] is to use one of `try_from`
    /// or `from_str` methods.
    pub fn new(pattern: impl AsRef<str>) -> Result<Self> {
        let fields: Vec<&str> = pattern.as_ref().split(' ').collect();
        if fields.len() != 5 || fields.iter().any(|field| field.is_empty()) {
            return Err(Error::PatternFieldsCountInvalid);
        }

        Ok(Self {
            minutes: FieldKind::Minutes.expand(fields[0])?,
            hours: FieldKind::Hours.expand(fields[1])?,
            doms: FieldKind::Doms.expand(fields[2])?,
            months: FieldKind::Months.expand(fields[3])?,
            dows: FieldKind::Dows.expand(fields[4])?,
        })
    }

    /// Minute values (0-59) the schedule matches.
    pub fn minutes(&self) -> &[FieldValue] {
        &self.minutes
    }

    /// Hour values (0-23) the schedule matches.
    pub fn hours(&self) -> &[FieldValue] {
        &self.hours
    }

    /// Day of month values (1-31) the schedule matches.
    pub fn doms(&self) -> &[FieldValue] {
        &self.doms
    }

    /// Month values (1-12) the schedule matches.
    pub fn months(&self) -> &[FieldValue] {
        &self.months
    }

    /// Day of week values (0-6, Sunday is 0) the schedule matches.
    pub fn dows(&self) -> &[FieldValue] {
        &self.dows
    }
}

/// Parsed cron config line: a schedule [`Pattern`] plus the command to run
/// when all five fields match.
///
/// The command is kept as the raw sixth field; no structure is imposed on
/// it, and commands with embedded spaces are not representable in this
/// grammar.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Config {
    pattern: Pattern,
    command: String,
}

impl Config {
    /// Parses and validates the provided six-field config `line` and
    /// constructs a [`Config`] instance.
    ///
    /// The line must consist of exactly six non-empty fields separated by
    /// single spaces: the five schedule fields followed by the command.
    ///
    /// Alternative way to construct [`Config`] is to use one of `try_from`
    /// or `from_str` methods.
    pub fn new(line: impl AsRef<str>) -> Result<Self> {
        let fields: Vec<&str> = line.as_ref().split(' ').collect();
        if fields.len() != 6 || fields.iter().any(|field| field.is_empty()) {
            return Err(Error::FieldsCountInvalid);
        }

        // Pattern::new owns the field splitting contract, so the time fields
        // are re-joined and handed over as the exact five-field text.
        let pattern = Pattern::new(fields[..5].join(" "))?;

        Ok(Self {
            pattern,
            command: fields[5].to_owned(),
        })
    }

    /// The evaluated schedule part of the line.
    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    /// The command part of the line, verbatim.
    pub fn command(&self) -> &str {
        &self.command
    }
}

impl TryFrom<String> for Pattern {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

impl TryFrom<&String> for Pattern {
    type Error = Error;

    fn try_from(value: &String) -> Result<Self> {
        Self::new(value)
    }
}

impl TryFrom<&str> for Pattern {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self> {
        Self::new(value)
    }
}

impl FromStr for Pattern {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl TryFrom<String> for Config {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

impl TryFrom<&String> for Config {
    type Error = Error;

    fn try_from(value: &String) -> Result<Self> {
        Self::new(value)
    }
}

impl TryFrom<&str> for Config {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self> {
        Self::new(value)
    }
}

impl FromStr for Config {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl Display for Pattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{:<14} {}", "minute", format_values(&self.minutes))?;
        writeln!(f, "{:<14} {}", "hour", format_values(&self.hours))?;
        writeln!(f, "{:<14} {}", "day of month", format_values(&self.doms))?;
        writeln!(f, "{:<14} {}", "month", format_values(&self.months))?;
        writeln!(f, "{:<14} {}", "day of week", format_values(&self.dows))
    }
}

impl Display for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.pattern)?;
        writeln!(f, "{:<14} {}", "command", self.command)
    }
}

/// Renders a value set as space separated decimal numbers.
fn format_values(values: &[FieldValue]) -> String {
    values.iter().map(|value| value.to_string()).collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rstest_reuse::{apply, template};

    #[rstest]
    #[case("1 0 1 1 0", vec![1], vec![0], vec![1], vec![1], vec![0])]
    #[case(
        "*/15,7,13-16 0 1 1 0",
        vec![0, 7, 13, 14, 15, 16, 30, 45],
        vec![0],
        vec![1],
        vec![1],
        vec![0]
    )]
    #[case(
        "*/15 0 1,15 * 1-5",
        vec![0, 15, 30, 45],
        vec![0],
        vec![1, 15],
        (1..=12).collect(),
        vec![1, 2, 3, 4, 5]
    )]
    fn pattern_new_valid(
        #[case] text: &str,
        #[case] minutes: Vec<FieldValue>,
        #[case] hours: Vec<FieldValue>,
        #[case] doms: Vec<FieldValue>,
        #[case] months: Vec<FieldValue>,
        #[case] dows: Vec<FieldValue>,
    ) {
        let pattern = Pattern::new(text);
        assert!(pattern.is_ok(), "text = {text}, error = {}", pattern.err().unwrap());

        let pattern = pattern.unwrap();
        assert_eq!(pattern.minutes(), minutes, "text = {text}");
        assert_eq!(pattern.hours(), hours, "text = {text}");
        assert_eq!(pattern.doms(), doms, "text = {text}");
        assert_eq!(pattern.months(), months, "text = {text}");
        assert_eq!(pattern.dows(), dows, "text = {text}");
    }

    #[rstest]
    #[case("", Error::PatternFieldsCountInvalid)]
    #[case(" ", Error::PatternFieldsCountInvalid)]
    #[case("* * * *", Error::PatternFieldsCountInvalid)]
    #[case("* * * * * *", Error::PatternFieldsCountInvalid)]
    #[case("1  2 3 4", Error::PatternFieldsCountInvalid)]
    #[case("* * * * * ", Error::PatternFieldsCountInvalid)]
    #[case("-12 * * * *", Error::ValueTooLow)]
    #[case("* * * 13 *", Error::ValueTooHigh)]
    #[case("abc * * * *", Error::NumericalValueInvalid)]
    #[case("* * 1-42 * *", Error::RangePatternBoundTooHigh)]
    fn pattern_new_invalid(#[case] text: &str, #[case] expected: Error) {
        assert_eq!(Pattern::new(text), Err(expected), "text = {text}");
    }

    #[test]
    fn config_new_full_example() {
        let config = Config::new("*/15 0 1,15 * 1-5 /usr/bin/find").unwrap();

        assert_eq!(config.pattern().minutes(), &[0, 15, 30, 45]);
        assert_eq!(config.pattern().hours(), &[0]);
        assert_eq!(config.pattern().doms(), &[1, 15]);
        assert_eq!(config.pattern().months(), &[1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12]);
        assert_eq!(config.pattern().dows(), &[1, 2, 3, 4, 5]);
        assert_eq!(config.command(), "/usr/bin/find");
    }

    #[rstest]
    #[case("", Error::FieldsCountInvalid)]
    #[case("*/15 0 1,15 * 1-5", Error::FieldsCountInvalid)]
    #[case("*/15 0 1,15 * 1-5 /usr/bin/find now", Error::FieldsCountInvalid)]
    #[case("*/15 0 1,15 * 9 /usr/bin/find", Error::ValueTooHigh)]
    #[case("60 0 1,15 * 1-5 /usr/bin/find", Error::ValueTooHigh)]
    #[case("*/0 0 1,15 * 1-5 /usr/bin/find", Error::StepValueOutsideRange)]
    fn config_new_invalid(#[case] line: &str, #[case] expected: Error) {
        assert_eq!(Config::new(line), Err(expected), "line = {line}");
    }

    #[test]
    fn config_display() {
        let config = Config::new("*/15 0 1,15 * 1-5 /usr/bin/find").unwrap();

        let expected = concat!(
            "minute         0 15 30 45\n",
            "hour           0\n",
            "day of month   1 15\n",
            "month          1 2 3 4 5 6 7 8 9 10 11 12\n",
            "day of week    1 2 3 4 5\n",
            "command        /usr/bin/find\n",
        );
        assert_eq!(config.to_string(), expected);
    }

    #[template]
    #[rstest]
    #[case("1 0 1 1 0 /bin/true")]
    #[case("*/15 0 1,15 * 1-5 /usr/bin/find")]
    #[case("* * * * * reboot")]
    fn valid_config_lines(#[case] line: &str) {}

    #[apply(valid_config_lines)]
    fn config_new_accepts(line: &str) {
        let config = Config::new(line);
        assert!(config.is_ok(), "line = {line}, error = {}", config.err().unwrap());
    }

    #[apply(valid_config_lines)]
    fn config_conversions_match_new(line: &str) {
        let expected = Config::new(line).unwrap();
        let owned = line.to_string();

        assert_eq!(line.parse::<Config>().unwrap(), expected);
        assert_eq!(Config::try_from(line).unwrap(), expected);
        assert_eq!(Config::try_from(&owned).unwrap(), expected);
        assert_eq!(Config::try_from(owned).unwrap(), expected);
    }

    #[rstest]
    #[case("1 0 1 1 0")]
    #[case("*/15 0 1,15 * 1-5")]
    fn pattern_conversions_match_new(#[case] text: &str) {
        let expected = Pattern::new(text).unwrap();
        let owned = text.to_string();

        assert_eq!(text.parse::<Pattern>().unwrap(), expected);
        assert_eq!(Pattern::try_from(text).unwrap(), expected);
        assert_eq!(Pattern::try_from(&owned).unwrap(), expected);
        assert_eq!(Pattern::try_from(owned).unwrap(), expected);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_round_trip() {
        let config = Config::new("*/15 0 1,15 * 1-5 /usr/bin/find").unwrap();

        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(serde_json::from_str::<Config>(&json).unwrap(), config);
    }
}
