use thiserror::Error;

/// Crate specific Errors implementation.
///
/// Variants are sentinels: they carry no payload and compare by kind only,
/// so an error raised deep inside a list sub-expression reaches the caller
/// verbatim.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Error {
    /// Config line doesn't consist of exactly six fields.
    #[error("an incorrect number of fields in the cron config")]
    FieldsCountInvalid,
    /// Schedule pattern doesn't consist of exactly five fields.
    #[error("an incorrect number of fields in the cron pattern")]
    PatternFieldsCountInvalid,
    /// Field value is not an integer.
    #[error("number value invalid")]
    NumericalValueInvalid,
    /// Field value is below the field's minimum.
    #[error("value lower than minimum")]
    ValueTooLow,
    /// Field value is above the field's maximum.
    #[error("value higher than maximum")]
    ValueTooHigh,
    /// Step expression is missing its start or its step part.
    #[error("part of step missing")]
    StepPatternIncomplete,
    /// Step start value is not an integer.
    #[error("value invalid for a step")]
    StepPatternValueInvalid,
    /// Step start value is below the field's minimum.
    #[error("value for a step lower than minimum")]
    StepPatternValueTooLow,
    /// Step start value is above the field's maximum.
    #[error("value for a step higher than maximum")]
    StepPatternValueTooHigh,
    /// Step value is not an integer.
    #[error("step value incorrect")]
    StepValueInvalid,
    /// Step value is zero, negative or above the field's maximum.
    #[error("step value outside valid range")]
    StepValueOutsideRange,
    /// Range lower bound is below the field's minimum.
    #[error("lower bound value lower than minimum")]
    RangePatternBoundTooLow,
    /// Range upper bound is above the field's maximum.
    #[error("upper bound value higher than maximum")]
    RangePatternBoundTooHigh,
}
