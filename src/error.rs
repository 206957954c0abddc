//! Error types for argument validation and clock access.

/// Every way a run can end without printing a calendar.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalError {
    /// Wrong number of arguments, or a token that is not `month.year`.
    #[error("for usage locale-cal month.year (example: locale-cal 02.2014 for feb 2014)")]
    Usage,

    /// Month outside 1..=12.
    #[error("incorrect format of the month")]
    InvalidMonth,

    /// Year outside 1..=9998.
    #[error("incorrect format of the year")]
    InvalidYear,

    /// The host clock could not be read or mapped to a local date.
    #[error("cannot read the system clock")]
    ClockUnavailable,
}
