/// Errors raised while building model values from user-supplied text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ModelError {
    #[error("invalid time of day '{0}', expected HH:MM")]
    InvalidTime(String),

    #[error("unknown weekday '{0}', expected one of Sun, Mon, Tue, Wed, Thu")]
    UnknownWeekday(String),

    #[error("meeting window {start}-{end} is empty or inverted")]
    InvalidWindow { start: String, end: String },
}
