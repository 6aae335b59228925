/// A field-level rejection of an appointment form. The `Display` text is
/// exactly what gets shown to the visitor in the notification toast.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please fill in all required fields.")]
    MissingField { field: &'static str },

    #[error("Please enter a valid email address.")]
    InvalidEmail,

    #[error("Please enter a valid phone number.")]
    InvalidPhone,

    #[error("Please enter a valid date.")]
    InvalidDate,

    #[error("Please select a future date.")]
    PastDate,

    #[error("We are closed on {day}s. Please select another day.")]
    ClosedDay { day: &'static str },

    #[error("Appointments are only available between {open} and {close}.")]
    OutOfHours { open: String, close: String },

    #[error("Please enter a valid time.")]
    InvalidTime,
}

#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("There was an error sending your appointment request. Please try calling us directly.")]
    Send(#[source] anyhow::Error),

    #[error("Your appointment request is still being sent. Please wait a moment.")]
    InFlight,
}
