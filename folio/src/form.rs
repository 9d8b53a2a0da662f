//! Contact form validation and acknowledgment.
//!
//! There is no transport: a valid submission is acknowledged locally and the
//! form is cleared. The host supplies a [`Notifier`] that shows the message
//! (a blocking alert in the browser).

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

/// Text shown after a successful submission.
pub const ACKNOWLEDGMENT: &str = "Thank you for your message! This is a demo - no message was actually sent.";

/// Why a submission was refused. The `Display` text is shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("Please fill in all fields.")]
    MissingFields,
    #[error("Please enter a valid email address.")]
    InvalidEmail,
}

/// Something shown to the user as a result of a submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Acknowledged,
    Rejected(FormError),
}

impl Notice {
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Acknowledged => ACKNOWLEDGMENT.to_owned(),
            Self::Rejected(err) => err.to_string(),
        }
    }
}

/// Shows notices to the user.
pub trait Notifier {
    fn notify(&mut self, notice: &Notice);
}

impl Notifier for Vec<Notice> {
    fn notify(&mut self, notice: &Notice) {
        self.push(notice.clone());
    }
}

/// Current field values of the contact form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    #[must_use]
    pub fn new(name: impl Into<String>, email: impl Into<String>, message: impl Into<String>) -> Self {
        Self { name: name.into(), email: email.into(), message: message.into() }
    }

    /// Check the trimmed field values.
    ///
    /// # Errors
    ///
    /// [`FormError::MissingFields`] if any field is blank,
    /// [`FormError::InvalidEmail`] if the email does not look like
    /// `local@domain.tld`.
    pub fn validate(&self) -> Result<(), FormError> {
        let email = self.email.trim();
        if self.name.trim().is_empty() || email.is_empty() || self.message.trim().is_empty() {
            return Err(FormError::MissingFields);
        }
        if !is_valid_email(email) {
            return Err(FormError::InvalidEmail);
        }
        Ok(())
    }

    /// Empty every field.
    pub fn clear(&mut self) {
        self.name.clear();
        self.email.clear();
        self.message.clear();
    }

    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.name.is_empty() && self.email.is_empty() && self.message.is_empty()
    }
}

/// Minimal `local@domain.tld` shape check: no whitespace anywhere, exactly
/// one `@` with something before it, and a `.` after it with text on both
/// sides.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    // Some dot must leave a non-empty label on each side.
    domain
        .match_indices('.')
        .any(|(at, _)| at > 0 && at + 1 < domain.len())
}

/// Validate `form`, notify exactly once, and clear it on success. Failed
/// submissions leave every field as it was.
///
/// # Errors
///
/// Returns the validation failure after it has been shown.
pub fn submit(form: &mut ContactForm, notifier: &mut impl Notifier) -> Result<(), FormError> {
    match form.validate() {
        Ok(()) => {
            notifier.notify(&Notice::Acknowledged);
            form.clear();
            log::debug!("contact form acknowledged");
            Ok(())
        }
        Err(err) => {
            notifier.notify(&Notice::Rejected(err));
            Err(err)
        }
    }
}
