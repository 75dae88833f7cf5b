//! Bulk email action over the selected rows.
//!
//! Builds a `mailto:` link that blind-copies every selected address and hands
//! it to the browser. Bad selections (nothing selected, a selected person
//! with no address on file) are reported with an alert instead.

#[cfg(test)]
#[path = "bulk_email_test.rs"]
mod bulk_email_test;

/// Why a bulk email could not be composed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BulkEmailError {
    /// No row is selected.
    NothingSelected,
    /// A selected row has no email address on file.
    MissingAddress,
}

impl BulkEmailError {
    /// Message shown to the user.
    pub fn user_message(self) -> &'static str {
        match self {
            Self::NothingSelected => "Select at least one person.",
            Self::MissingAddress => {
                "We don't know the email address of some of the selected people. First, unselect them."
            }
        }
    }
}

/// Build a `mailto:` href that blind-copies `emails`.
///
/// # Errors
///
/// Returns an error when nothing is selected or when a selected row has a
/// blank address. The blank-address check runs first, so a selection that
/// consists only of blank addresses reports the address problem.
pub fn mailto_href(emails: &[String]) -> Result<String, BulkEmailError> {
    if emails.iter().any(|email| email.is_empty()) {
        return Err(BulkEmailError::MissingAddress);
    }
    if emails.is_empty() {
        return Err(BulkEmailError::NothingSelected);
    }
    Ok(format!("mailto:?bcc={}", emails.join(",")))
}

/// Open the user's mail client for `emails`, or alert on a bad selection.
pub fn open_bulk_email(emails: &[String]) {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        match mailto_href(emails) {
            Ok(href) => {
                let _ = window.location().set_href(&href);
            }
            Err(err) => {
                let _ = window.alert_with_message(err.user_message());
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = emails;
    }
}
