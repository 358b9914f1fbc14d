use serde::Deserialize;

/// Form deserialization wrapper for contact submissions.
///
/// Every field is optional so decoding a partial or empty body always
/// succeeds; validation happens in the conversion to [`NewContact`].
#[derive(Debug, Default, Deserialize)]
pub struct ContactForm {
    pub name: Option<String>,
    pub email: Option<String>,
    pub subject: Option<String>,
    pub message: Option<String>,
}

/// A validated contact submission, ready to be saved and notified on
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewContact {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl TryFrom<ContactForm> for NewContact {
    type Error = String;

    fn try_from(form: ContactForm) -> Result<Self, Self::Error> {
        let name = required(form.name, "name")?;
        let email = required(form.email, "email")?;
        let message = required(form.message, "message")?;
        let subject = form.subject.unwrap_or_default();

        Ok(Self {
            name,
            email,
            subject,
            message,
        })
    }
}

fn required(value: Option<String>, field: &'static str) -> Result<String, String> {
    match value {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(format!("missing required field `{}`", field)),
    }
}

/// Lifecycle status stamped onto stored contact messages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactStatus {
    New,
}

impl ContactStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::New => "new",
        }
    }
}
