mod contact;
mod email_address;

pub use contact::{ContactForm, ContactStatus, NewContact};
pub use email_address::EmailAddress;
