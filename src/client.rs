mod email_client;

pub use email_client::{EmailAuthorizationToken, EmailClient};
