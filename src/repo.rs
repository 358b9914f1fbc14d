mod contacts;

pub use contacts::{ContactRecord, ContactsRepo};
