// contact-domain library entry point
pub mod contact;
pub use contact::{Contact, ContactBuilder};
