pub mod submit_contact;

pub use submit_contact::{configure, submit_contact_handler};
