pub mod contact;
pub mod form;
pub mod store;

pub use contact::Contact;
pub use form::ContactForm;
pub use store::ContactStore;
