pub mod document;
pub mod lenient;
pub mod request;
