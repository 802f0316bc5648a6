pub mod add_doc;
pub mod init;
pub mod list;
pub mod remove_doc;
pub mod requests;
pub mod set_status;
pub mod validate;
