pub mod add;
pub mod catalog;
pub mod index;
pub mod init;
pub mod list;
pub mod notify;
pub mod remove;
pub mod sync;
pub mod url;
pub mod validate;
pub mod webhook;
