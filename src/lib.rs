//! bntf-docs: maintain the PDF document archive the BNTF app reads over raw URLs.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api;
pub use domain::AppError;
