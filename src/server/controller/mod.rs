//! HTTP request handlers.
//!
//! Controllers check access through the auth guard, turn form input into service
//! parameters and render pages or redirects. Errors are converted to responses by
//! `AppError`.

pub mod auth;
pub mod faction;

#[cfg(test)]
mod test;
