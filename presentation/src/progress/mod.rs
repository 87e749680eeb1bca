//! Progress display

pub mod spinner;

pub use spinner::LoadingIndicator;
