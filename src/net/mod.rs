//! Network types for the contact form backend.

pub mod form;
