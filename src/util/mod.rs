//! Shared utility functions and constants.

pub mod eve;
