//! Core engine types shared by every component

pub mod error;
