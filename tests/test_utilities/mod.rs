//! Shared helpers for integration and end-to-end tests
#![allow(dead_code)]

pub mod dtb_builder;
pub mod mocks;
