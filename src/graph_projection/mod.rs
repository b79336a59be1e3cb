//! Device tree to graph projection: domain model, policies and services

pub mod domain;
pub mod policies;
pub mod services;
