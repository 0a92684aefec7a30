//! API layer - native client and REST endpoints

pub mod native;
pub mod rest;
