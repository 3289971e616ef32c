//! REST-Handler Module

pub mod system;
pub mod transfers;
