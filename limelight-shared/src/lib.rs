#![cfg_attr(not(test), forbid(unsafe_code))]

//! Shared data model and pure logic for the Limelight Intelligence dashboard.
//!
//! Everything in this crate is browser-free: wire types for the session and
//! accounts services, the in-memory catalog with its filter/sort/paginate
//! transforms, and display formatting helpers. The `limelight-web` crate
//! layers the Yew UI on top.

pub mod format;
pub mod models;
pub mod sample;
