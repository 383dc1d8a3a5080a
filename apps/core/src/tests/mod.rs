//! Test Module
//!
//! Cross-module suites for the Z-Chat backend.
//!
//! ## Test Categories
//! - `engine_tests`: classification, composition, and facade behavior under
//!   seeded randomness
//! - `database_tests`: catalog seeding and CRUD for characters and messages
//! - `api_tests`: HTTP routes end to end against a scratch database

pub mod database_tests;
