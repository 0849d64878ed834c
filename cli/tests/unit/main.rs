//! Unit tests for zbx-provision
//!
//! These tests run the services against an in-memory host and never touch
//! the real package database, units or files.

mod fakes;

mod privilege_service;
mod property_tests;
