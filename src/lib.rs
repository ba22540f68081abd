//! Payroll/HR management backend.
//!
//! This crate provides user registration and login with role selection
//! (HR vs employee), employee record CRUD, salary structure management,
//! and leave application tracking over an HTTP/JSON API backed by a small
//! JSON document store.

#![warn(missing_docs)]

pub mod api;
pub mod auth;
pub mod config;
pub mod error;
pub mod models;
pub mod salary;
pub mod store;
