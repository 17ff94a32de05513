//! Subway line and station management server.
//!
//! A REST service for managing the subway network's master data:
//! stations and the colored lines that serve them.

pub mod config;
pub mod domain;
pub mod service;
pub mod store;
pub mod web;
