//! Risk Profiler - investor risk assessment service
//!
//! This crate scores a self-reported investor profile, classifies it into a
//! risk category, proposes a target asset allocation, and returns advisory
//! recommendations over a small REST API.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
