//! Zemuria Console - Analytics and admin console core
//!
//! This crate implements the client core behind the staff console:
//! the authenticated request pipeline, cross-source revenue and
//! segmentation reconciliation, and the manual access-grant workflow.
//! Presentation (routing, charts, forms) lives in the embedding shell.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
