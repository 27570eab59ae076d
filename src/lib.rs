//! Penalty journey - step navigation for the late-filing penalty payment journey
//!
//! The [`navigation`] module is the reusable core: a declarative step graph
//! with conditional steps and route templates. [`journey`] declares the
//! concrete late-filing penalty pages on top of it, and [`rest`] exposes the
//! graph and its navigation over HTTP.

pub mod config;
pub mod features;
pub mod journey;
pub mod logging;
pub mod navigation;
pub mod rest;
