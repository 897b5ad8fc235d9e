// ABOUTME: Library crate for stepup exposing the stepper widget and the demo app

#![allow(missing_docs)]

pub mod app;
pub mod components;
pub mod config;
