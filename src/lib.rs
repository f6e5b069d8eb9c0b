// src/lib.rs
//! Core library for `regroup`: recommends move-method, create-class and
//! remove-class refactorings by clustering methods over a structural
//! code model.

pub mod cli;
pub mod cluster;
pub mod config;
pub mod distance;
pub mod engine;
pub mod error;
pub mod features;
pub mod index;
pub mod metrics;
pub mod model;
pub mod recommend;
pub mod reporting;
pub mod vectors;
