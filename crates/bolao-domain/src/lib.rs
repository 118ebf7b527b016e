//! Domain logic shared across the bolão services.
//!
//! This crate contains only pure functions and data with no framework
//! dependencies. Import in `usecase/` and `domain/` layers; never in
//! `infra/` or `handlers/`.

pub mod game;
pub mod generator;
pub mod phone;
