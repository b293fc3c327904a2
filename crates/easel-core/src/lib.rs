//! Easel Core Types and Definitions
//!
//! This crate provides the foundational value types for the Easel
//! text-annotation layer. It includes:
//!
//! - **Colors**: Color handling with CSS color support ([`color::Color`])
//! - **Geometry**: Basic geometric types ([`geometry`] module)
//! - **Style**: The closed text-style model, baseline table, and
//!   toggle-reset normalization ([`style`] module)

pub mod color;
pub mod geometry;
pub mod style;
