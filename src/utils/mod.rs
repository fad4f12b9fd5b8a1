//! # Utilities Module
//!
//! Small numeric helpers shared by movement and menus.

pub mod math;

pub use math::*;
