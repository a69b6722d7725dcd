//! # object-path
//!
//! Small helpers over dynamically shaped data.
//!
//! ## Modules
//!
//! - [`path`]: property paths (`a.b`, `a[0].b`, `a["b.c"]`) and their tokenizer
//! - [`has_path`]: own-property path checks over [`PathContainer`]s
//! - [`math`]: binary math operations with dynamic-language coercion

pub mod has_path;
pub mod math;
pub mod path;

pub use has_path::{has_path, PathContainer};
pub use math::{multiply, to_number, MathOperation, MULTIPLY};
pub use path::{Path, PathKey};
