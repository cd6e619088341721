//! # castor-ops
//!
//! Color operations for narrowband star correction.
//!
//! The crate's reason to exist is [`correct_magenta_stars`], which removes
//! the magenta halos that SHO-style palette mapping leaves around stars.
//! The building blocks it is made of are public too, so pipelines can use
//! them on their own.
//!
//! # Modules
//!
//! - [`magenta`] - the invert / SCNR / invert correction
//! - [`scnr`] - green suppression with average-neutral protection
//! - [`invert`] - channel inversion
//! - [`guard`] - channel layout validation
//! - [`parallel`] - rayon row driver (feature `parallel`, on by default)
//!
//! # Example
//!
//! ```rust,ignore
//! use castor_core::Image;
//! use castor_ops::correct_magenta_stars;
//!
//! let image: Image<u16> = load_narrowband_stack()?;
//! let fixed = correct_magenta_stars(&image, 0.8)?;
//! ```
//!
//! Grayscale images are rejected with
//! [`InvalidColorSpace`](castor_core::Error::InvalidColorSpace); every
//! other layout keeps its pixel format, dimensions, and alpha channel.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod guard;
pub mod invert;
pub mod magenta;
pub mod scnr;

#[cfg(feature = "parallel")]
pub mod parallel;

pub use magenta::{DEFAULT_AMOUNT, MagentaCorrection, correct_magenta_stars};
pub use scnr::Scnr;
