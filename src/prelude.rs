//! This module simply brings the most common functionality under a single namespace, to prevent
//! excessive imports. It includes every trait in the crate, the ubiquitous [`RGBColor`], and the two
//! spaces the crate is named for, [`HSLuvColor`] and [`HPLuvColor`]. The intermediate CIELUV and
//! CIELCHuv types live in the [`colors`] module.
//!
//! [`colors`]: ../colors/index.html

pub use bound::Bound;
pub use color::{Color, RGBColor};
pub use colorpoint::ColorPoint;
pub use colors::{HPLuvColor, HSLuvColor};
