//! A library for HSLuv and HPLuv, human-friendly alternatives to HSL. Both are built on CIELUV, so
//! lightness means perceived lightness, and both rescale chroma against the edge of the sRGB gamut,
//! so every hue, saturation and lightness between the usual limits is a color a screen can actually
//! show. That makes them a good fit for anything that hands color sliders to people or generates
//! palettes: changing hue leaves lightness alone, and there's no falling off the edge of the gamut.
//!
//! The conversion goes RGB, XYZ, CIELUV, CIELCHuv, then HSLuv or HPLuv, and each stage is its own
//! type implementing [`Color`]. Any of them can be turned into any other with
//! [`convert`](color/trait.Color.html#method.convert):
//!
//! ```
//! use hsluv::prelude::*;
//!
//! let teal = HSLuvColor { h: 190.0, s: 80.0, l: 60.0 };
//! let rgb: RGBColor = teal.convert();
//! let back: HSLuvColor = rgb.convert();
//! assert!((back.s - teal.s).abs() <= 1e-8);
//! ```
//!
//! For the plain-number versions, see [`hsluv_to_rgb`], [`hpluv_to_rgb`], [`rgb_to_hsluv`] and
//! [`rgb_to_hpluv`]. Nothing in the conversions clamps or validates input; use [`Bound`] for that.
//!
//! [`Color`]: color/trait.Color.html
//! [`Bound`]: bound/trait.Bound.html
//! [`hsluv_to_rgb`]: fn.hsluv_to_rgb.html
//! [`hpluv_to_rgb`]: fn.hpluv_to_rgb.html
//! [`rgb_to_hsluv`]: fn.rgb_to_hsluv.html
//! [`rgb_to_hpluv`]: fn.rgb_to_hpluv.html

#![doc(html_root_url = "https://docs.rs/hsluv/0.1.0")]
// we don't mess around with documentation
#![deny(missing_docs)]
// Clippy doesn't like long decimals, but adding separators in decimals isn't any more readable
// compare -0.96924363628087983 with -0.969_243_636_280_879_83
#![allow(clippy::unreadable_literal)]
#![allow(clippy::excessive_precision)]

#[macro_use]
extern crate float_cmp;
extern crate num;
extern crate serde;
#[macro_use]
extern crate serde_derive;

pub mod bound;
pub mod color;
pub mod colorpoint;
pub mod colors;
mod consts;
mod convert;
pub mod coord;
pub mod gamut;
pub mod prelude;

pub use convert::{hpluv_to_rgb, hsluv_to_rgb, rgb_to_hpluv, rgb_to_hsluv};
