//! This module contains the color spaces between XYZ and HSLuv, one type per stage of the
//! conversion. For convenience, each main type is imported into this module's namespace directly.
pub mod cielchuvcolor;
pub mod cieluvcolor;
pub mod hpluvcolor;
pub mod hsluvcolor;

// for convenience, use this namespace for the color objects
pub use self::cielchuvcolor::CIELCHuvColor;
pub use self::cieluvcolor::CIELUVColor;
pub use self::hpluvcolor::HPLuvColor;
pub use self::hsluvcolor::HSLuvColor;
