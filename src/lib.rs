#![warn(clippy::nursery)]

mod color;
mod cursor;
mod error;
mod gradient;

pub use color::*;
pub use cursor::*;
pub use error::*;
pub use gradient::*;
