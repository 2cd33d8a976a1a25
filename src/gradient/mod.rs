pub use decoder::*;
pub use encoder::*;
pub use grammar::*;

mod decoder;
mod encoder;
mod grammar;
