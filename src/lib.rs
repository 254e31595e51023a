mod chunks;
mod encoder;
mod error;
mod inspector;
mod pixel;

pub use encoder::{encode_to_vec, write_file};
pub use error::{Error, Result};
pub use inspector::{inspect_bytes, inspect_file, Report};
pub use pixel::Rgb;
