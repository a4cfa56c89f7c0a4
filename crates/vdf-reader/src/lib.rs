#![doc = include_str!("../README.md")]

mod error;
pub use error::ReadError;

mod reader;
pub use reader::{CharReader, Position};

mod span;
pub use span::Span;
