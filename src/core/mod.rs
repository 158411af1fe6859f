//! Service surfaces over the engine

pub mod http;

pub use http::*;
