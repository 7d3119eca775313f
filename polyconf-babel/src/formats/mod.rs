//! Codec implementations
//!
//! One module per concrete format. Each codec adapts the format's own crate to the
//! generic [`Document`](crate::document::Document); none of them parses or prints
//! text by hand.

pub mod hcl;
pub mod json;
pub mod yaml;

pub use self::hcl::HclCodec;
pub use self::json::JsonCodec;
pub use self::yaml::YamlCodec;

/// Whether the input holds nothing but whitespace
pub(crate) fn is_blank(source: &[u8]) -> bool {
    source.iter().all(u8::is_ascii_whitespace)
}
