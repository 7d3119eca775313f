//! Format detection and conversion for configuration documents
//!
//!     This crate converts documents between HCL, JSON and YAML. It powers the polyconf
//!     binary but is shell agnostic: no code here reads stdin, prints, or looks at the
//!     environment. Callers hand in bytes (or any `Read`) and get bytes back.
//!
//! Architecture
//!
//!     bytes → reader → Document → writer → bytes
//!
//!     Every conversion goes through the generic [`Document`] (./document/mod.rs). A
//!     reader either parses the requested format directly or, for AUTO, tries the
//!     formats in a fixed order (./reader.rs). A writer renders the document with the
//!     target format's codec (./writer.rs).
//!
//!     The file structure :
//!     .
//!     ├── error.rs            # ConvertError
//!     ├── format.rs           # Format enum and Codec trait
//!     ├── document            # Generic document model and its serde impls
//!     ├── formats
//!     │   ├── hcl.rs
//!     │   ├── json.rs
//!     │   └── yaml.rs
//!     ├── reader.rs           # Direct parsing and AUTO detection
//!     ├── writer.rs           # Rendering and output policy
//!     └── convert.rs          # RunConfig, ConvertOptions and the pipeline
//!
//! Library Choices
//!
//!     We never write a parser or printer for any of the formats. `serde_json`,
//!     `serde_yaml` and `hcl` do the work; codecs only adapt their values to and from
//!     the document model through serde.
//!
//! Lossy Conversions
//!
//!     JSON and YAML round-trip every document they can express. HCL does not: blocks
//!     are read as nested mappings and written back as object attributes, and only
//!     mappings can be written as an HCL body.

pub mod convert;
pub mod document;
pub mod error;
pub mod format;
pub mod formats;
pub mod reader;
pub mod writer;

pub use convert::{convert, convert_bytes, ConvertOptions, DetectionReport, RunConfig};
pub use document::{Document, Mapping, Number};
pub use error::ConvertError;
pub use format::{Codec, Format};
pub use reader::{detect, read, read_input, read_with, Detected};
pub use writer::{render, write};
