//! dotcat: read values from structured data files using dotted paths
//!
//! A document (JSON, YAML, TOML or INI) is parsed into a generic [`Value`]
//! tree, a dotted path such as `dependencies.go` or `contributors@0.name`
//! picks one node out of it, and the node is rendered in the requested
//! output format.
//!
//! ```no_run
//! let doc = dotcat::parse_file("package.json")?;
//! let value = dotcat::from_dotted_path(&doc, "dependencies.go")?;
//! println!("{}", dotcat::format_output(&value, "json")?);
//! # Ok::<(), dotcat::DotcatError>(())
//! ```

pub mod error;
pub mod parse;
pub mod render;
pub mod resolve;
pub mod value;

pub use error::{DotcatError, Result};
pub use parse::{parse_file, parse_str, Format};
pub use render::{format_output, render, OutputFormat};
pub use resolve::{dotted_path_completions, from_dotted_path};
pub use value::{Mapping, Number, Value};
