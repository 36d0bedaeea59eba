//! Path data mini-language
//!
//! Converts between path data strings and annotated point sequences:
//! - [`tokenizer`]: parameter-run tokenization tolerating glued numbers
//! - [`parser`]: path data string to points, resolving relative coordinates
//!   and shorthand control-point reflection
//! - [`serializer`]: points back to the most compact legal command per
//!   segment

pub mod parser;
pub mod serializer;
pub mod tokenizer;

pub use parser::parse_path;
pub use serializer::points_to_path;
