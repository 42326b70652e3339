//! Package implement an in-memory red-black tree index over key-value pairs.
//!
//! [RBMap] is the core of the package, an ordered-map for single threaded
//! use case:
//!
//! - Each entry in RBMap instance correspond to a {Key, Value} pair.
//! - Parametrised over `key-type` and `value-type`.
//! - Keys are unique, inserting an existing key is an error.
//! - Full table scan, to iterate over all entries in key order.
//! - Layout scan, to render the tree shape with node colors and depth.
//! - Uses ownership model and borrow semantics to ensure safety.
//! - No Durability guarantee.
//! - Not thread safe.
//!
//! Around the index, the [pairs] module sources key-value pairs, either
//! generated from a random number generator or parsed from `<key>,<value>`
//! text rows, and the [dump] module serializes a populated index back into
//! text, as in-order rows or as an indented tree rendering.
//!
//! Constructing a new [RBMap] instance and populating it:
//!
//! ```
//! use rbmap::RBMap;
//!
//! let mut index: RBMap<i64, i64> = RBMap::new();
//! assert_eq!(index.len(), 0);
//! assert_eq!(index.is_empty(), true);
//!
//! index.insert(2, 200).unwrap();
//! index.insert(1, 100).unwrap();
//! index.insert(3, 300).unwrap();
//!
//! assert_eq!(index.len(), 3);
//! assert_eq!(index.get(&1), Some(100));
//!
//! let entries: Vec<(i64, i64)> = index.iter().collect();
//! assert_eq!(entries, vec![(1, 100), (2, 200), (3, 300)]);
//!
//! assert!(index.insert(2, 201).is_err());
//! ```

use std::{error, fmt, result};

// Short form to compose Error values.
//
// Here are few possible ways:
//
// ```ignore
// use crate::Error;
// err_at!(ParseError, msg: format!("bad argument"));
// ```
//
// ```ignore
// use crate::Error;
// err_at!(IoError, std::io::read(buf));
// ```
//
// ```ignore
// use crate::Error;
// err_at!(IoError, std::fs::read(file_path), format!("read failed"));
// ```
//
macro_rules! err_at {
    ($v:ident, msg: $($arg:expr),+) => {{
        let prefix = format!("{}:{}", file!(), line!());
        Err(Error::$v(prefix, format!($($arg),+)))
    }};
    ($v:ident, $e:expr) => {{
        match $e {
            Ok(val) => Ok(val),
            Err(err) => {
                let prefix = format!("{}:{}", file!(), line!());
                Err(Error::$v(prefix, format!("{}", err)))
            }
        }
    }};
    ($v:ident, $e:expr, $($arg:expr),+) => {{
        match $e {
            Ok(val) => Ok(val),
            Err(err) => {
                let prefix = format!("{}:{}", file!(), line!());
                let msg = format!($($arg),+);
                Err(Error::$v(prefix, format!("{} {}", err, msg)))
            }
        }
    }};
}

pub mod dump;
pub mod pairs;
mod rbmap;

pub use crate::rbmap::{Color, RBMap};

/// Error variants that are returned by this package's API.
///
/// Each variant carries a prefix, typically identifying the
/// error location.
pub enum Error {
    DuplicateKey(String, String),
    ParseError(String, String),
    IoError(String, String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> result::Result<(), fmt::Error> {
        use Error::*;

        match self {
            DuplicateKey(p, msg) => write!(f, "{} DuplicateKey: {}", p, msg),
            ParseError(p, msg) => write!(f, "{} ParseError: {}", p, msg),
            IoError(p, msg) => write!(f, "{} IoError: {}", p, msg),
        }
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> result::Result<(), fmt::Error> {
        write!(f, "{}", self)
    }
}

impl error::Error for Error {}

/// Type alias for Result return type, used by this package.
pub type Result<T> = result::Result<T, Error>;
