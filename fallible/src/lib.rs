//! Reporting failures as ordinary return values.
//!
//! Two computations add three to their argument and both refuse `42`:
//!
//! - [`compute_basic`] reports an opaque [`Error::Generic`] carrying only a message,
//! - [`compute_structured`] reports an [`ArgError`] whose argument and problem can be inspected.
//!
//! A caller holding the generic [`Error`] slot tells the two apart by matching on
//! [`Error::Structured`].
//!
//! ```
//! use fallible::{Error, compute_basic, compute_structured};
//!
//! assert_eq!(compute_basic(7), Ok(10));
//!
//! let error = compute_structured(42).map_err(Error::from).unwrap_err();
//! if let Error::Structured(detail) = &error {
//!     assert_eq!(detail.argument(), 42);
//!     assert_eq!(detail.problem(), "can't work with it");
//! }
//! assert_eq!(error.to_string(), "42 - can't work with it");
//! ```

#![forbid(unsafe_code)]

mod compute;
pub mod driver;
mod error;

pub use self::compute::{UNWORKABLE, compute_basic, compute_structured};
pub use self::error::{ArgError, Error, Result};
