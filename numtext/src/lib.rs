#![deny(missing_docs)]

//! # numtext
//!
//! Allocation-free conversion between fixed-width integers and their decimal
//! text form, with strict input validation, plus a small function
//! composition helper.
//!
//! ```
//! use numtext::{decode, encode};
//!
//! let text = encode(-1234i32);
//! assert_eq!(text, "-1234");
//! assert_eq!(decode::<i32>(&text), Ok(-1234));
//!
//! // Decoding must consume the whole input.
//! assert!(decode::<i32>("1234 ").is_err());
//! ```

pub mod codec;
pub mod compose;
pub mod config;
pub mod error;
pub mod int_type;
pub mod logging;

pub use codec::decode;
pub use codec::encode;
pub use codec::DecimalInt;
pub use codec::DecimalText;
pub use int_type::IntType;
