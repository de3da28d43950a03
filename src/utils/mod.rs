//! This module contains helper functionality.

mod comparison;
pub use self::comparison::*;

mod error;
pub use self::error::*;

mod random;
pub use self::random::*;

mod types;
pub use self::types::*;
