// ============================================================================
// observable-collections - Core Module
// Base-container contracts and the error type they report
// ============================================================================

pub mod error;
pub mod list;
pub mod map;
pub mod set;

pub use error::{CollectionError, Result};
pub use list::ListBase;
pub use map::MapBase;
pub use set::SetBase;
