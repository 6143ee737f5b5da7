// ============================================================================
// observable-collections - Collections
// Observable wrappers plus the cursors and views they hand out
// ============================================================================
//
// The wrappers implement the same base contracts they consume. Cursors,
// sub-lists and map views are written against those contracts only, so
// the same code walks a plain Vec or an ObservableList, and in the second
// case every edit it makes is reported.
// ============================================================================

pub mod cursor;
pub mod list;
pub mod map;
pub mod set;
pub mod sub_list;
pub mod views;

pub use cursor::{ListCursor, SetCursor};
pub use list::{observable_list, observable_list_simple, ObservableList};
pub use map::{observable_map, observable_map_simple, ObservableMap};
pub use set::{observable_set, observable_set_simple, ObservableSet};
pub use sub_list::SubList;
pub use views::{Entries, Keys, MapCursor, MapView, Projection, Values};
