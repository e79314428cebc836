//! Event catalogs.
//!
//! An [`EventCatalog`] is a column-oriented table of named fields. Balancing
//! reads three coordinate columns and one integer observation-count column;
//! every other column rides along untouched.
//!
//! ```rust,ignore
//! use voxel_balance::catalog::{Column, EventCatalog};
//!
//! let catalog = EventCatalog::new()
//!     .with_column("EqLon", Column::Float(lons))?
//!     .with_column("EqLat", Column::Float(lats))?
//!     .with_column("EqDep", Column::Float(depths))?
//!     .with_column("num_obs", Column::Int(counts))?;
//! ```

mod column;
mod event;
mod table;

pub use column::Column;
pub use event::Event;
pub use table::{EventCatalog, NamedColumn};
