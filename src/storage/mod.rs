//! Storage layer for plants.
//!
//! The whole collection is serialized to JSON and written under a single key
//! of a [`KeyValueStore`]. The CLI uses [`FileStore`], which keeps one file per
//! key in the `.garden/` directory.
//!
//! ## Components
//!
//! - [`PlantStore`]: the plant collection, its mutations and selection state
//! - [`KeyValueStore`]: persistence seam, with [`FileStore`] and [`MemoryStore`]
//! - [`markdown`]: export to and import from the markdown garden format

mod backend;
pub mod markdown;
mod repository;

pub use backend::{FileStore, KeyValueStore, MemoryStore};
pub use markdown::{ImportedPlant, RawSection, export_filename, lex_sections, parse_import, render_export};
pub use repository::PlantStore;
