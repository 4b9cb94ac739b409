#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

pub mod catalog;
pub mod error;
pub mod exercise;
pub mod filter;
pub mod search;
pub mod service;
pub mod taxonomy;

pub use catalog::Catalog;
pub use error::{ReadError, StorageError};
pub use exercise::{Breath, BreathStep, Exercise, ExerciseID};
pub use filter::ExerciseFilter;
pub use search::{MAX_SUGGESTIONS, SearchState, suggestions};
pub use service::{CatalogRepository, CatalogService, Service};
pub use taxonomy::{TagCategory, TagID, Taxonomy};
