//! disco-core - Domain types and album sources for disco
//!
//! Holds everything below the presentation layer: artist and album models,
//! the `AlbumSource` boundary the screen fetches through, a catalog-backed
//! source, and configuration.

pub mod catalog;
pub mod config;
pub mod error;
pub mod model;
pub mod source;

pub use catalog::CatalogAlbumSource;
pub use error::{CatalogError, FetchError};
pub use model::{Album, Artist, ArtistId};
pub use source::AlbumSource;
