//! disco-ui - Presentation layer for the artist albums screen
//!
//! Contains display types, the domain-to-display mapping, the presenter and
//! interactor that sit between the screen and its album source, and the
//! screen state machine itself. Rendering is left to a `ScreenSurface`.

pub mod builder;
pub mod display_types;
pub mod interactor;
pub mod list;
pub mod mapping;
pub mod presenter;
pub mod screen;
pub mod stores;
pub mod strings;

pub use builder::{ArtistScreenBuilder, BuildError};
pub use display_types::*;
pub use interactor::{ArtistInteractor, ArtistViewOutput, FetchRequest, FetchTicket};
pub use list::{AlbumList, ListDataSource, ListDelegate};
pub use presenter::{ArtistPresenter, ViewUpdate, ViewUpdates};
pub use screen::{ArtistScreen, ArtistViewInput, ScreenSurface};
