//! State held by screens between renders

pub mod artist_albums;

pub use artist_albums::*;
