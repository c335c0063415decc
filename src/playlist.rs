//! Playlist store: track records, search and removal.
//!
//! The playlist is an ordered collection of immutable tracks. Insertion order
//! is significant (it defines track numbering and the default navigation
//! order) and the only mutation is removal by id.

mod load;
mod model;

pub use load::{demo, load};
pub use model::{Playlist, Track};

#[cfg(test)]
mod tests;
