#![deny(missing_docs)]

//! # LazyATC Models
//!
//! Core data types for the LazyATC controller helper: what the controller
//! asks for, what the routes API answers, and how a chosen answer is turned
//! into phraseology.
//!
//! ## Module layout
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`airport`] | `ICAOAirportCode`, `RouteQuery` |
//! | [`level`] | `FlightLevel`, `LevelSuggestion` |
//! | [`entry`] | `Mode`, `RouteOption`, `ResultEntry` |
//! | [`preset`] | Built-in city-pair presets |
//! | [`phraseology`] | Message templates and line parsing |

pub mod airport;
pub mod entry;
pub mod error;
pub mod level;
pub mod phraseology;
pub mod preset;

// Re-export all public types at crate root for convenience.
pub use airport::*;
pub use entry::*;
pub use error::*;
pub use level::*;
pub use phraseology::*;
pub use preset::*;
