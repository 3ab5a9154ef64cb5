//! Card system: characters, catalog, instances and deck construction.
//!
//! ## Key Types
//!
//! - `CharacterId`: Catalog identifier of a character
//! - `Character`: Static character data (stats, rarity, ability)
//! - `Card`: Runtime card instance (owner, current stats)
//! - `CardCatalog`: Character lookup, with a builtin roster
//! - `DeckBuilder`: Explicit or rarity-quota deck construction

pub mod builtin;
pub mod deck;
pub mod definition;
pub mod instance;
pub mod registry;

pub use builtin::builtin_characters;
pub use deck::{DeckBuilder, DEFAULT_DECK_SIZE, RARITY_QUOTA};
pub use definition::{Character, CharacterId, Rarity};
pub use instance::Card;
pub use registry::{CardCatalog, CatalogError};
