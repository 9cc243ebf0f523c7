//! Skill catalog and card pool policy.
//!
//! - `definition`: `SkillId` and the static `SkillDefinition` data
//! - `catalog`: lookup of definitions by id
//! - `pool`: global exclusion policy deciding which ids may enter decks

pub mod catalog;
pub mod definition;
pub mod pool;

pub use catalog::SkillCatalog;
pub use definition::{SkillDefinition, SkillId};
pub use pool::CardPool;
