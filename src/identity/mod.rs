//! Project identity: names, repository URL and author.
//!
//! - [`names`] - hyphen/underscore spellings of the project token
//! - [`repository`] - remote URL normalization and name derivation
//! - [`author`] - author string from `~/.gitconfig`
//! - [`resolver`] - the combined, pure resolution step

pub mod author;
pub mod gitconfig;
pub mod names;
pub mod repository;
pub mod resolver;

pub use author::resolve_author;
pub use names::{resolve_from_working_directory, ProjectNames};
pub use repository::{normalize_remote_url, resolve_from_repository, RepositoryIdentity};
pub use resolver::{NameSource, ProjectIdentity, ResolutionInputs};
