//! Project skeleton generation.
//!
//! - [`templates`] - embedded file templates
//! - [`render`] - `${TOKEN}` substitution
//! - [`writer`] - writing rendered files into a project
//! - [`dev_packages`] - development dependency table

pub mod dev_packages;
pub mod render;
pub mod templates;
pub mod writer;

pub use dev_packages::{default_dev_packages, dev_package_line, DevPackage};
pub use render::{render, TemplateContext};
pub use templates::Template;
pub use writer::{Scaffold, DOCS_DIR};
