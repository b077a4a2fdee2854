//! Scaffold templates embedded at compile time.

use include_dir::{include_dir, Dir};

use crate::error::{PystrapError, Result};

use super::render::{render, TemplateContext};

/// Embedded templates directory.
static TEMPLATES_DIR: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/templates");

/// Every file pystrap can generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Template {
    Pyproject,
    Makefile,
    Gitignore,
    Flake8,
    PackageInit,
    DocsMakefile,
    DocsConf,
}

impl Template {
    /// All templates, in the order they are documented.
    pub const ALL: [Template; 7] = [
        Template::Pyproject,
        Template::Makefile,
        Template::Gitignore,
        Template::Flake8,
        Template::PackageInit,
        Template::DocsMakefile,
        Template::DocsConf,
    ];

    /// Path of the template inside the embedded directory.
    pub fn embedded_path(&self) -> &'static str {
        match self {
            Self::Pyproject => "pyproject.toml",
            Self::Makefile => "Makefile",
            Self::Gitignore => "gitignore",
            Self::Flake8 => "flake8",
            Self::PackageInit => "package_init.py",
            Self::DocsMakefile => "docs/Makefile",
            Self::DocsConf => "docs/conf.py",
        }
    }

    /// Raw template text.
    pub fn source(&self) -> Result<&'static str> {
        let name = self.embedded_path();
        TEMPLATES_DIR
            .get_file(name)
            .and_then(|file| file.contents_utf8())
            .ok_or_else(|| PystrapError::TemplateNotFound {
                name: name.to_string(),
            })
    }

    /// Template text with every token substituted.
    pub fn render(&self, context: &TemplateContext) -> Result<String> {
        render(self.embedded_path(), self.source()?, context)
    }
}
