//! Writing scaffold files into a project directory.

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::identity::ProjectIdentity;
use crate::shell::CommandSpec;

use super::render::TemplateContext;
use super::templates::Template;

/// Documentation directory relative to the project root.
pub const DOCS_DIR: &str = "docs";

/// Writes generated files for one project.
///
/// Files are overwritten without a backup; writes are not transactional.
pub struct Scaffold<'a> {
    root: PathBuf,
    identity: &'a ProjectIdentity,
}

impl<'a> Scaffold<'a> {
    /// Create a scaffold writer rooted at `root`.
    pub fn new(root: &Path, identity: &'a ProjectIdentity) -> Self {
        Self {
            root: root.to_path_buf(),
            identity,
        }
    }

    /// Project root path.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn names_context(&self) -> TemplateContext {
        TemplateContext::new()
            .with("PROJECT", &self.identity.project)
            .with("PACKAGE", &self.identity.package)
    }

    fn write(&self, relative: impl AsRef<Path>, contents: &str) -> Result<PathBuf> {
        let path = self.root.join(relative);
        fs::write(&path, contents)?;
        tracing::info!("Wrote {}", path.display());
        Ok(path)
    }

    /// Write `pyproject.toml`.
    ///
    /// `python_series` is the `major.minor` constraint, `year` goes into the
    /// documentation copyright line.
    pub fn write_pyproject(&self, python_series: &str, year: i32) -> Result<PathBuf> {
        let context = self
            .names_context()
            .with("NAME", &self.identity.author)
            .with("REPOSITORY", &self.identity.repository)
            .with("PYVERSION", python_series)
            .with("YEAR", year.to_string());

        self.write("pyproject.toml", &Template::Pyproject.render(&context)?)
    }

    /// Write the build, ignore and lint configs plus the package and test markers.
    pub fn write_basic_files(&self) -> Result<Vec<PathBuf>> {
        let context = self.names_context();
        let mut written = vec![
            self.write("Makefile", &Template::Makefile.render(&context)?)?,
            self.write(".gitignore", &Template::Gitignore.render(&context)?)?,
            self.write(".flake8", &Template::Flake8.render(&context)?)?,
        ];

        let package_dir = self.root.join(&self.identity.package);
        fs::create_dir_all(&package_dir)?;
        written.push(self.write(
            Path::new(&self.identity.package).join("__init__.py"),
            &Template::PackageInit.render(&context)?,
        )?);

        let tests_dir = self.root.join("tests");
        fs::create_dir_all(&tests_dir)?;
        let marker = tests_dir.join("__init__.py");
        // Existing test package contents are kept.
        OpenOptions::new().create(true).append(true).open(&marker)?;
        tracing::info!("Touched {}", marker.display());
        written.push(marker);

        Ok(written)
    }

    /// Documentation directory, created if missing.
    pub fn prepare_docs_dir(&self) -> Result<PathBuf> {
        let docs = self.root.join(DOCS_DIR);
        fs::create_dir_all(&docs)?;
        Ok(docs)
    }

    /// Whether `sphinx-quickstart` has already produced `docs/source/conf.py`.
    pub fn docs_initialized(&self) -> bool {
        self.root.join(DOCS_DIR).join("source").join("conf.py").is_file()
    }

    /// The `sphinx-quickstart` invocation for this project, run inside `docs/`.
    pub fn quickstart_command(&self) -> CommandSpec {
        CommandSpec::new("sphinx-quickstart")
            .args(["--quiet", "--sep", "--no-batchfile", "--ext-autodoc"])
            .args(["--project", self.identity.project.as_str()])
            .args(["--author", "dummy"])
            .current_dir(self.root.join(DOCS_DIR))
    }

    /// Write `docs/Makefile` and `docs/source/conf.py`.
    pub fn write_sphinx_files(&self) -> Result<Vec<PathBuf>> {
        let docs = self.prepare_docs_dir()?;
        fs::create_dir_all(docs.join("source"))?;

        let makefile_context = TemplateContext::new().with("PACKAGE", &self.identity.package);
        let conf_context = makefile_context
            .clone()
            .with("BRANCH", self.identity.source_branch_path());

        Ok(vec![
            self.write(
                Path::new(DOCS_DIR).join("Makefile"),
                &Template::DocsMakefile.render(&makefile_context)?,
            )?,
            self.write(
                Path::new(DOCS_DIR).join("source").join("conf.py"),
                &Template::DocsConf.render(&conf_context)?,
            )?,
        ])
    }
}
