//! The `get_dev_packages` action.

use crate::error::Result;
use crate::scaffold::dev_package_line;
use crate::ui::UserInterface;

use super::dispatcher::{ActionContext, Command, CommandResult};

/// Prints the space-separated development dependency list.
///
/// Entries from `extra_dev_packages` in the settings are appended after the
/// built-in table.
pub struct DevPackagesCommand<'a> {
    ctx: ActionContext<'a>,
}

impl<'a> DevPackagesCommand<'a> {
    /// Create a new get_dev_packages command.
    pub fn new(ctx: ActionContext<'a>) -> Self {
        Self { ctx }
    }
}

impl Command for DevPackagesCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        ui.result(&dev_package_line(&self.ctx.settings.extra_dev_packages));
        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::identity::{NameSource, ProjectIdentity};
    use crate::scaffold::DevPackage;
    use crate::shell::FakeRunner;
    use crate::ui::MockUI;
    use std::path::Path;

    fn identity() -> ProjectIdentity {
        ProjectIdentity {
            project: "demo".into(),
            package: "demo".into(),
            author: "name".into(),
            repository: String::new(),
            source: NameSource::WorkingDirectory,
        }
    }

    #[test]
    fn prints_default_packages() {
        let identity = identity();
        let settings = Settings::default();
        let runner = FakeRunner::new();
        let ctx = ActionContext {
            project_root: Path::new("."),
            identity: &identity,
            settings: &settings,
            runner: &runner,
        };
        let mut ui = MockUI::new();

        DevPackagesCommand::new(ctx).execute(&mut ui).unwrap();

        assert_eq!(ui.results().len(), 1);
        let line = &ui.results()[0];
        assert!(line.starts_with("black "));
        assert!(line.contains("pytest-flake8"));
        assert!(!line.contains('\n'));
    }

    #[test]
    fn appends_extra_packages() {
        let identity = identity();
        let settings = Settings {
            extra_dev_packages: vec![
                DevPackage::pinned("ruff", "0.4.0"),
                DevPackage::from_git("tool", "https://example.com/tool.git"),
            ],
            ..Settings::default()
        };
        let runner = FakeRunner::new();
        let ctx = ActionContext {
            project_root: Path::new("."),
            identity: &identity,
            settings: &settings,
            runner: &runner,
        };
        let mut ui = MockUI::new();

        DevPackagesCommand::new(ctx).execute(&mut ui).unwrap();

        assert!(ui.results()[0].ends_with(" ruff=0.4.0 git+https://example.com/tool.git"));
    }
}
