//! External tools the bootstrap sequence drives.
//!
//! The package manager installs the generator package into the project root;
//! the generator executable then creates the client application. Both are
//! plain programs resolved through `PATH`, described here as data so the
//! service never embeds tool names.

use std::fmt;

use crate::domain::error::DomainError;

/// Flags passed to the package manager before the generator package name.
pub const INSTALL_FLAGS: [&str; 2] = ["install", "--save"];

/// Suffix appended to the app name to form the client directory.
pub const CLIENT_SUFFIX: &str = "-client";

/// A program plus its ordered arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    pub program: String,
    pub args: Vec<String>,
}

impl CommandLine {
    pub fn new<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }
}

/// Renders as `program arg1 arg2 ...`, the form reported on failure.
impl fmt::Display for CommandLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        if !self.args.is_empty() {
            write!(f, " {}", self.args.join(" "))?;
        }
        Ok(())
    }
}

/// Which package manager and generator to use.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toolchain {
    package_manager: String,
    generator_package: String,
    generator_executable: String,
}

impl Toolchain {
    /// Build a toolchain, rejecting blank or multi-word program names.
    pub fn new(
        package_manager: impl Into<String>,
        generator_package: impl Into<String>,
        generator_executable: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let toolchain = Self {
            package_manager: package_manager.into(),
            generator_package: generator_package.into(),
            generator_executable: generator_executable.into(),
        };
        toolchain.validate()?;
        Ok(toolchain)
    }

    pub fn package_manager(&self) -> &str {
        &self.package_manager
    }

    pub fn generator_package(&self) -> &str {
        &self.generator_package
    }

    pub fn generator_executable(&self) -> &str {
        &self.generator_executable
    }

    /// `<package_manager> install --save <generator_package>`
    pub fn install_command(&self) -> CommandLine {
        let args = INSTALL_FLAGS
            .iter()
            .map(|flag| (*flag).to_string())
            .chain(std::iter::once(self.generator_package.clone()));
        CommandLine::new(self.package_manager.clone(), args)
    }

    /// `<generator_executable> <client_dir_name>`
    pub fn client_command(&self, client_dir_name: &str) -> CommandLine {
        CommandLine::new(self.generator_executable.clone(), [client_dir_name])
    }

    fn validate(&self) -> Result<(), DomainError> {
        check_word("package_manager", &self.package_manager)?;
        check_word("generator_package", &self.generator_package)?;
        check_word("generator_executable", &self.generator_executable)
    }
}

impl Default for Toolchain {
    fn default() -> Self {
        Self {
            package_manager: "npm".into(),
            generator_package: "create-react-app".into(),
            generator_executable: "create-react-app".into(),
        }
    }
}

fn check_word(field: &'static str, value: &str) -> Result<(), DomainError> {
    if value.trim().is_empty() {
        return Err(DomainError::InvalidToolchain {
            field,
            reason: "must not be empty".into(),
        });
    }
    if value.chars().any(char::is_whitespace) {
        return Err(DomainError::InvalidToolchain {
            field,
            reason: format!("'{value}' must be a single word without spaces"),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_install_command() {
        let cmd = Toolchain::default().install_command();
        assert_eq!(cmd.program, "npm");
        assert_eq!(cmd.args, ["install", "--save", "create-react-app"]);
        assert_eq!(cmd.to_string(), "npm install --save create-react-app");
    }

    #[test]
    fn default_client_command() {
        let cmd = Toolchain::default().client_command("myapp-client");
        assert_eq!(cmd.to_string(), "create-react-app myapp-client");
    }

    #[test]
    fn custom_toolchain_flows_into_commands() {
        let tc = Toolchain::new("pnpm", "create-vite", "create-vite").unwrap();
        assert_eq!(
            tc.install_command().to_string(),
            "pnpm install --save create-vite"
        );
        assert_eq!(tc.client_command("x-client").program, "create-vite");
    }

    #[test]
    fn display_without_args_has_no_trailing_space() {
        let cmd = CommandLine::new("true", Vec::<String>::new());
        assert_eq!(cmd.to_string(), "true");
    }

    #[test]
    fn empty_package_manager_rejected() {
        let err = Toolchain::new("  ", "create-react-app", "create-react-app").unwrap_err();
        assert!(matches!(
            err,
            DomainError::InvalidToolchain {
                field: "package_manager",
                ..
            }
        ));
    }

    #[test]
    fn multi_word_generator_rejected() {
        assert!(Toolchain::new("npm", "create-react-app", "npx create-react-app").is_err());
    }
}
