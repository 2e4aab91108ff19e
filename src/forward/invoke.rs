/// Build the formatter command line and launch it without waiting.
use std::process::Command;

use super::errors::ForwardError;

/// Formatter executable name used when no `--parser` path is given;
/// resolved through `PATH`.
pub const DEFAULT_FORMATTER: &str = "clang-format";

/// Fixed style argument passed on every launch.
pub const STYLE_ARG: &str = "--style=Microsoft";

/// clang-format flag that rewrites the target file in place.
pub const INPLACE_FLAG: &str = "-i";

/// An ordered formatter command line: program followed by its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// Executable to launch.
    pub program: String,
    /// Arguments, in order: style, in-place flag, target path.
    pub args: Vec<String>,
}

impl Invocation {
    /// Build the clang-format command line for `target`.
    ///
    /// The parser path is stripped of surrounding whitespace; the target
    /// path is passed through untouched.
    #[must_use]
    pub fn clang_format(parser: &str, target: &str) -> Self {
        Self {
            program: parser.trim().to_owned(),
            args: vec![
                STYLE_ARG.to_owned(),
                INPLACE_FLAG.to_owned(),
                target.to_owned(),
            ],
        }
    }

    /// Spawn the formatter and return immediately.
    ///
    /// The child handle is dropped without waiting: the child keeps running
    /// detached, its output is not captured, and its exit status is never
    /// collected. The parent may terminate before the child finishes.
    ///
    /// # Errors
    ///
    /// Returns `ForwardError::Launch` when the executable cannot be found or
    /// started. Whether the formatter later succeeds is not observed.
    pub fn launch(&self) -> Result<(), ForwardError> {
        Command::new(&self.program)
            .args(&self.args)
            .spawn()
            .map_err(|source| ForwardError::Launch {
                program: self.program.clone(),
                source,
            })?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_formatter_tokens() {
        let inv = Invocation::clang_format(DEFAULT_FORMATTER, "foo.txt");
        assert_eq!(inv.program, "clang-format");
        assert_eq!(inv.args, ["--style=Microsoft", "-i", "foo.txt"]);
    }

    #[test]
    fn test_parser_path_is_trimmed() {
        let inv = Invocation::clang_format("  /opt/llvm/bin/clang-format\n", "a.c");
        assert_eq!(inv.program, "/opt/llvm/bin/clang-format");
    }

    #[test]
    fn test_target_path_is_not_trimmed() {
        let inv = Invocation::clang_format("clang-format", " spaced.c ");
        assert_eq!(inv.args[2], " spaced.c ");
    }

    #[test]
    fn test_launch_failure_names_program() {
        let inv = Invocation::clang_format("/nonexistent/no-such-formatter", "a.c");
        let err = inv.launch().unwrap_err();
        let ForwardError::Launch { program, .. } = err;
        assert_eq!(program, "/nonexistent/no-such-formatter");
    }
}
