//! External command plans for `lint`, `test unit`, and `tools install`.
//!
//! These are pure values; the application layer hands them to a
//! `CommandRunner`.

use std::fmt;

/// Directory reset before every unit-test run.
pub const COVERAGE_DIR: &str = "coverage";
pub const COVER_PROFILE: &str = "coverage/coverprofile";
pub const COVER_HTML: &str = "coverage/cover.html";

/// A program and its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub program: String,
    pub args: Vec<String>,
}

impl CommandSpec {
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

impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// Captured result of running a [`CommandSpec`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    pub success: bool,
    /// `None` when the process was killed by a signal.
    pub code: Option<i32>,
    /// Combined stdout and stderr.
    pub output: String,
}

/// A tool `godev` knows how to install and check for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecommendedTool {
    pub name: &'static str,
    pub package: &'static str,
    pub version: &'static str,
}

impl RecommendedTool {
    /// `go install <package>@<version>`
    pub fn install_command(&self) -> CommandSpec {
        CommandSpec::new(
            "go",
            ["install".to_owned(), format!("{}@{}", self.package, self.version)],
        )
    }
}

pub const RECOMMENDED_TOOLS: &[RecommendedTool] = &[
    RecommendedTool {
        name: "gofumpt",
        package: "mvdan.cc/gofumpt",
        version: "v0.9.2",
    },
    RecommendedTool {
        name: "goimports",
        package: "golang.org/x/tools/cmd/goimports",
        version: "v0.40.0",
    },
    RecommendedTool {
        name: "golangci-lint",
        package: "github.com/golangci/golangci-lint/v2/cmd/golangci-lint",
        version: "v2.7.2",
    },
];

/// `go install` for an arbitrary package; `@latest` is added when the
/// path carries no version.
pub fn install_command(package: &str) -> CommandSpec {
    let package = package.trim();
    let target = if package.contains('@') {
        package.to_owned()
    } else {
        format!("{package}@latest")
    };
    CommandSpec::new("go", ["install".to_owned(), target])
}

/// Formatters, linter, then `go mod tidy`.
pub fn lint_plan() -> Vec<CommandSpec> {
    vec![
        CommandSpec::new("goimports", ["-w", "."]),
        CommandSpec::new("gofumpt", ["-w", "."]),
        CommandSpec::new("golangci-lint", ["run", "./..."]),
        CommandSpec::new("go", ["mod", "tidy"]),
    ]
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TestOptions {
    pub verbose: bool,
    pub cover: bool,
    pub html: bool,
}

impl TestOptions {
    /// `--html` needs a profile to render.
    pub fn collects_coverage(&self) -> bool {
        self.cover || self.html
    }
}

/// `go test` followed, for `--html`, by the HTML report generation.
pub fn unit_test_plan(options: TestOptions) -> Vec<CommandSpec> {
    let mut args = vec!["test".to_owned()];
    if options.verbose {
        args.push("-v".into());
    }
    if options.collects_coverage() {
        args.push("-coverprofile".into());
        args.push(COVER_PROFILE.into());
    }
    args.push("./...".into());

    let mut plan = vec![CommandSpec::new("go", args)];
    if options.html {
        plan.push(CommandSpec::new(
            "go",
            ["tool", "cover", "-html", COVER_PROFILE, "-o", COVER_HTML],
        ));
    }
    plan
}

/// Platform command that opens `target` with the default application.
pub fn open_command(target: &str, os: &str) -> CommandSpec {
    match os {
        "windows" => CommandSpec::new("cmd", ["/c", "start", "", target]),
        "macos" => CommandSpec::new("open", [target]),
        _ => CommandSpec::new("xdg-open", [target]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lint_runs_in_fixed_order() {
        let plan: Vec<String> = lint_plan().iter().map(ToString::to_string).collect();
        assert_eq!(
            plan,
            vec![
                "goimports -w .",
                "gofumpt -w .",
                "golangci-lint run ./...",
                "go mod tidy"
            ]
        );
    }

    #[test]
    fn plain_unit_test() {
        let plan = unit_test_plan(TestOptions::default());
        assert_eq!(plan.len(), 1);
        assert_eq!(plan[0].to_string(), "go test ./...");
    }

    #[test]
    fn verbose_coverage_unit_test() {
        let plan = unit_test_plan(TestOptions {
            verbose: true,
            cover: true,
            html: false,
        });
        assert_eq!(
            plan[0].to_string(),
            "go test -v -coverprofile coverage/coverprofile ./..."
        );
    }

    #[test]
    fn html_implies_coverage_and_renders_report() {
        let plan = unit_test_plan(TestOptions {
            html: true,
            ..Default::default()
        });
        assert_eq!(plan[0].to_string(), "go test -coverprofile coverage/coverprofile ./...");
        assert_eq!(
            plan[1].to_string(),
            "go tool cover -html coverage/coverprofile -o coverage/cover.html"
        );
    }

    #[test]
    fn install_appends_latest_only_when_unversioned() {
        assert_eq!(
            install_command("golang.org/x/tools/gopls").to_string(),
            "go install golang.org/x/tools/gopls@latest"
        );
        assert_eq!(
            install_command("mvdan.cc/gofumpt@v0.6.0").to_string(),
            "go install mvdan.cc/gofumpt@v0.6.0"
        );
    }

    #[test]
    fn recommended_tools_are_pinned() {
        let names: Vec<_> = RECOMMENDED_TOOLS.iter().map(|t| t.name).collect();
        assert_eq!(names, vec!["gofumpt", "goimports", "golangci-lint"]);
        assert_eq!(
            RECOMMENDED_TOOLS[0].install_command().to_string(),
            "go install mvdan.cc/gofumpt@v0.9.2"
        );
    }

    #[test]
    fn opener_per_platform() {
        assert_eq!(open_command("r.html", "windows").program, "cmd");
        assert_eq!(open_command("r.html", "macos").program, "open");
        assert_eq!(open_command("r.html", "linux").program, "xdg-open");
    }
}
