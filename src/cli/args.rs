//! Command-line argument parsing for the `wanandroid` binary.

/// Which screen to load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenArg {
    Home,
    /// Projects, optionally for a specific category or the newest list.
    Projects(ProjectArg),
    Square,
    /// Daily questions.
    Ask,
    System,
    Nav,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProjectArg {
    /// The first category, as the screen does on its own.
    #[default]
    First,
    Category(i64),
    Newest,
}

/// Options for a screen run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunOptions {
    pub screen: ScreenArg,
    /// Pages to show; `load_more` runs `pages - 1` times.
    pub pages: u32,
    pub base_url: Option<String>,
    pub timeout_secs: Option<u64>,
}

impl RunOptions {
    pub fn new(screen: ScreenArg) -> Self {
        Self {
            screen,
            pages: 1,
            base_url: None,
            timeout_secs: None,
        }
    }
}

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    Version,
    Help,
    Run(RunOptions),
    /// Unusable arguments, with the reason.
    Invalid(String),
}

pub const USAGE: &str = "\
Usage: wanandroid <SCREEN> [OPTIONS]

Screens:
  home                       Banners, pinned and latest articles
  projects [--category ID]   Projects of a category (default: first)
  projects --newest          Newest projects
  square                     Articles shared by users
  ask                        Daily questions
  system                     Knowledge-system tree
  nav                        Navigation links

Options:
  --pages N        Load N pages (default 1)
  --base-url URL   API host (default https://www.wanandroid.com/)
  --timeout SECS   Request timeout (default 30)
  -V, --version    Print version
  -h, --help       Print this help

Logging is controlled with RUST_LOG (default: warn).";

/// Parse command-line arguments and return the command to run.
///
/// # Examples
///
/// ```
/// use wanandroid::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["wanandroid".to_string(), "--version".to_string()];
/// assert_eq!(parse_args(args.into_iter()), CliCommand::Version);
/// ```
pub fn parse_args<I>(args: I) -> CliCommand
where
    I: Iterator<Item = String>,
{
    let mut screen: Option<ScreenArg> = None;
    let mut project = ProjectArg::default();
    let mut project_flag = false;
    let mut pages = 1;
    let mut base_url = None;
    let mut timeout_secs = None;

    // Skip the program name
    let mut args = args.skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--version" | "-V" => return CliCommand::Version,
            "--help" | "-h" => return CliCommand::Help,
            "--pages" => match args.next().map(|v| v.parse::<u32>()) {
                Some(Ok(n)) if n > 0 => pages = n,
                _ => return CliCommand::Invalid("--pages needs a positive number".to_string()),
            },
            "--base-url" => match args.next() {
                Some(url) => base_url = Some(url),
                None => return CliCommand::Invalid("--base-url needs a value".to_string()),
            },
            "--timeout" => match args.next().map(|v| v.parse::<u64>()) {
                Some(Ok(secs)) if secs > 0 => timeout_secs = Some(secs),
                _ => return CliCommand::Invalid("--timeout needs a positive number".to_string()),
            },
            "--category" => match args.next().map(|v| v.parse::<i64>()) {
                Some(Ok(id)) => {
                    project = ProjectArg::Category(id);
                    project_flag = true;
                }
                _ => return CliCommand::Invalid("--category needs a numeric id".to_string()),
            },
            "--newest" => {
                project = ProjectArg::Newest;
                project_flag = true;
            }
            name if !name.starts_with('-') && screen.is_none() => {
                screen = Some(match name {
                    "home" => ScreenArg::Home,
                    "projects" | "project" => ScreenArg::Projects(ProjectArg::First),
                    "square" => ScreenArg::Square,
                    "ask" => ScreenArg::Ask,
                    "system" | "tree" => ScreenArg::System,
                    "nav" | "navigation" => ScreenArg::Nav,
                    other => return CliCommand::Invalid(format!("unknown screen '{}'", other)),
                });
            }
            other => return CliCommand::Invalid(format!("unexpected argument '{}'", other)),
        }
    }

    let screen = match (screen, project_flag) {
        (None, _) => return CliCommand::Help,
        (Some(ScreenArg::Projects(_)), _) => ScreenArg::Projects(project),
        (Some(_), true) => {
            return CliCommand::Invalid(
                "--category and --newest only apply to 'projects'".to_string(),
            )
        }
        (Some(screen), false) => screen,
    };

    CliCommand::Run(RunOptions {
        screen,
        pages,
        base_url,
        timeout_secs,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> CliCommand {
        let mut all = vec!["wanandroid".to_string()];
        all.extend(args.iter().map(|s| s.to_string()));
        parse_args(all.into_iter())
    }

    #[test]
    fn test_parse_version_flag() {
        assert_eq!(parse(&["--version"]), CliCommand::Version);
        assert_eq!(parse(&["-V"]), CliCommand::Version);
    }

    #[test]
    fn test_parse_no_args_is_help() {
        assert_eq!(parse(&[]), CliCommand::Help);
        assert_eq!(parse(&["-h"]), CliCommand::Help);
    }

    #[test]
    fn test_parse_home() {
        assert_eq!(parse(&["home"]), CliCommand::Run(RunOptions::new(ScreenArg::Home)));
    }

    #[test]
    fn test_parse_projects_variants() {
        assert_eq!(
            parse(&["projects"]),
            CliCommand::Run(RunOptions::new(ScreenArg::Projects(ProjectArg::First)))
        );
        assert_eq!(
            parse(&["projects", "--category", "294"]),
            CliCommand::Run(RunOptions::new(ScreenArg::Projects(ProjectArg::Category(
                294
            ))))
        );
        assert_eq!(
            parse(&["--newest", "projects"]),
            CliCommand::Run(RunOptions::new(ScreenArg::Projects(ProjectArg::Newest)))
        );
    }

    #[test]
    fn test_parse_options() {
        let command = parse(&[
            "square",
            "--pages",
            "3",
            "--base-url",
            "http://localhost:8080",
            "--timeout",
            "5",
        ]);
        assert_eq!(
            command,
            CliCommand::Run(RunOptions {
                screen: ScreenArg::Square,
                pages: 3,
                base_url: Some("http://localhost:8080".to_string()),
                timeout_secs: Some(5),
            })
        );
    }

    #[test]
    fn test_parse_invalid() {
        assert!(matches!(parse(&["feed"]), CliCommand::Invalid(_)));
        assert!(matches!(parse(&["home", "--pages", "0"]), CliCommand::Invalid(_)));
        assert!(matches!(parse(&["home", "--pages"]), CliCommand::Invalid(_)));
        assert!(matches!(parse(&["home", "--newest"]), CliCommand::Invalid(_)));
        assert!(matches!(parse(&["home", "square"]), CliCommand::Invalid(_)));
        assert!(matches!(parse(&["home", "--bogus"]), CliCommand::Invalid(_)));
    }
}
