use is_terminal::IsTerminal;

/// What the attached terminal can show, and whether prompts can run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalCapabilities {
    pub is_tty: bool,
    pub stdin_tty: bool,
    pub supports_color: bool,
    pub supports_unicode: bool,
    pub is_ci: bool,
    pub width: u16,
    pub height: u16,
}

impl TerminalCapabilities {
    /// Prompts need a real terminal on both ends.
    pub fn interactive(&self) -> bool {
        self.is_tty && self.stdin_tty && !self.is_ci
    }
}

pub fn detect_capabilities() -> TerminalCapabilities {
    let env = |key: &str| std::env::var(key).ok().filter(|v| !v.is_empty());
    Probe {
        stdout_tty: std::io::stdout().is_terminal(),
        stdin_tty: std::io::stdin().is_terminal(),
        size: crossterm::terminal::size().ok(),
    }
    .capabilities(env)
}

/// Facts gathered from the process, kept apart from env lookups for tests.
struct Probe {
    stdout_tty: bool,
    stdin_tty: bool,
    size: Option<(u16, u16)>,
}

const CI_MARKERS: &[&str] = &["CI", "GITHUB_ACTIONS", "GITLAB_CI", "BUILDKITE", "JENKINS_URL"];

impl Probe {
    fn capabilities(&self, env: impl Fn(&str) -> Option<String>) -> TerminalCapabilities {
        let dumb = env("TERM").is_some_and(|t| t.eq_ignore_ascii_case("dumb"));
        let (width, height) = self.size.unwrap_or((80, 24));

        TerminalCapabilities {
            is_tty: self.stdout_tty,
            stdin_tty: self.stdin_tty,
            supports_color: self.stdout_tty && !dumb && env("NO_COLOR").is_none(),
            supports_unicode: !dumb && locale_is_utf8(&env),
            is_ci: CI_MARKERS.iter().any(|key| env(key).is_some()),
            width,
            height,
        }
    }
}

/// POSIX precedence: the first of LC_ALL, LC_CTYPE, LANG that is set decides.
/// With none set, assume a modern UTF-8 terminal.
fn locale_is_utf8(env: &impl Fn(&str) -> Option<String>) -> bool {
    if env("WT_SESSION").is_some() {
        return true;
    }
    match ["LC_ALL", "LC_CTYPE", "LANG"].iter().find_map(|key| env(key)) {
        Some(locale) => {
            let locale = locale.to_ascii_lowercase();
            locale.contains("utf-8") || locale.contains("utf8")
        }
        None => true,
    }
}
