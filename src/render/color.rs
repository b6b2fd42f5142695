// src/render/color.rs
// DOCUMENTATION: ANSI SGR styling for text reports
// PURPOSE: Wrap segments in escape codes when color is allowed, identity otherwise

const RESET: &str = "\x1b[0m";
const BOLD: &str = "1";
const DIM: &str = "2";
const GREEN: &str = "32";
const YELLOW: &str = "33";
const CYAN: &str = "36";

/// Color policy for one render call
/// DOCUMENTATION: Capability detection is the caller's job; this only honors the flag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    enabled: bool,
}

impl Color {
    pub fn new(enabled: bool) -> Self {
        Color { enabled }
    }

    /// Color policy from the environment
    /// DOCUMENTATION: Off when the caller opts out, NO_COLOR is set (any value),
    /// or TERM is unset, blank or "dumb"
    pub fn detect(no_color: bool) -> Self {
        let no_color_env = std::env::var_os("NO_COLOR").is_some();
        let term = std::env::var("TERM").ok();
        Color::new(color_enabled(no_color, no_color_env, term.as_deref()))
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    pub fn bold(&self, value: &str) -> String {
        self.wrap(BOLD, value)
    }

    pub fn dim(&self, value: &str) -> String {
        self.wrap(DIM, value)
    }

    pub fn cyan(&self, value: &str) -> String {
        self.wrap(CYAN, value)
    }

    pub fn green(&self, value: &str) -> String {
        self.wrap(GREEN, value)
    }

    pub fn yellow(&self, value: &str) -> String {
        self.wrap(YELLOW, value)
    }

    fn wrap(&self, code: &str, value: &str) -> String {
        if !self.enabled {
            return value.to_string();
        }
        format!("\x1b[{}m{}{}", code, value, RESET)
    }
}

pub fn color_enabled(no_color: bool, no_color_env: bool, term: Option<&str>) -> bool {
    if no_color || no_color_env {
        return false;
    }
    !matches!(term.map(str::trim), None | Some("") | Some("dumb"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_is_identity() {
        let color = Color::new(false);
        assert_eq!(color.bold("x"), "x");
        assert_eq!(color.cyan("x"), "x");
    }

    #[test]
    fn test_enabled_wraps() {
        let color = Color::new(true);
        assert_eq!(color.bold("ok"), "\x1b[1mok\x1b[0m");
        assert_eq!(color.dim("ok"), "\x1b[2mok\x1b[0m");
        assert_eq!(color.green("ok"), "\x1b[32mok\x1b[0m");
        assert_eq!(color.yellow("ok"), "\x1b[33mok\x1b[0m");
        assert_eq!(color.cyan("ok"), "\x1b[36mok\x1b[0m");
    }

    #[test]
    fn test_color_enabled_policy() {
        assert!(color_enabled(false, false, Some("xterm-256color")));
        assert!(!color_enabled(true, false, Some("xterm-256color")));
        assert!(!color_enabled(false, true, Some("xterm-256color")));
        assert!(!color_enabled(false, false, Some("dumb")));
        assert!(!color_enabled(false, false, Some("  ")));
        assert!(!color_enabled(false, false, None));
    }
}
