//! Terminal color policy.

use is_terminal::IsTerminal;

pub struct Theme;

impl Theme {
    /// True when color output should be suppressed: `NO_COLOR` is set or
    /// stdout is not an interactive terminal. Config can additionally turn
    /// colors off, but never forces them past this check.
    pub fn should_disable_colors() -> bool {
        std::env::var_os("NO_COLOR").is_some() || !std::io::stdout().is_terminal()
    }
}
