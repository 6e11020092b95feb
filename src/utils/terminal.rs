use std::io::{self, IsTerminal};

/// Whether stdout should get ANSI colors.
///
/// Colors are off when stdout is not a terminal, when `NO_COLOR` is set
/// (https://no-color.org/), or when `TERM=dumb`.
pub fn supports_color() -> bool {
    color_enabled(
        io::stdout().is_terminal(),
        std::env::var_os("NO_COLOR").is_some(),
        std::env::var("TERM").ok().as_deref(),
    )
}

pub fn color_enabled(is_tty: bool, no_color: bool, term: Option<&str>) -> bool {
    if !is_tty || no_color {
        return false;
    }
    !matches!(term, Some(term) if term.eq_ignore_ascii_case("dumb"))
}
