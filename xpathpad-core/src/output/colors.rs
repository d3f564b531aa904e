//! ANSI color support for terminal output

/// ANSI color codes
pub mod ansi {
    pub const RESET: &str = "\x1b[0m";
    pub const DIM: &str = "\x1b[2m";
    pub const BLUE: &str = "\x1b[34m";   // element names
    pub const CYAN: &str = "\x1b[36m";   // attribute names
    pub const YELLOW: &str = "\x1b[33m"; // attribute values
    pub const GREEN: &str = "\x1b[32m";  // list values
}

/// Determine if color should be used based on mode and environment
pub fn should_use_color(mode: &str) -> bool {
    match mode {
        "always" => true,
        "never" => false,
        _ => {
            // Auto mode: check if stdout is a tty and NO_COLOR is not set
            atty::is(atty::Stream::Stdout) && std::env::var("NO_COLOR").is_err()
        }
    }
}

/// Wrap `text` in `color` when coloring is enabled
pub(crate) fn paint(output: &mut String, text: &str, color: &str, use_color: bool) {
    if use_color {
        output.push_str(color);
        output.push_str(text);
        output.push_str(ansi::RESET);
    } else {
        output.push_str(text);
    }
}
