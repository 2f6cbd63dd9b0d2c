//! Session command parsing.

/// One line of user input.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Log an amount, or the configured default when `None`
    Add(Option<f64>),
    /// Redraw the dashboard
    Status,
    /// Show today's records and achievement days
    History,
    /// List commands
    Help,
    /// End the session
    Quit,
}

/// Parse a session line. A bare number is shorthand for `add <number>`.
pub fn parse_line(line: &str) -> Result<Command, String> {
    let mut parts = line.split_whitespace();
    let Some(head) = parts.next() else {
        return Err("empty input".to_string());
    };
    let arg = parts.next();
    if parts.next().is_some() {
        return Err(format!("too many arguments: {}", line.trim()));
    }

    match (head.to_lowercase().as_str(), arg) {
        ("add" | "a", None) => Ok(Command::Add(None)),
        ("add" | "a", Some(n)) => parse_amount(n).map(|v| Command::Add(Some(v))),
        ("status" | "s", None) => Ok(Command::Status),
        ("history" | "h", None) => Ok(Command::History),
        ("help" | "?", None) => Ok(Command::Help),
        ("quit" | "exit" | "q", None) => Ok(Command::Quit),
        (other, None) => parse_amount(other)
            .map(|v| Command::Add(Some(v)))
            .map_err(|_| format!("unknown command: {other}")),
        (other, Some(_)) => Err(format!("unknown command: {other}")),
    }
}

fn parse_amount(s: &str) -> Result<f64, String> {
    s.trim_end_matches("ml")
        .parse::<f64>()
        .map_err(|_| format!("not a number: {s}"))
}

/// Whether `amount` sits on the input grid.
pub fn on_step(amount: f64, step: f64) -> bool {
    step <= 0.0 || (amount % step).abs() < f64::EPSILON
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_add() {
        assert_eq!(parse_line("add"), Ok(Command::Add(None)));
        assert_eq!(parse_line("add 250"), Ok(Command::Add(Some(250.0))));
        assert_eq!(parse_line("  ADD 300ml "), Ok(Command::Add(Some(300.0))));
        assert_eq!(parse_line("500"), Ok(Command::Add(Some(500.0))));
        assert_eq!(parse_line("add -5"), Ok(Command::Add(Some(-5.0))));
    }

    #[test]
    fn test_parse_other_commands() {
        assert_eq!(parse_line("status"), Ok(Command::Status));
        assert_eq!(parse_line("h"), Ok(Command::History));
        assert_eq!(parse_line("?"), Ok(Command::Help));
        assert_eq!(parse_line("exit"), Ok(Command::Quit));
    }

    #[test]
    fn test_parse_errors() {
        assert!(parse_line("").is_err());
        assert!(parse_line("add lots").is_err());
        assert!(parse_line("drink").is_err());
        assert!(parse_line("add 1 2").is_err());
        assert!(parse_line("status now").is_err());
    }

    #[test]
    fn test_on_step() {
        assert!(on_step(650.0, 50.0));
        assert!(!on_step(655.0, 50.0));
        assert!(on_step(655.0, 0.0));
    }
}
