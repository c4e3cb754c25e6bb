//! Stdin commands accepted in interactive headless mode

/// One parsed stdin line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `scan <url>`
    Scan(String),
    /// `report <email>`
    Report(String),
    /// `q` or `quit`
    Quit,
}

/// Parse one stdin line. Blank lines yield `Ok(None)`.
///
/// Arguments are taken verbatim after the first run of whitespace, so the
/// URL and email reach the state machine exactly as typed.
pub fn parse(line: &str) -> Result<Option<Command>, String> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let (verb, arg) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim_start()),
        None => (line, ""),
    };

    match verb {
        "q" | "quit" if arg.is_empty() => Ok(Some(Command::Quit)),
        "scan" if !arg.is_empty() => Ok(Some(Command::Scan(arg.to_string()))),
        "scan" => Err("usage: scan <url>".to_string()),
        "report" if !arg.is_empty() => Ok(Some(Command::Report(arg.to_string()))),
        "report" => Err("usage: report <email>".to_string()),
        _ => Err(format!("Unknown command: {}", line)),
    }
}
