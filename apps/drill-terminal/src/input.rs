//! Learner input parsing.

/// One line of learner input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// 1-based option number.
    Choice(usize),
    /// Free text answer.
    Text(String),
    Skip,
    Pause,
    Resume,
    Quit,
}

/// Interpret a line. Returns `None` for blank lines.
///
/// Control words start with a colon so they can't collide with answers.
pub fn parse_line(line: &str) -> Option<Command> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    let command = match line.to_lowercase().as_str() {
        ":s" | ":skip" => Command::Skip,
        ":p" | ":pause" => Command::Pause,
        ":r" | ":resume" => Command::Resume,
        ":q" | ":quit" => Command::Quit,
        _ => match line.parse::<usize>() {
            Ok(number) if number > 0 => Command::Choice(number),
            _ => Command::Text(line.to_string()),
        },
    };
    Some(command)
}
