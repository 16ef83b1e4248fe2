use std::fmt;

/// The kind of statement being built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Select,
    Insert,
    Delete,
    Update,
    Count,
}

impl Command {
    /// Returns `true` for commands that write and may carry `IF EXISTS`.
    pub fn is_guarded_write(self) -> bool {
        matches!(self, Command::Update | Command::Delete)
    }

    pub fn is_read(self) -> bool {
        matches!(self, Command::Select | Command::Count)
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Command::Select => "SELECT",
            Command::Insert => "INSERT",
            Command::Delete => "DELETE",
            Command::Update => "UPDATE",
            Command::Count => "COUNT",
        })
    }
}
