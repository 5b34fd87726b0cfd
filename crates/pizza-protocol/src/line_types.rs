//! Line format tags and separators.
//!
//! Every command or event line starts with a single-character tag,
//! followed by comma-separated fields. List-valued fields (toppings,
//! addons) separate their items with `;`.
//!
//! The actual parse/format logic lives in `command_codec`.

/// Separates fields within a line.
pub const FIELD_SEPARATOR: char = ',';

/// Separates items within a list field.
pub const LIST_SEPARATOR: char = ';';

/// Lines starting with this are comments.
pub const COMMENT_PREFIX: char = '#';

/// Command tags (script → desk).
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum CommandTag {
    /// `A, size, toppings, addons, delivery`
    Add,

    /// `R, position`
    Remove,

    /// `X`
    Clear,

    /// `P`
    Checkout,

    /// `L`
    List,
}

impl CommandTag {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'A' => Some(CommandTag::Add),
            'R' => Some(CommandTag::Remove),
            'X' => Some(CommandTag::Clear),
            'P' => Some(CommandTag::Checkout),
            'L' => Some(CommandTag::List),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            CommandTag::Add => 'A',
            CommandTag::Remove => 'R',
            CommandTag::Clear => 'X',
            CommandTag::Checkout => 'P',
            CommandTag::List => 'L',
        }
    }

    /// Number of fields a line with this tag carries, tag included.
    pub fn field_count(self) -> usize {
        match self {
            CommandTag::Add => 5,
            CommandTag::Remove => 2,
            CommandTag::Clear | CommandTag::Checkout | CommandTag::List => 1,
        }
    }
}

/// Event tags (desk → script output).
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum EventTag {
    Placed,
    Removed,
    RemoveIgnored,
    Cleared,
    CheckedOut,
    CartEmpty,
    Listing,
}

impl EventTag {
    pub fn as_char(self) -> char {
        match self {
            EventTag::Placed => 'P',
            EventTag::Removed => 'R',
            EventTag::RemoveIgnored => 'I',
            EventTag::Cleared => 'X',
            EventTag::CheckedOut => 'O',
            EventTag::CartEmpty => 'E',
            EventTag::Listing => 'L',
        }
    }
}
