//! Read-only entities written by the game-hosting process.

/// One play session of a story file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instance {
    /// Row identifier; never exposed in URLs.
    pub id: i64,
    /// Public identifier used in URLs.
    pub hashid: String,
    /// Name of the story file the instance runs.
    pub story_filename: String,
    /// Number of players the instance was started with.
    pub num_players: i64,
    /// Start time in Unix seconds.
    pub starttime: i64,
    /// Last save time in Unix seconds.
    pub savetime: i64,
    /// Count of virtual-machine instructions executed so far.
    pub instructions_run: i64,
    /// Whether the instance crashed.
    pub crashed: bool,
}

/// One participant in an [`Instance`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    /// Identifier, unique within the owning instance.
    pub id: i64,
    /// Row identifier of the owning instance.
    pub instance: i64,
    /// Display name.
    pub username: String,
}

/// Classification of a recorded transcript message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextType {
    /// Text printed by the game.
    GameOutput,
    /// A command typed by the player.
    UserInput,
    /// A message from the hosting server rather than the game.
    SystemMessage,
    /// A code this viewer does not know about.
    Other(i64),
}

impl TextType {
    /// Maps the stored integer code to a text type.
    #[must_use]
    pub fn from_code(code: i64) -> Self {
        match code {
            0 => Self::GameOutput,
            1 => Self::UserInput,
            2 => Self::SystemMessage,
            other => Self::Other(other),
        }
    }

    /// CSS class used when rendering a line of this type.
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Self::GameOutput => "gameoutput",
            Self::UserInput => "userinput",
            Self::SystemMessage | Self::Other(_) => "sysmessage",
        }
    }
}

/// One recorded message in a player's history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptLine {
    /// Sequence identifier; defines ordering within a player.
    pub id: i64,
    /// Row identifier of the owning player.
    pub player: i64,
    /// Message classification.
    pub texttype: TextType,
    /// Raw text, possibly with embedded newlines and a trailing prompt.
    pub content: String,
}

/// A player joined with the instance that owns it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerTranscriptOwner {
    /// Player identifier.
    pub player_id: i64,
    /// Player display name.
    pub username: String,
    /// Public identifier of the owning instance.
    pub instance_hashid: String,
    /// Whether the owning instance crashed.
    pub crashed: bool,
}

/// The most recent crash recorded for an instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrashReport {
    /// When the crash happened, in Unix seconds.
    pub timestamp: i64,
    /// Error string reported by the virtual machine.
    pub errstr: String,
}
