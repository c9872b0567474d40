/// Preset aliases accepted on the command line. Each entry maps a word to a catalog key.
pub const PRESET_ALIASES: &[(&str, &str)] = &[
    ("init", "initialization"),
    ("initialization", "initialization"),
    ("deep-focus", "deep_focus"),
    ("deep_focus", "deep_focus"),
    ("flow-state", "flow_state"),
    ("flow_state", "flow_state"),
    ("debug", "debugging"),
    ("debugging", "debugging"),
    ("deploy", "deployment"),
    ("deployment", "deployment"),
];

/// A single command word, parsed once at the boundary
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Anthem,
    Playlist,
    States,
    Guidelines,
    Recommend,
    OpenPlaylist,
    OpenAnthem,
    Web,
    Enter(String),
    Help,
    Unrecognized(String),
}

impl Command {
    pub fn parse(word: &str) -> Self {
        let normalized = word.trim().to_lowercase();
        match normalized.as_str() {
            "anthem" => Command::Anthem,
            "playlist" => Command::Playlist,
            "states" => Command::States,
            "guidelines" => Command::Guidelines,
            "recommend" => Command::Recommend,
            "open-playlist" => Command::OpenPlaylist,
            "open-anthem" => Command::OpenAnthem,
            "web" => Command::Web,
            "help" => Command::Help,
            other => match resolve_alias(other) {
                Some(key) => Command::Enter(key.to_string()),
                None => Command::Unrecognized(word.to_string()),
            },
        }
    }

    /// Whether the one-shot output starts with the banner
    pub fn shows_header(&self) -> bool {
        matches!(
            self,
            Command::Anthem
                | Command::Playlist
                | Command::States
                | Command::Guidelines
                | Command::Recommend
                | Command::Enter(_)
        )
    }
}

pub fn resolve_alias(word: &str) -> Option<&'static str> {
    PRESET_ALIASES
        .iter()
        .find(|(alias, _)| *alias == word)
        .map(|(_, key)| *key)
}

/// One line of the interactive menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    ShowAnthem,
    ShowPlaylist,
    ListStates,
    SetState,
    ShowGuidelines,
    Recommend,
    OpenPlaylist,
    OpenAnthem,
    OpenWebPlayer,
    Exit,
    Invalid,
}

impl MenuChoice {
    pub const ENTRIES: &'static [(char, MenuChoice, &'static str)] = &[
        ('1', MenuChoice::ShowAnthem, "Show Primary Anthem"),
        ('2', MenuChoice::ShowPlaylist, "Show Operational Playlist"),
        ('3', MenuChoice::ListStates, "List Cognitive States"),
        ('4', MenuChoice::SetState, "Set Cognitive State"),
        ('5', MenuChoice::ShowGuidelines, "Show Usage Guidelines"),
        ('6', MenuChoice::Recommend, "Get Artist Recommendation"),
        ('7', MenuChoice::OpenPlaylist, "Open Playlist in Browser"),
        ('8', MenuChoice::OpenAnthem, "Open Anthem in Browser"),
        ('9', MenuChoice::OpenWebPlayer, "Open Web Player"),
        ('0', MenuChoice::Exit, "Exit"),
    ];

    pub fn parse(input: &str) -> Self {
        let mut chars = input.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::ENTRIES
                .iter()
                .find(|(digit, _, _)| *digit == c)
                .map(|(_, choice, _)| *choice)
                .unwrap_or(MenuChoice::Invalid),
            _ => MenuChoice::Invalid,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_commands() {
        assert_eq!(Command::parse("anthem"), Command::Anthem);
        assert_eq!(Command::parse("playlist"), Command::Playlist);
        assert_eq!(Command::parse("states"), Command::States);
        assert_eq!(Command::parse("guidelines"), Command::Guidelines);
        assert_eq!(Command::parse("recommend"), Command::Recommend);
        assert_eq!(Command::parse("open-playlist"), Command::OpenPlaylist);
        assert_eq!(Command::parse("open-anthem"), Command::OpenAnthem);
        assert_eq!(Command::parse("web"), Command::Web);
        assert_eq!(Command::parse("help"), Command::Help);
    }

    #[test]
    fn parsing_ignores_case_and_whitespace() {
        assert_eq!(Command::parse("  ANTHEM "), Command::Anthem);
        assert_eq!(
            Command::parse("Deep-Focus"),
            Command::Enter("deep_focus".into())
        );
    }

    #[test]
    fn aliases_map_to_underscored_keys() {
        assert_eq!(Command::parse("init"), Command::Enter("initialization".into()));
        assert_eq!(
            Command::parse("initialization"),
            Command::Enter("initialization".into())
        );
        assert_eq!(
            Command::parse("flow-state"),
            Command::Enter("flow_state".into())
        );
        assert_eq!(
            Command::parse("flow_state"),
            Command::Enter("flow_state".into())
        );
        assert_eq!(Command::parse("debug"), Command::Enter("debugging".into()));
        assert_eq!(Command::parse("deploy"), Command::Enter("deployment".into()));
    }

    #[test]
    fn every_alias_targets_an_underscored_key() {
        for (alias, key) in PRESET_ALIASES {
            assert!(!key.contains('-'), "{alias} maps to hyphenated key {key}");
            assert_eq!(resolve_alias(alias), Some(*key));
        }
    }

    #[test]
    fn unknown_words_keep_original_text() {
        assert_eq!(
            Command::parse("Party-Mode"),
            Command::Unrecognized("Party-Mode".into())
        );
        assert_eq!(Command::parse(""), Command::Unrecognized("".into()));
    }

    #[test]
    fn header_only_for_display_commands() {
        assert!(Command::Anthem.shows_header());
        assert!(Command::Enter("debugging".into()).shows_header());
        assert!(!Command::OpenAnthem.shows_header());
        assert!(!Command::Help.shows_header());
        assert!(!Command::Unrecognized("x".into()).shows_header());
    }

    #[test]
    fn menu_digits() {
        assert_eq!(MenuChoice::parse("1"), MenuChoice::ShowAnthem);
        assert_eq!(MenuChoice::parse(" 4 "), MenuChoice::SetState);
        assert_eq!(MenuChoice::parse("9"), MenuChoice::OpenWebPlayer);
        assert_eq!(MenuChoice::parse("0"), MenuChoice::Exit);
    }

    #[test]
    fn menu_rejects_everything_else() {
        assert_eq!(MenuChoice::parse(""), MenuChoice::Invalid);
        assert_eq!(MenuChoice::parse("10"), MenuChoice::Invalid);
        assert_eq!(MenuChoice::parse("a"), MenuChoice::Invalid);
        assert_eq!(MenuChoice::parse("exit"), MenuChoice::Invalid);
    }
}
