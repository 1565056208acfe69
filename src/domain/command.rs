use super::page::Section;

/// Icon handle for a palette entry. Resolved to a glyph by the theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    Home,
    Projects,
    Stack,
    Mail,
    FileText,
    GitHub,
    LinkedIn,
    Copy,
    Check,
}

/// Effects whose completion has to be acknowledged on screen before the
/// palette closes itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfirmableEffect {
    CopyToClipboard { text: String },
}

/// What happens when a command is activated. The dispatcher derives its
/// close-timing policy from this tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandKind {
    Navigate { target: Section },
    ExternalLink { url: String },
    ConfirmableAction(ConfirmableEffect),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandDefinition {
    pub id: String,
    pub label: String,
    pub icon: Icon,
    pub kind: CommandKind,
    pub highlight: bool,
}

impl CommandDefinition {
    pub fn new(id: impl Into<String>, label: impl Into<String>, icon: Icon, kind: CommandKind) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            icon,
            kind,
            highlight: false,
        }
    }

    #[must_use]
    pub fn highlighted(mut self, highlight: bool) -> Self {
        self.highlight = highlight;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandGroup {
    pub label: String,
    pub items: Vec<CommandDefinition>,
}

impl CommandGroup {
    pub fn new(label: impl Into<String>, items: Vec<CommandDefinition>) -> Self {
        Self {
            label: label.into(),
            items,
        }
    }
}
