//! Question model and answer kinds

/// Option labels given to a question when it becomes multiple choice
pub const DEFAULT_OPTIONS: [&str; 2] = ["Option 1", "Option 2"];

/// How a question is answered, controlling which input affordance is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QuestionKind {
    /// Single-line text answer
    #[default]
    Short,
    /// Multi-line text answer
    Long,
    /// Pick one option from a fixed list
    Multiple,
}

impl QuestionKind {
    /// Cycle to the next kind
    pub fn next(&self) -> Self {
        match self {
            Self::Short => Self::Long,
            Self::Long => Self::Multiple,
            Self::Multiple => Self::Short,
        }
    }

    /// Display label for the kind
    pub fn label(&self) -> &'static str {
        match self {
            Self::Short => "Short answer",
            Self::Long => "Long answer",
            Self::Multiple => "Multiple choice",
        }
    }

    /// Stable name used in the config file
    pub fn name(&self) -> &'static str {
        match self {
            Self::Short => "short",
            Self::Long => "long",
            Self::Multiple => "multiple",
        }
    }

    /// Parse a config-file name back into a kind
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "short" => Some(Self::Short),
            "long" => Some(Self::Long),
            "multiple" => Some(Self::Multiple),
            _ => None,
        }
    }

    /// Options a question of this kind starts with.
    ///
    /// Multiple choice always starts from the fixed pair; text kinds
    /// carry no options.
    pub fn starting_options(&self) -> Vec<String> {
        match self {
            Self::Short | Self::Long => Vec::new(),
            Self::Multiple => DEFAULT_OPTIONS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// A single field definition in the form being edited
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    /// Stable identity, assigned once and never reused
    pub id: String,
    /// Prompt shown on the card
    pub title: String,
    /// Answer kind
    pub kind: QuestionKind,
    /// Whether an answer would be mandatory
    pub required: bool,
    /// Choice labels; only meaningful for multiple choice
    pub options: Vec<String>,
}

impl Question {
    /// Create a question with options populated for its kind
    pub fn new(id: impl Into<String>, title: impl Into<String>, kind: QuestionKind) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            kind,
            required: false,
            options: kind.starting_options(),
        }
    }

    /// Replace the kind, regenerating options for the new kind.
    ///
    /// Options are rebuilt even when the kind is unchanged, so a
    /// multiple-choice question always ends up with the fixed pair.
    pub fn set_kind(&mut self, kind: QuestionKind) {
        self.kind = kind;
        self.options = kind.starting_options();
    }
}
