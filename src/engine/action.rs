use std::fmt;

/// What a bot may do at its turn. The raise amount is the total the raiser
/// is raising to, not the increment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Action {
    Fold,
    Check,
    Call,
    Raise(u32),
}

impl Action {
    pub fn kind(&self) -> ActionKind {
        match self {
            Action::Fold => ActionKind::Fold,
            Action::Check => ActionKind::Check,
            Action::Call => ActionKind::Call,
            Action::Raise(_) => ActionKind::Raise,
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Fold => write!(f, "Fold"),
            Action::Check => write!(f, "Check"),
            Action::Call => write!(f, "Call"),
            Action::Raise(amount) => write!(f, "Raise({amount})"),
        }
    }
}

/// An action stripped of its amount, used for legality checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActionKind {
    Fold = 0,
    Check = 1,
    Call = 2,
    Raise = 3,
}

/// The set of action kinds the engine will accept right now, as a small
/// bitset. Supplied by the engine with each round state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LegalActions {
    bits: u8,
}

impl LegalActions {
    pub const fn empty() -> Self {
        Self { bits: 0 }
    }

    pub const fn with(mut self, kind: ActionKind) -> Self {
        self.bits |= 1 << kind as u8;
        self
    }

    pub fn insert(&mut self, kind: ActionKind) {
        self.bits |= 1 << kind as u8;
    }

    pub const fn contains(&self, kind: ActionKind) -> bool {
        (self.bits & (1 << kind as u8)) != 0
    }

    pub const fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// Is this concrete action one the engine will accept?
    pub fn allows(&self, action: Action) -> bool {
        self.contains(action.kind())
    }
}

impl FromIterator<ActionKind> for LegalActions {
    fn from_iter<I: IntoIterator<Item = ActionKind>>(iter: I) -> Self {
        let mut legal = LegalActions::empty();
        for kind in iter {
            legal.insert(kind);
        }
        legal
    }
}
