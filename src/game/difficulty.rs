/// Board size picked before a game starts. Boards are always square.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

pub const DIFFICULTY_OPTIONS: [Difficulty; 3] =
    [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

impl Difficulty {
    pub fn side(self) -> usize {
        match self {
            Difficulty::Easy => 3,
            Difficulty::Medium => 4,
            Difficulty::Hard => 5,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }

    pub fn label(self) -> String {
        let side = self.side();
        format!("{} ({side}x{side})", self.name())
    }

    pub fn from_side(side: usize) -> Option<Self> {
        DIFFICULTY_OPTIONS.into_iter().find(|d| d.side() == side)
    }

    /// Distinct cards needed to fill the board; an odd board leaves one cell empty.
    pub fn pair_count(self) -> usize {
        self.side() * self.side() / 2
    }
}
