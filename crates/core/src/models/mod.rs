//! Shared domain models.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identity printed on the face of a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Logo {
    /// Amazon Web Services.
    Aws,
    /// Microsoft Azure.
    Azure,
    /// Docker.
    Docker,
    /// GitHub.
    Github,
    /// Python.
    Python,
    /// JavaScript.
    Javascript,
    /// React.
    React,
    /// Node.js.
    Nodejs,
    /// Kubernetes.
    Kubernetes,
    /// Rust.
    Rust,
}

impl Logo {
    /// Every logo a board can draw from.
    pub const ALL: [Logo; 10] = [
        Logo::Aws,
        Logo::Azure,
        Logo::Docker,
        Logo::Github,
        Logo::Python,
        Logo::Javascript,
        Logo::React,
        Logo::Nodejs,
        Logo::Kubernetes,
        Logo::Rust,
    ];

    /// Text shown on the card face.
    pub fn label(self) -> &'static str {
        match self {
            Logo::Aws => "aws",
            Logo::Azure => "azure",
            Logo::Docker => "docker",
            Logo::Github => "github",
            Logo::Python => "python",
            Logo::Javascript => "javascript",
            Logo::React => "react",
            Logo::Nodejs => "nodejs",
            Logo::Kubernetes => "kubernetes",
            Logo::Rust => "rust",
        }
    }
}

impl fmt::Display for Logo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Grid size and time limit of a difficulty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preset {
    /// Number of card rows.
    pub rows: u16,
    /// Number of card columns.
    pub cols: u16,
    /// Countdown length in seconds.
    pub time_limit_secs: u32,
}

impl Preset {
    /// Total number of cards on the board.
    pub fn card_count(&self) -> usize {
        usize::from(self.rows) * usize::from(self.cols)
    }

    /// Number of distinct logos dealt (each appears twice).
    pub fn pair_count(&self) -> usize {
        self.card_count() / 2
    }
}

/// One of the fixed difficulty presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Difficulty {
    /// 3x4 grid, one minute.
    #[default]
    Easy,
    /// 4x4 grid, ninety seconds.
    Medium,
    /// 4x5 grid, two minutes.
    Hard,
}

impl Difficulty {
    /// Every difficulty in menu order.
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Grid and countdown for this difficulty.
    pub fn preset(self) -> Preset {
        let (rows, cols, time_limit_secs) = match self {
            Difficulty::Easy => (3, 4, 60),
            Difficulty::Medium => (4, 4, 90),
            Difficulty::Hard => (4, 5, 120),
        };
        Preset {
            rows,
            cols,
            time_limit_secs,
        }
    }

    /// User-facing name.
    pub fn name(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
