//! Mini-games.
//!
//! Only [`detective`] has gameplay; the rest show an intro screen.

mod detective;

pub use detective::{DetectiveOutcome, DetectiveRound, ROUND_SIZE};

/// The games on the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Game {
    IpGuesser,
    Neighborhood,
    BinaryBuilder,
    SubnetPuzzle,
}

impl Game {
    pub const ALL: [Game; 4] = [
        Game::IpGuesser,
        Game::Neighborhood,
        Game::BinaryBuilder,
        Game::SubnetPuzzle,
    ];

    /// Look up a game by its menu key, e.g. `ip-guesser`.
    pub fn from_name(name: &str) -> Option<Game> {
        Game::ALL.into_iter().find(|g| g.key() == name.trim())
    }

    pub fn key(&self) -> &'static str {
        match self {
            Game::IpGuesser => "ip-guesser",
            Game::Neighborhood => "neighborhood",
            Game::BinaryBuilder => "binary-builder",
            Game::SubnetPuzzle => "subnet-puzzle",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Game::IpGuesser => "IP Detective",
            Game::Neighborhood => "Network Neighborhood",
            Game::BinaryBuilder => "Binary Builder",
            Game::SubnetPuzzle => "Subnet Puzzle",
        }
    }

    pub fn instruction(&self) -> &'static str {
        match self {
            Game::IpGuesser => "Find the valid IP addresses among the imposters!",
            Game::Neighborhood => "Move devices into the right network neighborhood.",
            Game::BinaryBuilder => "Flip bits until the byte matches the target number.",
            Game::SubnetPuzzle => "Work out the network and broadcast address of each block.",
        }
    }

    /// Whether the game has nothing beyond its intro yet.
    pub fn is_placeholder(&self) -> bool {
        !matches!(self, Game::IpGuesser)
    }
}

impl std::fmt::Display for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.title())
    }
}
