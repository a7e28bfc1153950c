//! Commands the front-end can issue, and their dispatch.
//!
//! Dispatch never fails: malformed input renders an error panel and the
//! session is left untouched.

use crate::classify::{classify, lesson};
use crate::games::{DetectiveRound, Game};
use crate::models::{flip_bit, parse_address, parse_decimal_input, parse_subnet, BitVector8};
use crate::output;
use crate::processing::evaluate;
use crate::session::{SessionState, ANALYZE_POINTS, LESSON_POINTS};
use clap::Subcommand;

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Validate and classify an IPv4 address
    Analyze {
        /// Dotted-quad address, e.g. 192.168.1.1
        address: String,
    },

    /// Explain each octet of an address
    Learn {
        address: String,
    },

    /// Show a decimal number as eight bits
    Binary {
        /// Decimal value; clamped to 0-255
        #[arg(allow_hyphen_values = true)]
        value: String,
    },

    /// Toggle one bit of a decimal number
    Flip {
        /// Decimal value; clamped to 0-255
        #[arg(allow_hyphen_values = true)]
        value: String,

        /// Bit position, 0 is the 128 bit and 7 the 1 bit
        #[arg(value_parser = clap::value_parser!(u8).range(0..=7))]
        bit: u8,
    },

    /// Network, broadcast and host range of a CIDR block
    Subnet {
        /// Block in address/prefix form, e.g. 192.168.1.0/24
        cidr: String,
    },

    /// Sample addresses with their bits
    Showcase,

    /// Open a game by name, or the welcome screen
    Game {
        /// ip-guesser, neighborhood, binary-builder or subnet-puzzle
        name: Option<String>,
    },

    /// Play a round of IP Detective
    Detective {
        /// Round to play; a random one when omitted
        #[arg(long)]
        seed: Option<u64>,

        /// Index of an option you think is valid (repeatable)
        #[arg(long = "pick", requires = "seed")]
        picks: Vec<usize>,
    },

    /// Show score and games played
    Stats,
}

/// Run one command against the session and return the rendered screen.
pub fn dispatch(command: &Command, state: &mut SessionState) -> String {
    log::info!("dispatch {command:?}");
    match command {
        Command::Analyze { address } => match parse_address(address) {
            Ok(addr) => {
                let panel = output::analysis_panel(&addr, &classify(&addr));
                state.add_score(ANALYZE_POINTS);
                format!("{panel}\n{}", output::points_line(ANALYZE_POINTS, state))
            }
            Err(e) => {
                log::warn!("analyze: {e}");
                output::invalid_address_panel(&e)
            }
        },
        Command::Learn { address } => match parse_address(address) {
            Ok(addr) => {
                let panel = output::lesson_panel(&addr, &lesson(&addr));
                state.add_score(LESSON_POINTS);
                format!("{panel}\n{}", output::points_line(LESSON_POINTS, state))
            }
            Err(e) => {
                log::warn!("learn: {e}");
                output::invalid_address_panel(&e)
            }
        },
        Command::Binary { value } => output::binary_panel(&BitVector8::from_input(value)),
        Command::Flip { value, bit } => {
            let flipped = flip_bit(parse_decimal_input(value), *bit);
            output::binary_panel(&BitVector8::new(flipped))
        }
        Command::Subnet { cidr } => match parse_subnet(cidr) {
            Ok(subnet) => output::subnet_panel(&subnet, &evaluate(&subnet)),
            Err(e) => {
                log::warn!("subnet: {e}");
                output::invalid_subnet_panel(&e)
            }
        },
        Command::Showcase => output::showcase_panel(),
        Command::Game { name: None } => output::welcome_panel(state),
        Command::Game { name: Some(name) } => {
            // Counted before the lookup, unknown names included.
            state.record_game();
            match Game::from_name(name) {
                Some(game) => output::game_panel(game),
                None => {
                    log::warn!("unknown game {name:?}, showing welcome screen");
                    output::welcome_panel(state)
                }
            }
        }
        Command::Detective { seed: None, picks } if !picks.is_empty() => {
            log::warn!("detective: picks {picks:?} given without the round seed");
            output::detective_missing_seed_panel()
        }
        Command::Detective { seed, picks } => {
            let seed = seed.unwrap_or_else(rand::random);
            let round = DetectiveRound::generate(seed);
            if picks.is_empty() {
                state.record_game();
                output::detective_panel(&round)
            } else {
                let outcome = round.check(picks);
                let panel = output::detective_result_panel(&round, &outcome);
                if outcome.points > 0 {
                    state.add_score(outcome.points);
                    format!("{panel}\n{}", output::points_line(outcome.points, state))
                } else {
                    panel
                }
            }
        }
        Command::Stats => output::stats_panel(state),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::DETECTIVE_POINTS;

    #[test]
    fn test_analyze_valid_scores() {
        let mut state = SessionState::default();
        let out = dispatch(
            &Command::Analyze {
                address: "127.0.0.1".to_string(),
            },
            &mut state,
        );
        assert!(out.contains("Loopback IP"));
        assert!(out.contains("Used for testing (localhost)"));
        assert_eq!(state.score, ANALYZE_POINTS);
    }

    #[test]
    fn test_analyze_invalid_renders_error_and_keeps_score() {
        let mut state = SessionState::default();
        let out = dispatch(
            &Command::Analyze {
                address: "256.1.1.1".to_string(),
            },
            &mut state,
        );
        assert!(out.contains("Invalid IP Address"));
        assert_eq!(state, SessionState::default());
    }

    #[test]
    fn test_learn_scores_two() {
        let mut state = SessionState::default();
        let out = dispatch(
            &Command::Learn {
                address: "10.0.0.1".to_string(),
            },
            &mut state,
        );
        assert!(out.contains("House #"));
        assert_eq!(state.score, LESSON_POINTS);
    }

    #[test]
    fn test_binary_and_flip() {
        let mut state = SessionState::default();
        let out = dispatch(
            &Command::Binary {
                value: "-20".to_string(),
            },
            &mut state,
        );
        assert!(out.contains("00000000"));

        let out = dispatch(
            &Command::Flip {
                value: "0".to_string(),
                bit: 0,
            },
            &mut state,
        );
        assert!(out.contains("10000000"));
        assert_eq!(state, SessionState::default());
    }

    #[test]
    fn test_subnet_valid_and_invalid() {
        let mut state = SessionState::default();
        let out = dispatch(
            &Command::Subnet {
                cidr: "192.168.1.0/24".to_string(),
            },
            &mut state,
        );
        assert!(out.contains("192.168.1.255"));

        let out = dispatch(
            &Command::Subnet {
                cidr: "192.168.1.0/40".to_string(),
            },
            &mut state,
        );
        assert!(out.contains("Invalid Subnet"));
    }

    #[test]
    fn test_every_named_game_counts() {
        let mut state = SessionState::default();
        dispatch(
            &Command::Game {
                name: Some("binary-builder".to_string()),
            },
            &mut state,
        );
        assert_eq!(state.games_played, 1);

        let out = dispatch(
            &Command::Game {
                name: Some("tetris".to_string()),
            },
            &mut state,
        );
        assert!(out.contains("Welcome to NetFun!"));
        assert_eq!(state.games_played, 2);

        dispatch(&Command::Game { name: None }, &mut state);
        assert_eq!(state.games_played, 2);
    }

    #[test]
    fn test_detective_round_and_answer() {
        let mut state = SessionState::default();
        let out = dispatch(
            &Command::Detective {
                seed: Some(11),
                picks: vec![],
            },
            &mut state,
        );
        assert!(out.contains("--seed 11"));
        assert_eq!(state.games_played, 1);

        let picks: Vec<usize> = DetectiveRound::generate(11)
            .valid_indices()
            .into_iter()
            .collect();
        dispatch(
            &Command::Detective {
                seed: Some(11),
                picks,
            },
            &mut state,
        );
        assert_eq!(state.score, DETECTIVE_POINTS);
    }

    #[test]
    fn test_detective_picks_without_seed_are_not_graded() {
        let mut state = SessionState::default();
        for _ in 0..5 {
            let out = dispatch(
                &Command::Detective {
                    seed: None,
                    picks: vec![0, 1],
                },
                &mut state,
            );
            assert!(out.contains("Missing round seed"));
            assert!(!out.contains("[0]"));
        }
        assert_eq!(state, SessionState::default());
    }

    #[test]
    fn test_detective_cli_requires_seed_with_pick() {
        use clap::Parser;

        #[derive(Parser, Debug)]
        struct TestCli {
            #[command(subcommand)]
            command: Command,
        }

        assert!(TestCli::try_parse_from(["netfun", "detective", "--pick", "0"]).is_err());
        let cli = TestCli::try_parse_from(["netfun", "detective", "--seed", "4", "--pick", "0"])
            .expect("seed and pick together should parse");
        assert_eq!(
            cli.command,
            Command::Detective {
                seed: Some(4),
                picks: vec![0],
            }
        );
    }
}
