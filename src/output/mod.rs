//! Output formatting for the terminal front-end.
//!
//! This module handles rendering results for the learner:
//! - [`panels`] - one text panel per screen
//! - [`terminal`] - alignment and color helpers

mod panels;
mod terminal;

pub use panels::{
    analysis_panel, binary_panel, detective_missing_seed_panel, detective_panel,
    detective_result_panel, game_panel, invalid_address_panel, invalid_subnet_panel, lesson_panel,
    points_line, showcase_panel, stats_panel, subnet_panel, welcome_panel,
};
pub use terminal::{detail_row, format_field, set_color};
