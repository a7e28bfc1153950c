//! Text panels for each screen of the toolkit.

use super::terminal::{detail_row, format_field};
use crate::classify::{
    audience_label, Category, ClassificationResult, OctetRole, SHOWCASE_ADDRESSES,
};
use crate::error::AddressError;
use crate::games::{DetectiveOutcome, DetectiveRound, Game};
use crate::models::{to_binary8, BitVector8, Ipv4Address, Subnet};
use crate::processing::SubnetSummary;
use crate::session::SessionState;
use colored::{ColoredString, Colorize};
use itertools::Itertools;

fn category_colored(category: Category) -> ColoredString {
    let label = category.label();
    match category {
        Category::Private => label.green(),
        Category::Loopback => label.cyan(),
        Category::NetworkId => label.blue(),
        Category::Broadcast => label.yellow(),
        Category::Multicast => label.magenta(),
        Category::Public => label.white(),
    }
}

fn bits_colored(bits: &str) -> String {
    bits.chars()
        .map(|b| {
            if b == '1' {
                "1".bold().green().to_string()
            } else {
                "0".dimmed().to_string()
            }
        })
        .collect()
}

/// Result of a successful analysis.
pub fn analysis_panel(addr: &Ipv4Address, result: &ClassificationResult) -> String {
    let first = addr.first_octet();
    [
        format!("{} Valid IP Address: {addr}", "✔".green()),
        detail_row("Type", category_colored(result.category)),
        detail_row("Class", result.class_label()),
        detail_row("First Octet", format!("{first} ({})", to_binary8(first as i64))),
        detail_row("Special Note", result.note),
    ]
    .join("\n")
}

/// Error state for text that is not a dotted quad.
pub fn invalid_address_panel(err: &AddressError) -> String {
    log::debug!("rendering invalid address panel for {err}");
    [
        format!("{} Invalid IP Address", "✘".red()),
        "  Please enter a valid IP address in the format: XXX.XXX.XXX.XXX".to_string(),
        "  Each number must be between 0 and 255".to_string(),
    ]
    .join("\n")
}

/// Decimal value, its bits and the place value of each bit.
pub fn binary_panel(bv: &BitVector8) -> String {
    let weights = bv
        .positions()
        .map(|(_, weight, _)| format_field(weight, 4))
        .join("");
    let bits = bv
        .positions()
        .map(|(_, _, set)| {
            let cell = format_field(if set { "1" } else { "0" }, 4);
            if set {
                cell.bold().green().to_string()
            } else {
                cell.dimmed().to_string()
            }
        })
        .join("");
    let labels = bv
        .positions()
        .map(|(i, weight, _)| format!("Bit {} (Value: {weight})", 7 - i))
        .join(", ");
    [
        detail_row("Decimal", bv.value()),
        detail_row("Binary", bv.bits()),
        format!("  {weights}"),
        format!("  {bits}"),
        format!("  {}", labels.dimmed()),
    ]
    .join("\n")
}

/// Derived addresses of a CIDR block.
pub fn subnet_panel(subnet: &Subnet, summary: &SubnetSummary) -> String {
    let mask = Ipv4Address::from_bits(subnet.mask());
    [
        format!("{} Subnet {subnet}", "✔".green()),
        detail_row("Mask", mask),
        detail_row("Network", summary.network),
        detail_row("Broadcast", summary.broadcast),
        detail_row("First Host", summary.first_host),
        detail_row("Last Host", summary.last_host),
        detail_row("Usable Hosts", summary.usable_host_count),
    ]
    .join("\n")
}

/// Error state for text that is not `address/prefix`.
pub fn invalid_subnet_panel(err: &AddressError) -> String {
    log::debug!("rendering invalid subnet panel for {err}");
    [
        format!("{} Invalid Subnet", "✘".red()),
        "  Please enter a subnet in the format: XXX.XXX.XXX.XXX/NN".to_string(),
        "  Each number must be between 0 and 255 and the prefix between 0 and 32".to_string(),
    ]
    .join("\n")
}

/// Per-octet explanation with the home-address analogy.
pub fn lesson_panel(addr: &Ipv4Address, roles: &[OctetRole; 4]) -> String {
    let mut lines = vec![
        format!("Learning About {addr}"),
        "What each part means:".bold().to_string(),
    ];
    lines.extend(
        roles
            .iter()
            .map(|r| format!("  {:>3} ({}) - {}", r.value, r.binary, r.meaning)),
    );
    lines.push("Think of it like a home address:".bold().to_string());
    lines.push(format!(
        "  {}",
        roles
            .iter()
            .map(|r| format!("{} [{}]", r.value, r.analogy))
            .join(" . ")
    ));
    lines.join("\n")
}

/// Each showcase address as octets over their bits.
pub fn showcase_panel() -> String {
    SHOWCASE_ADDRESSES
        .iter()
        .map(|addr| {
            let octets = addr.octets();
            let numbers = octets.iter().map(|o| format_field(o, 8)).join("   ");
            let bits = octets
                .iter()
                .map(|o| bits_colored(&to_binary8(*o as i64)))
                .join(" . ");
            format!("{numbers}\n{bits}\n  -> {}", audience_label(addr).bold())
        })
        .join("\n\n")
}

/// Home screen with the running totals.
pub fn welcome_panel(state: &SessionState) -> String {
    let last = state
        .last_played
        .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| "never".to_string());
    let mut lines = vec![
        "Welcome to NetFun!".bold().to_string(),
        "Select a game to start playing and learning!".to_string(),
        detail_row("Score", state.score),
        detail_row("Games Played", state.games_played),
        detail_row("Last Played", last),
        "Games:".to_string(),
    ];
    lines.extend(
        Game::ALL
            .iter()
            .map(|g| format!("  {:<16}{}", g.key(), g.title())),
    );
    lines.push(format!(
        "{} Start with \"IP Detective\" to learn what makes a valid IP address!",
        "Pro Tip:".yellow()
    ));
    lines.join("\n")
}

/// Intro screen for a game.
pub fn game_panel(game: Game) -> String {
    let mut lines = vec![
        game.title().bold().to_string(),
        game.instruction().to_string(),
    ];
    if game.is_placeholder() {
        lines.push("  Coming soon.".dimmed().to_string());
    } else {
        lines.push("  Run `netfun detective` to play a round.".to_string());
    }
    lines.join("\n")
}

/// Candidates of a detective round, numbered for picking.
pub fn detective_panel(round: &DetectiveRound) -> String {
    let mut lines = vec![
        format!("{} (round {})", Game::IpGuesser.title().bold(), round.seed),
        Game::IpGuesser.instruction().to_string(),
    ];
    lines.extend(
        round
            .options
            .iter()
            .enumerate()
            .map(|(i, o)| format!("  [{i}] {o}")),
    );
    lines.push(format!(
        "  Answer with: netfun detective --seed {} --pick N --pick M ...",
        round.seed
    ));
    lines.join("\n")
}

/// Error state for picks sent without the round they belong to.
pub fn detective_missing_seed_panel() -> String {
    [
        format!("{} Missing round seed", "✘".red()),
        "  Picks are graded against the round you were shown.".to_string(),
        "  Answer with: netfun detective --seed N --pick N --pick M ...".to_string(),
    ]
    .join("\n")
}

/// Verdict for each candidate after the player answered.
pub fn detective_result_panel(round: &DetectiveRound, outcome: &DetectiveOutcome) -> String {
    let mut lines = vec![if outcome.points > 0 {
        format!("{} Case closed! Every valid address found.", "✔".green())
    } else {
        format!("{} Not quite, the imposters got away.", "✘".red())
    }];
    lines.extend(round.options.iter().enumerate().map(|(i, o)| {
        let verdict = if outcome.correct.contains(&i) {
            "found".green()
        } else if outcome.wrong.contains(&i) {
            "imposter".red()
        } else if outcome.missed.contains(&i) {
            "missed".yellow()
        } else {
            "".normal()
        };
        format!("  [{i}] {o:<20}{verdict}")
    }));
    lines.join("\n")
}

/// Toast shown after points are awarded.
pub fn points_line(points: u32, state: &SessionState) -> String {
    format!(
        "{} (score {})",
        format!("+{points} points!").green().bold(),
        state.score
    )
}

/// Running totals.
pub fn stats_panel(state: &SessionState) -> String {
    [
        detail_row("Score", state.score),
        detail_row("Games Played", state.games_played),
    ]
    .join("\n")
}
