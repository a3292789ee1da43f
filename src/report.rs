//! Plain-text puzzle output for the `grid` command.

use crate::config::GameConfig;
use crate::tui::rng_for;
use tracing::{info, instrument};
use wordgrid_core::GameSession;

/// Builds one puzzle from `config` and describes it as text: the grid,
/// the word list and the seed when one is set.
#[instrument(skip_all, fields(seed = ?config.seed()))]
pub fn grid_report(config: &GameConfig) -> String {
    let mut rng = rng_for(*config.seed());
    let session = GameSession::with_word_list(config.words().clone(), &mut rng);
    info!(side = session.grid().side(), "Grid generated");

    let mut report = session.grid().render();
    report.push_str("\n\n");
    report.push_str(&format!("Words: {}", config.words().words().join(", ")));
    if let Some(seed) = config.seed() {
        report.push_str(&format!("\nSeed: {}", seed));
    }
    report
}
