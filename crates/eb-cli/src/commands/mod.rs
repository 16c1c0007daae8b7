pub mod play;
pub mod simulate;
pub mod teams;

use std::path::Path;

use eb_core::TournamentData;
use tracing::debug;

/// Load tournament tables from a JSON file, or the built-in Euro 2024 data.
fn load_data(path: Option<&Path>) -> Result<TournamentData, String> {
    let Some(path) = path else {
        return Ok(TournamentData::euro_2024());
    };

    let json = std::fs::read_to_string(path)
        .map_err(|e| format!("cannot read {}: {e}", path.display()))?;
    let data = TournamentData::from_json(&json)
        .map_err(|e| format!("invalid team file {}: {e}", path.display()))?;

    debug!(path = %path.display(), teams = data.teams.len(), "loaded team file");
    Ok(data)
}
