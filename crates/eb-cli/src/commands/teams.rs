use std::path::Path;

use comfy_table::{ContentArrangement, Table};

pub fn run(teams: Option<&Path>, json: bool) -> Result<(), String> {
    let data = super::load_data(teams)?;

    if json {
        let out = serde_json::to_string_pretty(&data).map_err(|e| e.to_string())?;
        println!("{out}");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Match", "Team", "Name", "Flag", "Roster"]);

    for (slot, seed) in data.seeds.iter().enumerate() {
        for id in [&seed.home, &seed.away] {
            let (name, flag, roster) = match data.team(id) {
                Ok(team) => (team.name.as_str(), team.flag.as_str(), team.roster.join(", ")),
                Err(_) => (id.as_str(), "", String::new()),
            };
            table.add_row(vec![
                (slot + 1).to_string(),
                id.clone(),
                name.to_string(),
                flag.to_string(),
                roster,
            ]);
        }
    }

    println!("  {} ({})", data.name, data.version);
    println!();
    println!("{table}");
    println!();
    println!("  {} teams, {} seed pairings", data.teams.len(), data.seeds.len());

    Ok(())
}
