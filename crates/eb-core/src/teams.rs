//! Static, versioned tournament tables.
//!
//! Teams are plain string keys. Everything the bracket needs to know about
//! them (localized name, flag asset, roster) lives in a `TournamentData`
//! table that is handed to the engine and shared with whatever renders it.
//! The built-in table is the Euro 2024 knockout stage; other tables can be
//! loaded from JSON and are validated before use.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::round::Round;

/// Canonical team identifier (English team name).
pub type TeamId = String;

/// Display and roster data for one team.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamInfo {
    /// Canonical identifier.
    pub id: TeamId,
    /// Localized display name.
    pub name: String,
    /// Flag image reference.
    pub flag: String,
    /// Players eligible to be picked as goal scorers.
    pub roster: Vec<String>,
}

/// One fixed first-round matchup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedPairing {
    /// Home team identifier.
    pub home: TeamId,
    /// Away team identifier.
    pub away: TeamId,
}

/// The complete data table for one tournament.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TournamentData {
    /// Tournament title.
    pub name: String,
    /// Version tag of this table.
    pub version: String,
    /// Round-of-16 pairings in slot order.
    pub seeds: Vec<SeedPairing>,
    /// Team table.
    pub teams: Vec<TeamInfo>,
}

/// Round-of-16 pairings of Euro 2024, in slot order.
pub const EURO_2024_SEEDS: &[(&str, &str)] = &[
    ("Spain", "Georgia"),
    ("Romania", "Netherlands"),
    ("Germany", "Denmark"),
    ("Austria", "Turkey"),
    ("Portugal", "Slovenia"),
    ("England", "Slovakia"),
    ("France", "Belgium"),
    ("Switzerland", "Italy"),
];

/// Euro 2024 knockout teams: `(id, Spanish name, flag asset, roster)`.
pub const EURO_2024_TEAMS: &[(&str, &str, &str, &[&str])] = &[
    (
        "Spain",
        "España",
        "/spain.webp",
        &["Morata", "Ferran Torres", "Lamine Yamal", "Nico Williams", "Carvajal"],
    ),
    (
        "Georgia",
        "Georgia",
        "/georgia.webp",
        &["Kvaratskhelia", "Zivzivadze", "Kiteishvili", "Lobzhanidze"],
    ),
    (
        "Romania",
        "Rumanía",
        "/romania.svg",
        &["Puscas", "Ratiu", "Hagi", "Marin", "Stanciu"],
    ),
    (
        "Netherlands",
        "Países Bajos",
        "/netherlands.svg",
        &["Depay", "Van Dijk", "Gakpo", "Xavi Simons", "Weghorst"],
    ),
    (
        "Germany",
        "Alemania",
        "/germany.svg",
        &["Havertz", "Fullkrug", "Musiala", "Gnabry", "Sané"],
    ),
    (
        "Denmark",
        "Dinamarca",
        "/denmark.jpg",
        &["Højlund", "Wind", "Poulsen", "Eriksen", "Damsgaard"],
    ),
    (
        "Austria",
        "Austria",
        "/austria.png",
        &["Arnautovic", "Gregoritsch", "Sabitzer", "Baumgartner", "Kalajdžić"],
    ),
    (
        "Turkey",
        "Turquía",
        "/turkey.svg",
        &["Yılmaz", "Ünder", "Kahveci", "Çalhanoğlu", "Akgün"],
    ),
    (
        "Portugal",
        "Portugal",
        "/portugal.webp",
        &["Ronaldo", "Félix", "Ramos", "Leão", "Fernandes"],
    ),
    (
        "Slovenia",
        "Eslovenia",
        "/slovenia.svg",
        &["Šeško", "Sporar", "Stojanović", "Sesko", "Verbic"],
    ),
    (
        "England",
        "Inglaterra",
        "/england.png",
        &["Kane", "Rashford", "Saka", "Sterling", "Grealish"],
    ),
    (
        "Slovakia",
        "Eslovaquia",
        "/slovakia.png",
        &["Duda", "Mak", "Suslov", "Schranz", "Polievka"],
    ),
    (
        "France",
        "Francia",
        "/france.svg",
        &["Mbappé", "Giroud", "Griezmann", "Dembélé", "Coman"],
    ),
    (
        "Belgium",
        "Bélgica",
        "/belgium.png",
        &["Lukaku", "Openda", "Bakayoko", "De Bruyne", "Carrasco"],
    ),
    (
        "Switzerland",
        "Suiza",
        "/switzerland.png",
        &["Embolo", "Seferović", "Vargas", "Amdouni", "Shaqiri"],
    ),
    (
        "Italy",
        "Italia",
        "/italia.png",
        &["Immobile", "Retegui", "Raspadori", "Chiesa", "Barella"],
    ),
];

impl TournamentData {
    /// The built-in Euro 2024 knockout table.
    pub fn euro_2024() -> Self {
        Self {
            name: "Euro 2024".to_string(),
            version: "euro-2024.1".to_string(),
            seeds: EURO_2024_SEEDS
                .iter()
                .map(|(home, away)| SeedPairing {
                    home: home.to_string(),
                    away: away.to_string(),
                })
                .collect(),
            teams: EURO_2024_TEAMS
                .iter()
                .map(|(id, name, flag, roster)| TeamInfo {
                    id: id.to_string(),
                    name: name.to_string(),
                    flag: flag.to_string(),
                    roster: roster.iter().map(|p| p.to_string()).collect(),
                })
                .collect(),
        }
    }

    /// Parse and validate a table from JSON.
    pub fn from_json(json: &str) -> CoreResult<Self> {
        let data: Self = serde_json::from_str(json)?;
        data.validate()?;
        Ok(data)
    }

    /// Check that the table describes a playable 16-team bracket.
    pub fn validate(&self) -> CoreResult<()> {
        let expected = Round::RoundOf16.match_count();
        if self.seeds.len() != expected {
            return Err(CoreError::InvalidData(format!(
                "expected {expected} seed pairings, found {}",
                self.seeds.len()
            )));
        }

        let mut ids = HashSet::new();
        for team in &self.teams {
            if !ids.insert(team.id.as_str()) {
                return Err(CoreError::InvalidData(format!(
                    "team '{}' listed twice",
                    team.id
                )));
            }
        }

        let mut seeded = HashSet::new();
        for seed in &self.seeds {
            for id in [&seed.home, &seed.away] {
                if !seeded.insert(id.as_str()) {
                    return Err(CoreError::InvalidData(format!(
                        "team '{id}' seeded twice"
                    )));
                }
                self.roster(id)?;
            }
        }

        Ok(())
    }

    /// Look up a team, failing on unknown identifiers.
    pub fn team(&self, id: &str) -> CoreResult<&TeamInfo> {
        self.teams
            .iter()
            .find(|t| t.id == id)
            .ok_or_else(|| CoreError::UnknownTeam(id.to_string()))
    }

    /// The roster of a team. Unknown teams and empty rosters are errors.
    pub fn roster(&self, id: &str) -> CoreResult<&[String]> {
        let team = self.team(id)?;
        if team.roster.is_empty() {
            return Err(CoreError::EmptyRoster(id.to_string()));
        }
        Ok(&team.roster)
    }

    /// Localized name for display, falling back to the raw identifier.
    pub fn display_name<'a>(&'a self, id: &'a str) -> &'a str {
        self.team(id).map(|t| t.name.as_str()).unwrap_or(id)
    }

    /// Flag asset for display, if the team is known.
    pub fn flag(&self, id: &str) -> Option<&str> {
        self.team(id).ok().map(|t| t.flag.as_str())
    }

    /// All sixteen seeded team identifiers in slot order.
    pub fn seed_teams(&self) -> impl Iterator<Item = &str> {
        self.seeds
            .iter()
            .flat_map(|s| [s.home.as_str(), s.away.as_str()])
    }
}

impl Default for TournamentData {
    fn default() -> Self {
        Self::euro_2024()
    }
}
