//! Load scenarios from TOML files

use std::fs;
use std::path::{Path, PathBuf};

use crate::core::error::Result;
use crate::scenario::Scenario;

/// Directory holding bundled scenarios
pub const SCENARIO_DIR: &str = "data/scenarios";

/// Load and validate a scenario file
pub fn load_scenario(path: &Path) -> Result<Scenario> {
    let content = fs::read_to_string(path)?;
    let scenario = Scenario::from_toml_str(&content)?;

    tracing::debug!(
        path = %path.display(),
        weapon = %scenario.weapon.name,
        targets = scenario.target.ac_list.len(),
        "loaded scenario"
    );

    Ok(scenario)
}

/// Path of a bundled scenario by name: `data/scenarios/{name}.toml`
pub fn scenario_path(name: &str) -> PathBuf {
    PathBuf::from(SCENARIO_DIR).join(format!("{}.toml", name))
}

impl Scenario {
    /// Load from a path, or from the bundled directory when given a bare name
    pub fn load(name_or_path: &str) -> Result<Self> {
        let direct = Path::new(name_or_path);
        if direct.is_file() {
            load_scenario(direct)
        } else {
            load_scenario(&scenario_path(name_or_path))
        }
    }
}
