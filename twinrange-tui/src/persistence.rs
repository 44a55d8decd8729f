//! App state persistence — JSON save/load across restarts.
//!
//! Only committed pairs are stored. Restored pairs go back through the
//! engine's reset path, so a stale file can never produce an invalid slider.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use twinrange_core::Commit;

use crate::app::AppState;

/// Serializable subset of app state that persists across restarts.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct PersistedState {
    pub values: BTreeMap<String, Commit>,
    pub selected: usize,
}

/// Load persisted state from disk. Returns defaults if file is missing or corrupt.
pub fn load(path: &Path) -> PersistedState {
    match std::fs::read_to_string(path) {
        Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
            warn!(path = %path.display(), error = %e, "ignoring corrupt state file");
            PersistedState::default()
        }),
        Err(_) => PersistedState::default(),
    }
}

/// Save persisted state to disk. Creates parent directories if needed.
pub fn save(path: &Path, state: &PersistedState) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(state)?;
    std::fs::write(path, json)?;
    Ok(())
}

/// Extract persisted state from AppState.
pub fn extract(app: &AppState) -> PersistedState {
    PersistedState {
        values: app
            .sliders
            .iter()
            .map(|s| (s.id().to_string(), s.state().pair()))
            .collect(),
        selected: app.selected,
    }
}

/// Apply persisted state to AppState. Unknown slider ids are skipped.
pub fn apply(app: &mut AppState, state: &PersistedState) {
    for slider in &mut app.sliders {
        if let Some(pair) = state.values.get(slider.id()) {
            let restored = slider.set_values(pair.low, pair.high);
            debug!(slider = slider.id(), low = restored.low, high = restored.high, "restored");
        }
    }
    if state.selected < app.sliders.len() {
        app.selected = state.selected;
        app.thumb = twinrange_core::Thumb::Low;
        if let Some(slider) = app.sliders.get_mut(app.selected) {
            slider.focus(app.thumb);
        }
    }
}
