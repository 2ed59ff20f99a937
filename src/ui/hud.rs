use gtk4::prelude::*;

use pokepairs::game::GameOutcome;

use super::state::AppState;

pub(super) fn lives_text(lives: u32) -> String {
    format!("Lives: {lives}")
}

pub(super) fn update_lives_label(st: &AppState) {
    if let Some(label) = &st.lives_label {
        label.set_text(&lives_text(st.session.lives()));
    }
}

/// Locks every cell and shows the final message.
pub(super) fn show_game_over(st: &AppState, outcome: GameOutcome) {
    for button in &st.grid_buttons {
        button.set_sensitive(false);
    }
    if let Some(label) = &st.status_label {
        label.set_text(outcome.message());
        label.set_visible(true);
    }
    tracing::info!(
        ?outcome,
        tries = st.session.tries(),
        pairs_found = st.session.pairs_found(),
        "game over"
    );
}
