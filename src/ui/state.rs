use gtk4 as gtk;
use gtk4::gdk;

use pokepairs::GameConfig;
use pokepairs::game::Session;

/// Everything the main loop owns for one running game.
pub struct AppState {
    pub session: Session<gdk::Texture>,
    pub config: GameConfig,
    pub grid_buttons: Vec<gtk::Button>,
    pub lives_label: Option<gtk::Label>,
    pub status_label: Option<gtk::Label>,
}

impl AppState {
    pub fn new(session: Session<gdk::Texture>, config: GameConfig) -> Self {
        AppState {
            session,
            config,
            grid_buttons: Vec::new(),
            lives_label: None,
            status_label: None,
        }
    }

    pub fn button_at(&self, pos: (usize, usize)) -> Option<&gtk::Button> {
        self.session
            .grid()
            .index_of(pos)
            .and_then(|idx| self.grid_buttons.get(idx))
    }
}
