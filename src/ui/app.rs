use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use gtk4 as gtk;
use gtk4::gdk;
use gtk4::glib;
use gtk4::prelude::*;
use libadwaita as adw;
use adw::prelude::*;

use pokepairs::game::{ClickOutcome, Difficulty, GameOutcome, Grid, Position, Session};
use pokepairs::provider::{CardImageProvider, PokeApiProvider, decode_cards};
use pokepairs::{Error, GameConfig, Result};

use super::board::{CONTENT_MARGIN, build_board_grid, refresh_cell};
use super::dialogs::show_error_dialog;
use super::hud::{lives_text, show_game_over, update_lives_label};
use super::selector::{Selector, build_selector_window};
use super::state::AppState;
use super::textures::decode_texture;

const APP_ID: &str = "io.github.pokepairs.PokePairs";
const WINDOW_TITLE: &str = "Pokémon Card Matching Game";

const STYLE: &str = "
.pokepairs-card { padding: 0; font-size: 18px; font-weight: bold; }
.pokepairs-card.revealed { background: alpha(@accent_bg_color, 0.12); }
.pokepairs-card.filler { background: none; box-shadow: none; }
.game-status { font-weight: bold; }
";

pub fn run() -> glib::ExitCode {
    glib::set_prgname(Some(APP_ID));
    let app = adw::Application::builder()
        .application_id(APP_ID)
        .build();

    app.connect_activate(move |app| {
        if let Some(window) = app.active_window() {
            window.present();
            return;
        }
        load_css();

        let config = GameConfig::from_env();
        let selector = build_selector_window(app, {
            let app = app.clone();
            move |selector, difficulty| start_game(&app, selector, &config, difficulty)
        });
        selector.window.present();
    });

    app.run()
}

fn load_css() {
    let Some(display) = gdk::Display::default() else {
        return;
    };
    let provider = gtk::CssProvider::new();
    provider.load_from_data(STYLE);
    gtk::style_context_add_provider_for_display(
        &display,
        &provider,
        gtk::STYLE_PROVIDER_PRIORITY_APPLICATION,
    );
}

fn start_game(app: &adw::Application, selector: &Selector, config: &GameConfig, difficulty: Difficulty) {
    tracing::info!(difficulty = difficulty.name(), "difficulty selected");
    selector.show_loading(difficulty);

    let app = app.clone();
    let selector = selector.clone();
    let config = config.clone();
    glib::spawn_future_local(async move {
        match load_grid(&config, difficulty).await {
            Ok(grid) => {
                let window = build_game_window(&app, grid, &config, difficulty);
                window.present();
                selector.window.close();
            }
            Err(err) => {
                tracing::error!(%err, "could not start game");
                show_error_dialog(&app, &err);
            }
        }
    });
}

/// Downloads the cards off the main loop, then decodes and shuffles them here.
async fn load_grid(config: &GameConfig, difficulty: Difficulty) -> Result<Grid<gdk::Texture>> {
    let count = difficulty.pair_count();
    let provider = PokeApiProvider::new(config);
    let raw = gio::spawn_blocking(move || provider.fetch_cards(count))
        .await
        .map_err(|_| Error::Worker("card download panicked".to_string()))??;
    tracing::info!(count = raw.len(), "cards downloaded");

    let image_size = config.image_size;
    let cards = decode_cards(raw, |label, bytes| decode_texture(label, bytes, image_size))?;
    let side = difficulty.side();
    Grid::build(cards, side, side, &mut rand::rng())
}

fn build_game_window(
    app: &adw::Application,
    grid: Grid<gdk::Texture>,
    config: &GameConfig,
    difficulty: Difficulty,
) -> adw::ApplicationWindow {
    let session = Session::new(grid, config.max_tries);
    let state = Rc::new(RefCell::new(AppState::new(session, config.clone())));

    let lives_label = gtk::Label::new(Some(&lives_text(config.max_tries)));
    lives_label.set_halign(gtk::Align::Center);

    let board = build_board_grid(&state);

    let status_label = gtk::Label::new(None);
    status_label.add_css_class("game-status");
    status_label.set_halign(gtk::Align::Center);
    status_label.set_visible(false);

    let content = gtk::Box::new(gtk::Orientation::Vertical, 6);
    content.set_valign(gtk::Align::Center);
    content.set_margin_top(CONTENT_MARGIN);
    content.set_margin_bottom(CONTENT_MARGIN);
    content.set_margin_start(CONTENT_MARGIN);
    content.set_margin_end(CONTENT_MARGIN);
    content.append(&lives_label);
    content.append(&board);
    content.append(&status_label);

    let header = adw::HeaderBar::new();
    header.add_css_class("flat");

    let toolbar = adw::ToolbarView::new();
    toolbar.add_top_bar(&header);
    toolbar.set_content(Some(&content));

    {
        let mut st = state.borrow_mut();
        st.lives_label = Some(lives_label);
        st.status_label = Some(status_label);
        update_lives_label(&st);
    }

    let (width, height) = config.window_size(difficulty.side() as i32);
    adw::ApplicationWindow::builder()
        .application(app)
        .title(WINDOW_TITLE)
        .default_width(width)
        .default_height(height)
        .content(&toolbar)
        .build()
}

pub fn handle_cell_click(state: &Rc<RefCell<AppState>>, pos: Position) {
    let mut st = state.borrow_mut();
    let outcome = st.session.click(pos);

    match outcome {
        ClickOutcome::Ignored => {}
        ClickOutcome::FirstRevealed(pos) => refresh_cell(&st, pos),
        ClickOutcome::Matched { second, won, .. } => {
            refresh_cell(&st, second);
            if won {
                show_game_over(&st, GameOutcome::Won);
            }
        }
        ClickOutcome::Mismatched {
            first,
            second,
            lost,
        } => {
            refresh_cell(&st, second);
            update_lives_label(&st);
            if lost {
                show_game_over(&st, GameOutcome::Lost);
            }
            let delay = st.config.mismatch_delay;
            drop(st);
            schedule_mismatch_reset(state, first, second, delay);
        }
    }
}

/// Queues the two one-shot callbacks that follow a mismatch: turning the
/// pair face down and accepting input again.
fn schedule_mismatch_reset(
    state: &Rc<RefCell<AppState>>,
    first: Position,
    second: Position,
    delay: Duration,
) {
    let state_hide = state.clone();
    glib::timeout_add_local(delay, move || {
        let mut st = state_hide.borrow_mut();
        st.session.hide_pair(first, second);
        refresh_cell(&st, first);
        refresh_cell(&st, second);
        glib::ControlFlow::Break
    });

    let state_unblock = state.clone();
    glib::timeout_add_local(delay, move || {
        state_unblock.borrow_mut().session.unblock_input();
        glib::ControlFlow::Break
    });
}
