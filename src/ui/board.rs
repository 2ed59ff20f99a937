use std::cell::RefCell;
use std::rc::Rc;

use gtk4 as gtk;
use gtk4::gdk;
use gtk4::prelude::*;

use pokepairs::game::Position;

use super::app::handle_cell_click;
use super::state::AppState;

pub const CONTENT_MARGIN: i32 = 12;
pub const TILE_GAP: i32 = 5;
/// Glyph shown on a face-down card.
pub const CARD_BACK: &str = "*";

pub fn build_board_grid(state: &Rc<RefCell<AppState>>) -> gtk::Grid {
    let grid = gtk::Grid::new();
    grid.add_css_class("pokepairs-board");
    grid.set_row_spacing(TILE_GAP as u32);
    grid.set_column_spacing(TILE_GAP as u32);
    grid.set_halign(gtk::Align::Center);
    grid.set_valign(gtk::Align::Center);

    let (positions, fillers, (cell_width, cell_height)) = {
        let st = state.borrow();
        let board = st.session.grid();
        let positions: Vec<Position> = board.positions().collect();
        let fillers: Vec<bool> = positions.iter().map(|&p| board.is_filler(p)).collect();
        (positions, fillers, st.config.cell_size())
    };

    let mut buttons = Vec::with_capacity(positions.len());

    for (pos, is_filler) in positions.into_iter().zip(fillers) {
        let button = gtk::Button::builder()
            .css_classes(vec!["pokepairs-card"])
            .build();
        button.set_size_request(cell_width, cell_height);

        if is_filler {
            button.add_css_class("filler");
            button.set_sensitive(false);
        } else {
            button.set_label(CARD_BACK);
            let state_clone = state.clone();
            button.connect_clicked(move |_| {
                handle_cell_click(&state_clone, pos);
            });
        }

        let (row, col) = pos;
        grid.attach(&button, col as i32, row as i32, 1, 1);
        buttons.push(button);
    }

    state.borrow_mut().grid_buttons = buttons;

    grid
}

pub(super) fn show_card_face(button: &gtk::Button, texture: &gdk::Texture, image_size: i32) {
    let image = gtk::Image::from_paintable(Some(texture));
    image.set_pixel_size(image_size);
    button.set_child(Some(&image));
    button.add_css_class("revealed");
}

pub(super) fn show_card_back(button: &gtk::Button) {
    button.remove_css_class("revealed");
    button.set_label(CARD_BACK);
}

/// Renders the cell at `pos` the way the session currently sees it.
pub(super) fn refresh_cell(st: &AppState, pos: Position) {
    let Some(button) = st.button_at(pos) else {
        return;
    };
    match st.session.grid().card(pos) {
        Some(card) if st.session.is_revealed(pos) => {
            show_card_face(button, &card.image, st.config.image_size);
        }
        Some(_) => show_card_back(button),
        None => (),
    }
}
