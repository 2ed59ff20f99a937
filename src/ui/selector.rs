use std::cell::Cell;
use std::rc::Rc;

use gtk4 as gtk;
use gtk4::prelude::*;
use libadwaita as adw;
use adw::prelude::*;

use pokepairs::game::{DIFFICULTY_OPTIONS, Difficulty};

const PAGE_CHOICES: &str = "choices";
const PAGE_LOADING: &str = "loading";

/// The small window shown at launch. It offers the three board sizes and,
/// once one is picked, turns into a loading indicator until the board is ready.
#[derive(Clone)]
pub struct Selector {
    pub window: adw::ApplicationWindow,
    stack: gtk::Stack,
    loading_label: gtk::Label,
    chosen: Rc<Cell<Option<Difficulty>>>,
}

impl Selector {
    pub fn show_loading(&self, difficulty: Difficulty) {
        self.loading_label
            .set_text(&format!("Fetching {} cards…", difficulty.pair_count()));
        self.stack.set_visible_child_name(PAGE_LOADING);
        self.window.set_deletable(false);
    }
}

fn add_choice_row(content: &gtk::Box, label: &str, on_select: impl Fn() + 'static) {
    let button = gtk::Button::with_label(label);
    button.set_hexpand(true);
    button.set_size_request(-1, 42);
    button.add_css_class("choice-button");
    button.connect_clicked(move |_| on_select());
    content.append(&button);
}

pub fn build_selector_window(
    app: &adw::Application,
    on_select: impl Fn(&Selector, Difficulty) + 'static,
) -> Selector {
    let title = gtk::Label::new(Some("Select Difficulty"));
    title.add_css_class("dialog-header-title");
    title.set_halign(gtk::Align::Center);

    let header = adw::HeaderBar::new();
    header.set_title_widget(Some(&title));
    header.add_css_class("flat");

    let content = gtk::Box::new(gtk::Orientation::Vertical, 10);
    content.set_margin_top(16);
    content.set_margin_bottom(16);
    content.set_margin_start(16);
    content.set_margin_end(16);

    let loading = gtk::Box::new(gtk::Orientation::Vertical, 12);
    loading.set_valign(gtk::Align::Center);
    loading.set_margin_top(16);
    loading.set_margin_bottom(16);
    let spinner = adw::Spinner::new();
    spinner.set_size_request(32, 32);
    let loading_label = gtk::Label::new(None);
    loading_label.add_css_class("dim-label");
    loading.append(&spinner);
    loading.append(&loading_label);

    let stack = gtk::Stack::new();
    stack.set_transition_type(gtk::StackTransitionType::Crossfade);
    stack.add_named(&content, Some(PAGE_CHOICES));
    stack.add_named(&loading, Some(PAGE_LOADING));
    stack.set_visible_child_name(PAGE_CHOICES);

    let toolbar = adw::ToolbarView::new();
    toolbar.add_top_bar(&header);
    toolbar.set_content(Some(&stack));

    let window = adw::ApplicationWindow::builder()
        .application(app)
        .title("Select Difficulty")
        .default_width(280)
        .resizable(false)
        .content(&toolbar)
        .build();

    let selector = Selector {
        window,
        stack,
        loading_label,
        chosen: Rc::new(Cell::new(None)),
    };

    let on_select = Rc::new(on_select);
    for difficulty in DIFFICULTY_OPTIONS {
        add_choice_row(&content, &difficulty.label(), {
            let selector = selector.clone();
            let on_select = on_select.clone();
            move || {
                if selector.chosen.get().is_some() {
                    return;
                }
                selector.chosen.set(Some(difficulty));
                on_select(&selector, difficulty);
            }
        });
    }

    selector.window.connect_close_request({
        let chosen = selector.chosen.clone();
        move |_| {
            if chosen.get().is_none() {
                tracing::info!("difficulty selection dismissed, not starting a game");
            }
            gtk::glib::Propagation::Proceed
        }
    });

    selector
}
