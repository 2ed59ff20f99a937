use libadwaita as adw;

use adw::prelude::*;

use pokepairs::Error;

/// Tells the player the game cannot start. Any response quits.
pub fn show_error_dialog(app: &adw::Application, error: &Error) -> adw::AlertDialog {
    let dialog = adw::AlertDialog::new(
        Some("Could not start the game"),
        Some(&format!("The cards could not be loaded.\n{error}")),
    );
    dialog.add_response("quit", "Quit");
    dialog.set_default_response(Some("quit"));
    dialog.set_close_response("quit");
    dialog.connect_response(None, {
        let app = app.clone();
        move |_, _| app.quit()
    });
    dialog.present(app.active_window().as_ref());
    dialog
}
