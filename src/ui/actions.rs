//! GTK action setup and export file-save flow
//!
//! Contains the application-level quit action and the file-save dialog
//! used by the export buttons. The dialog call is asynchronous: control
//! returns immediately and the write happens in the completion callback.

use gtk4::{gio, prelude::*, Application, ApplicationWindow, FileDialog};
use std::rc::Rc;

use crate::export::ExportFormat;
use crate::ui::Controller;

/// Sets up the quit action
///
/// Creates a GTK action that quits the application when triggered.
pub fn setup_quit_action(app: &Application) {
    let quit_action = gio::SimpleAction::new("quit", None);
    let app_for_quit = app.clone();

    quit_action.connect_activate(move |_, _| {
        app_for_quit.quit();
    });

    app.add_action(&quit_action);
}

/// Opens a save dialog and exports the currently filtered set
///
/// The suggested filename follows the format (`shortcuts.csv` /
/// `shortcuts.json`). Cancelling the dialog is not an error; a failed
/// write is logged and reported by the caller-provided callback.
pub fn save_export(
    window: &ApplicationWindow,
    controller: Rc<Controller>,
    format: ExportFormat,
    on_done: impl Fn(Result<(), String>) + 'static,
) {
    eprintln!("💾 Export clicked ({:?})", format);

    let file_dialog = FileDialog::builder()
        .title("Export Shortcuts")
        .initial_name(format.suggested_filename())
        .build();

    let controller_clone = controller.clone();
    let window_clone = window.clone();

    file_dialog.save(Some(&window_clone), None::<&gio::Cancellable>, move |result| {
        match result {
            Ok(file) => {
                let Some(path) = file.path() else {
                    on_done(Err("Selected location has no local path".to_string()));
                    return;
                };
                eprintln!("💾 Exporting to: {:?}", path);

                match controller_clone.export_filtered_to(&path, format) {
                    Ok(()) => {
                        eprintln!("✅ Export successful!");
                        on_done(Ok(()));
                    }
                    Err(e) => {
                        eprintln!("❌ Export failed: {}", e);
                        on_done(Err(e.to_string()));
                    }
                }
            }
            Err(_) => eprintln!("🚫 Export cancelled"),
        }
    });
}
