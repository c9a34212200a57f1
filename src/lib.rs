//! walletdesk
//!
//! Desktop client shell for the wallet platform: wires configuration,
//! tracing, and the registration flow into the Tauri runtime.

use std::sync::Arc;

use tauri::Manager;
use tracing::error;
use wd_tauri::bootstrap;

/// Build and run the Tauri application.
pub fn run() {
    if let Err(err) = bootstrap::init_tracing_subscriber() {
        eprintln!("failed to initialize tracing: {err}");
    }

    let config = bootstrap::resolve_config();

    tauri::Builder::default()
        .setup(move |app| {
            let runtime =
                bootstrap::AppRuntime::initialize(&config, app.handle().clone()).map_err(|err| {
                    error!(error = %err, "failed to initialize application runtime");
                    err
                })?;
            app.manage(Arc::new(runtime));
            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            wd_tauri::commands::registration::open_registration,
            wd_tauri::commands::registration::update_registration_field,
            wd_tauri::commands::registration::submit_registration,
            wd_tauri::commands::registration::close_registration,
            wd_tauri::commands::registration::get_registration_state,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
