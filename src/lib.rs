pub mod commands;
pub mod models;
pub mod paces;
pub mod plan;

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
  tauri::Builder::default()
    .plugin(tauri_plugin_opener::init())
    .invoke_handler(tauri::generate_handler![
      commands::schedule::default_plan_request,
      commands::schedule::calculate_paces,
      commands::schedule::generate_schedule,
    ])
    .run(tauri::generate_context!())
    .expect("error while running tauri application");
}
