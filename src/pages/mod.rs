pub mod console_page;
pub mod settings_page;
