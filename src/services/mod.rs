mod clipboard_arboard;
mod gemini_client_http;
mod image_files;
mod template_store_filesystem;
mod travelcine_home;

pub use clipboard_arboard::ArboardClipboard;
pub use gemini_client_http::{API_KEY_ENV, GeminiClientFactory, HttpGeminiClient};
pub use image_files::{load_reference_image, save_poster};
pub use template_store_filesystem::{FilesystemTemplateStore, TEMPLATE_KEY};
pub use travelcine_home::{HOME_ENV, TravelcineHome};
