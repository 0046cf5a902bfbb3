mod fake_image_generator;
mod memory_template_store;
mod mock_clipboard;
mod scripted_reviewer;

pub use fake_image_generator::FakeImageGenerator;
pub use memory_template_store::MemoryTemplateStore;
pub use mock_clipboard::MockClipboard;
pub use scripted_reviewer::ScriptedReviewer;
