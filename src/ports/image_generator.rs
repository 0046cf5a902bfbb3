//! Image generation API port definition.

use crate::domain::{AppError, InlineImage};

/// Smallest valid PNG (1x1 transparent pixel), returned in mock mode.
const MOCK_POSTER_PNG: &str =
    "iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAYAAAAfFcSJAAAADUlEQVR42mNkYPhfDwAChwGA60e6kgAAAABJRU5ErkJggg==";

/// Request to render one poster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    /// Final prompt text, sent verbatim.
    pub prompt: String,
    /// Optional reference photo of the traveler.
    pub reference_image: Option<InlineImage>,
}

/// Port for image generation.
pub trait ImageGenerator {
    /// Render a poster for the request.
    fn generate(&self, request: GenerationRequest) -> Result<InlineImage, AppError>;
}

/// Creates generators on demand so that credential lookup happens per attempt.
pub trait ImageGeneratorFactory {
    fn create(&self) -> Result<Box<dyn ImageGenerator>, AppError>;
}

/// Mock generator for running without API calls.
#[derive(Debug, Clone, Default)]
pub struct MockImageGenerator;

impl ImageGenerator for MockImageGenerator {
    fn generate(&self, request: GenerationRequest) -> Result<InlineImage, AppError> {
        println!("=== MOCK MODE ===");
        println!("Would send to the image API:");
        println!("  Prompt length: {} chars", request.prompt.chars().count());
        match &request.reference_image {
            Some(image) => println!("  Reference image: {}", image.mime_type()),
            None => println!("  Reference image: none"),
        }

        Ok(InlineImage::new("image/png", MOCK_POSTER_PNG))
    }
}

impl ImageGeneratorFactory for MockImageGenerator {
    fn create(&self) -> Result<Box<dyn ImageGenerator>, AppError> {
        Ok(Box::new(self.clone()))
    }
}
