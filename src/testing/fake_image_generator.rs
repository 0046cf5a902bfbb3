use std::sync::{Arc, Mutex};

use crate::domain::{AppError, InlineImage};
use crate::ports::{GenerationRequest, ImageGenerator, ImageGeneratorFactory};

#[derive(Clone, Copy)]
enum Behavior {
    Succeed,
    Fail,
    FailFirst(usize),
    Unavailable,
}

/// Records every generation request and answers with a canned outcome.
#[derive(Clone)]
pub struct FakeImageGenerator {
    behavior: Behavior,
    requests: Arc<Mutex<Vec<GenerationRequest>>>,
}

impl FakeImageGenerator {
    fn with_behavior(behavior: Behavior) -> Self {
        Self { behavior, requests: Arc::new(Mutex::new(vec![])) }
    }

    pub fn succeeding() -> Self {
        Self::with_behavior(Behavior::Succeed)
    }

    pub fn failing() -> Self {
        Self::with_behavior(Behavior::Fail)
    }

    /// Fails the first `attempts` calls, then succeeds.
    pub fn failing_first(attempts: usize) -> Self {
        Self::with_behavior(Behavior::FailFirst(attempts))
    }

    /// Factory that cannot build a client, as with a missing API key.
    pub fn unavailable() -> Self {
        Self::with_behavior(Behavior::Unavailable)
    }

    pub fn requests(&self) -> Vec<GenerationRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn calls(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

impl ImageGenerator for FakeImageGenerator {
    fn generate(&self, request: GenerationRequest) -> Result<InlineImage, AppError> {
        let mut requests = self.requests.lock().unwrap();
        requests.push(request);
        let attempt = requests.len();
        match self.behavior {
            Behavior::Succeed => Ok(InlineImage::from_bytes("image/png", b"fake-poster")),
            Behavior::FailFirst(failures) if attempt > failures => {
                Ok(InlineImage::from_bytes("image/png", b"fake-poster"))
            }
            _ => Err(AppError::Api { status: 500, details: "fake upstream failure".to_string() }),
        }
    }
}

impl ImageGeneratorFactory for FakeImageGenerator {
    fn create(&self) -> Result<Box<dyn ImageGenerator>, AppError> {
        match self.behavior {
            Behavior::Unavailable => {
                Err(AppError::Configuration("GEMINI_API_KEY environment variable not set".into()))
            }
            _ => Ok(Box::new(self.clone())),
        }
    }
}
