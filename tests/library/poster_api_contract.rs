use chrono::NaiveDate;
use tempfile::TempDir;
use travelcine::{
    AppError, AutoApprove, GenerateOptions, GenerateOutcome, LocationEntry, PosterRequest,
    PromptReviewer, ReviewDecision, TravelcineHome, generate_at, prompt_at, template_edit_at,
    template_reset_at, template_show_at,
};

fn request() -> PosterRequest {
    let date = |m, d| NaiveDate::from_ymd_opt(2025, m, d).unwrap();
    PosterRequest::new(
        "Across the Alps",
        "Across the Alps",
        vec![
            LocationEntry::new("Zermatt", date(8, 20)),
            LocationEntry::new("Chamonix", date(8, 17)),
            LocationEntry::new("Courmayeur", date(9, 1)),
        ],
    )
    .unwrap()
}

/// Revises the prompt once, then approves.
struct ReviseOnce {
    reviewed: Vec<String>,
}

impl PromptReviewer for ReviseOnce {
    fn review(&mut self, prompt: &str) -> Result<ReviewDecision, AppError> {
        self.reviewed.push(prompt.to_string());
        if self.reviewed.len() == 1 {
            Ok(ReviewDecision::Revise(format!("{prompt} at dusk")))
        } else {
            Ok(ReviewDecision::Generate)
        }
    }

    fn retry(&mut self, _message: &str) -> Result<bool, AppError> {
        Ok(false)
    }
}

#[test]
fn public_api_template_and_prompt_contract() {
    let temp = TempDir::new().unwrap();
    let home = TravelcineHome::new(temp.path());

    template_edit_at(&home, "123", "{{title}} / {{dateRange}}".to_string()).unwrap();
    assert_eq!(template_show_at(&home, "123").unwrap(), "{{title}} / {{dateRange}}");

    let prompt = prompt_at(&home, request()).unwrap();
    assert_eq!(prompt, "Across the Alps / 2025.08.17 – 2025.09.01");

    let restored = template_reset_at(&home, "123").unwrap();
    assert!(restored.contains("{{loc1_name}}"));
    assert!(matches!(template_show_at(&home, "000"), Err(AppError::AccessDenied)));
}

#[test]
fn public_api_generate_mock_contract() {
    let temp = TempDir::new().unwrap();
    let home = TravelcineHome::new(temp.path().join("home"));
    let options = GenerateOptions {
        output_dir: Some(temp.path().join("posters")),
        ..Default::default()
    };

    let mut reviewer = ReviseOnce { reviewed: Vec::new() };
    let outcome = generate_at(&home, request(), &options, &mut reviewer, true).unwrap();

    let GenerateOutcome::Saved { path, prompt } = outcome else {
        panic!("expected saved poster");
    };
    assert!(path.exists());
    assert!(prompt.ends_with(" at dusk"));
    assert_eq!(reviewer.reviewed.len(), 2);

    let outcome = generate_at(&home, request(), &options, &mut AutoApprove, true).unwrap();
    assert!(matches!(outcome, GenerateOutcome::Saved { .. }));
}
