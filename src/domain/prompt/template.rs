//! Token substitution for poster prompt templates.
//!
//! Substitution is literal: every occurrence of a recognized `{{token}}` is
//! replaced with the matching field of the request in a single left-to-right
//! pass, so substituted values are never scanned for tokens again. Unknown
//! tokens and stray braces are left as they are, and missing values become
//! empty strings.

use crate::domain::PosterRequest;
use crate::domain::date_range::format_date_range;

/// Recognized substitution tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptToken {
    Title,
    EnglishTitle,
    DateRange,
    LocationName(usize),
    LocationDate(usize),
}

impl PromptToken {
    pub const ALL: [PromptToken; 9] = [
        PromptToken::Title,
        PromptToken::EnglishTitle,
        PromptToken::DateRange,
        PromptToken::LocationName(0),
        PromptToken::LocationDate(0),
        PromptToken::LocationName(1),
        PromptToken::LocationDate(1),
        PromptToken::LocationName(2),
        PromptToken::LocationDate(2),
    ];

    /// Placeholder text as written in templates.
    pub fn placeholder(&self) -> &'static str {
        match self {
            PromptToken::Title => "{{title}}",
            PromptToken::EnglishTitle => "{{englishTitle}}",
            PromptToken::DateRange => "{{dateRange}}",
            PromptToken::LocationName(0) => "{{loc1_name}}",
            PromptToken::LocationDate(0) => "{{loc1_date}}",
            PromptToken::LocationName(1) => "{{loc2_name}}",
            PromptToken::LocationDate(1) => "{{loc2_date}}",
            PromptToken::LocationName(_) => "{{loc3_name}}",
            PromptToken::LocationDate(_) => "{{loc3_date}}",
        }
    }

    /// Short human description, shown next to the placeholder in the editor.
    pub fn description(&self) -> &'static str {
        match self {
            PromptToken::Title => "trip title",
            PromptToken::EnglishTitle => "English trip title",
            PromptToken::DateRange => "span from earliest to latest stop date",
            PromptToken::LocationName(_) => "stop name",
            PromptToken::LocationDate(_) => "stop date (YYYY-MM-DD)",
        }
    }

    fn value(&self, request: &PosterRequest) -> String {
        match self {
            PromptToken::Title => request.title.clone(),
            PromptToken::EnglishTitle => request.english_title.clone(),
            PromptToken::DateRange => format_date_range(request.dates()),
            PromptToken::LocationName(index) => {
                request.locations.get(*index).map(|l| l.name.clone()).unwrap_or_default()
            }
            PromptToken::LocationDate(index) => {
                request.locations.get(*index).map(|l| l.date_string()).unwrap_or_default()
            }
        }
    }
}

/// Render the final prompt for a request.
pub fn render_prompt(request: &PosterRequest, template: &str) -> String {
    let mut prompt = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(start) = rest.find("{{") {
        prompt.push_str(&rest[..start]);
        let candidate = &rest[start..];
        match PromptToken::ALL.iter().find(|token| candidate.starts_with(token.placeholder())) {
            Some(token) => {
                prompt.push_str(&token.value(request));
                rest = &candidate[token.placeholder().len()..];
            }
            None => {
                prompt.push('{');
                rest = &candidate[1..];
            }
        }
    }
    prompt.push_str(rest);
    prompt
}
