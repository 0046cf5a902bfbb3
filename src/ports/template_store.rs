use crate::domain::AppError;

/// Port for persisting the user-edited prompt template.
pub trait TemplateStore {
    /// Load the saved template, if any.
    fn load(&self) -> Result<Option<String>, AppError>;

    /// Persist the template, replacing any previous value.
    fn save(&self, template: &str) -> Result<(), AppError>;
}
