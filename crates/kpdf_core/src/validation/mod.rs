use serde::Serialize;

pub mod rules;
pub mod rules_request;

// The structure of a failure
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct ValidationError {
    pub code: String,    // e.g., "KPDF-L3"
    pub field: String,   // payload field the rule inspected
    pub message: String, // "Invalid category_l3 for selected category_l1"
}

impl ValidationError {
    pub fn new(code: &str, field: &str, message: impl Into<String>) -> Self {
        Self {
            code: code.to_string(),
            field: field.to_string(),
            message: message.into(),
        }
    }
}

// The contract every rule must fulfill
pub trait ValidationRule<T> {
    fn check(&self, payload: &T) -> Vec<ValidationError>;
    fn rule_id(&self) -> &str;
}

// The Engine that holds the registry of all rules.
// Rules run independently; failures accumulate instead of short-circuiting.
pub struct ValidationEngine<T> {
    rules: Vec<Box<dyn ValidationRule<T> + Send + Sync>>,
}

impl<T> ValidationEngine<T> {
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    pub fn add_rule<R: ValidationRule<T> + Send + Sync + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    pub fn run(&self, payload: &T) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        for rule in &self.rules {
            let mut rule_errors = rule.check(payload);
            errors.append(&mut rule_errors);
        }
        errors
    }

    /// The human-readable messages only, as returned to API clients.
    pub fn messages(&self, payload: &T) -> Vec<String> {
        self.run(payload).into_iter().map(|e| e.message).collect()
    }
}

impl<T> Default for ValidationEngine<T> {
    fn default() -> Self {
        Self::new()
    }
}
