use crate::models::document::DocumentPayload;
use crate::models::lenient::non_empty;
use crate::taxonomy::{self, allowed_grades};
use crate::validation::{ValidationError, ValidationRule};

// =========================================================================
// RULE: KPDF-L1 / KPDF-L2 / KPDF-L4
// "Category value must be present and drawn from its enumeration"
// =========================================================================
pub struct CategoryMembershipRule {
    id: &'static str,
    field: &'static str,
    allowed: &'static [&'static str],
    value: fn(&DocumentPayload) -> &Option<String>,
}

impl CategoryMembershipRule {
    pub fn stage() -> Self {
        Self {
            id: "KPDF-L1",
            field: "category_l1",
            allowed: taxonomy::L1,
            value: stage_value,
        }
    }

    pub fn subject() -> Self {
        Self {
            id: "KPDF-L2",
            field: "category_l2",
            allowed: taxonomy::L2,
            value: subject_value,
        }
    }

    pub fn material() -> Self {
        Self {
            id: "KPDF-L4",
            field: "category_l4",
            allowed: taxonomy::L4,
            value: material_value,
        }
    }
}

fn stage_value(p: &DocumentPayload) -> &Option<String> { &p.category_l1 }
fn subject_value(p: &DocumentPayload) -> &Option<String> { &p.category_l2 }
fn material_value(p: &DocumentPayload) -> &Option<String> { &p.category_l4 }

impl ValidationRule<DocumentPayload> for CategoryMembershipRule {
    fn rule_id(&self) -> &str { self.id }

    fn check(&self, payload: &DocumentPayload) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        let ok = non_empty((self.value)(payload))
            .is_some_and(|v| self.allowed.iter().any(|a| *a == v));
        if !ok {
            errors.push(ValidationError::new(
                self.id,
                self.field,
                format!("Invalid {}", self.field),
            ));
        }
        errors
    }
}

// =========================================================================
// RULE: KPDF-TITLE
// "main_title must contain something other than whitespace"
// =========================================================================
pub struct MainTitleRule;

impl ValidationRule<DocumentPayload> for MainTitleRule {
    fn rule_id(&self) -> &str { "KPDF-TITLE" }

    fn check(&self, payload: &DocumentPayload) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        let blank = payload.main_title.as_deref().map_or(true, |t| t.trim().is_empty());
        if blank {
            errors.push(ValidationError::new(self.rule_id(), "main_title", "main_title required"));
        }
        errors
    }
}

// =========================================================================
// RULE: KPDF-URL
// "pdf_url is required and must point at a .pdf or .hwp file"
// =========================================================================
pub struct FileUrlRule;

pub const ACCEPTED_EXTENSIONS: [&str; 2] = [".pdf", ".hwp"];

impl ValidationRule<DocumentPayload> for FileUrlRule {
    fn rule_id(&self) -> &str { "KPDF-URL" }

    fn check(&self, payload: &DocumentPayload) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        match non_empty(&payload.pdf_url) {
            None => {
                errors.push(ValidationError::new(self.rule_id(), "pdf_url", "pdf_url required"));
            }
            Some(url) => {
                let lower = url.to_lowercase();
                if !ACCEPTED_EXTENSIONS.iter().any(|ext| lower.ends_with(ext)) {
                    errors.push(ValidationError::new(
                        self.rule_id(),
                        "pdf_url",
                        "pdf_url must end with .pdf or .hwp",
                    ));
                }
            }
        }
        errors
    }
}

// =========================================================================
// RULE: KPDF-L3
// "Grade must belong to the track selected by the education stage"
// An unrecognized stage accepts grades from either track.
// =========================================================================
pub struct GradeForTrackRule;

impl ValidationRule<DocumentPayload> for GradeForTrackRule {
    fn rule_id(&self) -> &str { "KPDF-L3" }

    fn check(&self, payload: &DocumentPayload) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        match non_empty(&payload.category_l3) {
            None => {
                errors.push(ValidationError::new(
                    self.rule_id(),
                    "category_l3",
                    "category_l3 required",
                ));
            }
            Some(grade) => {
                let allowed = allowed_grades(non_empty(&payload.category_l1));
                if !allowed.iter().any(|g| *g == grade) {
                    errors.push(ValidationError::new(
                        self.rule_id(),
                        "category_l3",
                        "Invalid category_l3 for selected category_l1",
                    ));
                }
            }
        }
        errors
    }
}
