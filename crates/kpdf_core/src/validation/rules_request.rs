use crate::models::lenient::non_empty;
use crate::models::request::RequestPayload;
use crate::validation::{ValidationError, ValidationRule};

// =========================================================================
// RULE: KPDF-REQ-TITLE
// "A request must name the document being asked for"
// Category fields on requests are deliberately left unchecked.
// =========================================================================
pub struct RequestedTitleRule;

impl ValidationRule<RequestPayload> for RequestedTitleRule {
    fn rule_id(&self) -> &str { "KPDF-REQ-TITLE" }

    fn check(&self, payload: &RequestPayload) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        if non_empty(&payload.requested_title).is_none() {
            errors.push(ValidationError::new(
                self.rule_id(),
                "requested_title",
                "requested_title required",
            ));
        }
        errors
    }
}
