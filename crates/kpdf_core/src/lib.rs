pub mod filter;
pub mod models;
pub mod taxonomy;
pub mod validation;

use models::document::DocumentPayload;
use models::request::RequestPayload;
use validation::{rules, rules_request, ValidationEngine};

/// The curated-catalog validator. Rule order fixes the order of messages.
pub fn get_standard_validator() -> ValidationEngine<DocumentPayload> {
    ValidationEngine::new()
        .add_rule(rules::CategoryMembershipRule::stage())
        .add_rule(rules::CategoryMembershipRule::subject())
        .add_rule(rules::CategoryMembershipRule::material())
        .add_rule(rules::MainTitleRule)
        .add_rule(rules::FileUrlRule)
        .add_rule(rules::GradeForTrackRule)
}

/// Visitor requests only need a title.
pub fn get_request_validator() -> ValidationEngine<RequestPayload> {
    ValidationEngine::new().add_rule(rules_request::RequestedTitleRule)
}
