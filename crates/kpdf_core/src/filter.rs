use serde::Deserialize;

use crate::models::document::Document;
use crate::models::lenient::non_empty;

/// Query over the document catalog. Every populated field must match;
/// empty strings count as "not supplied".
#[derive(Debug, Deserialize, Default, Clone)]
pub struct DocumentFilter {
    pub l1: Option<String>,
    pub l2: Option<String>,
    pub l3: Option<String>,
    pub l4: Option<String>,
    pub q: Option<String>,
}

impl DocumentFilter {
    pub fn is_empty(&self) -> bool {
        [&self.l1, &self.l2, &self.l3, &self.l4, &self.q]
            .into_iter()
            .all(|v| non_empty(v).is_none())
    }

    pub fn matches(&self, doc: &Document) -> bool {
        let categories = [
            (&self.l1, &doc.category_l1),
            (&self.l2, &doc.category_l2),
            (&self.l3, &doc.category_l3),
            (&self.l4, &doc.category_l4),
        ];
        if categories
            .iter()
            .any(|(wanted, actual)| non_empty(wanted).is_some_and(|w| w != actual.as_str()))
        {
            return false;
        }

        match non_empty(&self.q) {
            Some(q) => {
                let needle = q.to_lowercase();
                doc.main_title.to_lowercase().contains(&needle)
                    || doc.subtitle.to_lowercase().contains(&needle)
            }
            None => true,
        }
    }

    /// Keeps the catalog order (newest first).
    pub fn apply(&self, docs: Vec<Document>) -> Vec<Document> {
        if self.is_empty() {
            return docs;
        }
        docs.into_iter().filter(|d| self.matches(d)).collect()
    }
}
