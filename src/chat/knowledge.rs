//! Knowledge base types and lookup.
//!
//! Keys are lowercase free-text fragments; a key matches when it occurs
//! anywhere in the normalized message. There is no tokenization or ranking.

use serde::Serialize;

use super::knowledge_data::{CATEGORIES, DEFAULT_QUESTIONS};

/// A question key and its possible answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct KnowledgeEntry {
    pub key: &'static str,
    pub answers: &'static [&'static str],
}

/// A named group of entries sharing a set of reflective questions.
#[derive(Debug, Serialize)]
pub struct Category {
    pub id: &'static str,
    pub entries: &'static [KnowledgeEntry],
    pub reflective_questions: &'static [&'static str],
}

impl Category {
    /// Reflective questions to pair with this category's answers.
    pub fn questions(&self) -> &'static [&'static str] {
        if self.reflective_questions.is_empty() {
            DEFAULT_QUESTIONS
        } else {
            self.reflective_questions
        }
    }
}

/// An ordered, read-only set of categories.
#[derive(Debug, Clone, Copy)]
pub struct KnowledgeBase {
    categories: &'static [Category],
}

static BUILTIN: KnowledgeBase = KnowledgeBase::new(CATEGORIES);

impl KnowledgeBase {
    pub const fn new(categories: &'static [Category]) -> Self {
        Self { categories }
    }

    /// The industry knowledge base shipped with the site.
    pub fn builtin() -> &'static KnowledgeBase {
        &BUILTIN
    }

    pub fn categories(&self) -> &'static [Category] {
        self.categories
    }

    /// Look up a category by id.
    pub fn category(&self, id: &str) -> Option<&'static Category> {
        self.categories.iter().find(|category| category.id == id)
    }

    /// Every entry paired with its category, in table order.
    pub fn entries(&self) -> impl Iterator<Item = (&'static Category, &'static KnowledgeEntry)> {
        let categories = self.categories;
        categories
            .iter()
            .flat_map(|category| category.entries.iter().map(move |entry| (category, entry)))
    }

    /// First entry whose key occurs in `normalized`.
    pub fn find(&self, normalized: &str) -> Option<(&'static Category, &'static KnowledgeEntry)> {
        self.entries()
            .find(|(_, entry)| normalized.contains(entry.key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_builtin_table_shape() {
        let kb = KnowledgeBase::builtin();
        assert_eq!(kb.categories().len(), 10);
        assert_eq!(kb.categories()[0].id, "industria_geral");
        assert_eq!(kb.categories()[9].id, "questoes_finais");
        for (category, entry) in kb.entries() {
            assert!(!entry.answers.is_empty(), "{} / {}", category.id, entry.key);
            assert_eq!(entry.key, entry.key.to_lowercase());
        }
    }

    #[test]
    fn test_category_ids_are_unique() {
        let kb = KnowledgeBase::builtin();
        let ids: HashSet<_> = kb.categories().iter().map(|c| c.id).collect();
        assert_eq!(ids.len(), kb.categories().len());
    }

    #[test]
    fn test_find_returns_first_match_in_table_order() {
        let kb = KnowledgeBase::builtin();
        let (category, entry) = kb.find("o que é uma indústria").unwrap();
        assert_eq!(category.id, "industria_geral");
        assert_eq!(entry.key, "o que é uma indústria");

        // Contains both "o que é indústria 4.0" and "quais são os pilares da indústria 4.0".
        let (category, entry) = kb
            .find("quais são os pilares da indústria 4.0? o que é indústria 4.0")
            .unwrap();
        assert_eq!(category.id, "industria_4_0");
        assert_eq!(entry.key, "o que é indústria 4.0");
    }

    #[test]
    fn test_find_misses_unrelated_text() {
        assert!(KnowledgeBase::builtin().find("xyz não relacionado").is_none());
    }

    #[test]
    fn test_category_without_questions_uses_defaults() {
        static EMPTY: Category = Category {
            id: "sem_perguntas",
            entries: &[],
            reflective_questions: &[],
        };
        assert_eq!(EMPTY.questions(), DEFAULT_QUESTIONS);
        let kb = KnowledgeBase::builtin();
        assert_eq!(
            kb.category("industria_4_0").unwrap().questions().len(),
            2
        );
    }
}
