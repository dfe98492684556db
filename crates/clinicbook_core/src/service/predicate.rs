//! Person filter predicates.

use crate::model::person::Person;

/// Active filter over persons. Accepts a person when it returns `true`.
pub type PersonPredicate = Box<dyn Fn(&Person) -> bool>;

/// Predicate accepting every person.
pub fn show_all() -> PersonPredicate {
    Box::new(|_: &Person| true)
}

/// Matches persons whose name contains any keyword as a whole word.
///
/// Matching is case-insensitive; blank keywords are dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameContainsKeywords {
    keywords: Vec<String>,
}

impl NameContainsKeywords {
    pub fn new<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let keywords = keywords
            .into_iter()
            .map(|keyword| keyword.as_ref().trim().to_lowercase())
            .filter(|keyword| !keyword.is_empty())
            .collect();
        Self { keywords }
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    pub fn matches(&self, person: &Person) -> bool {
        let name = person.name().as_str().to_lowercase();
        name.split_whitespace()
            .any(|word| self.keywords.iter().any(|keyword| keyword == word))
    }

    pub fn into_predicate(self) -> PersonPredicate {
        Box::new(move |person: &Person| self.matches(person))
    }
}
