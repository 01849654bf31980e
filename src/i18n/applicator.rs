//! Applicator: rewrites tagged document text to match a language.

use crate::document::{Document, ElementId};
use crate::i18n::{Catalog, LanguageRegistry, TranslationKey};
use std::collections::BTreeSet;
use tracing::debug;

/// What to show when the current language has no string for a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FallbackPolicy {
    /// Leave the element's current text untouched.
    #[default]
    KeepExisting,
    /// Show the catalog default language's string instead.
    DefaultLanguage,
}

/// Translatable elements collected from a document, in document order.
#[derive(Debug, Clone, Default)]
pub struct TaggedElements {
    entries: Vec<(ElementId, TranslationKey)>,
}

impl TaggedElements {
    /// Collect every element carrying `marker_attribute`.
    pub fn collect(document: &Document, marker_attribute: &str) -> Self {
        let entries = document
            .elements_with_attribute(marker_attribute)
            .into_iter()
            .map(|(id, key)| (id, TranslationKey::from(key)))
            .collect();
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &(ElementId, TranslationKey)> {
        self.entries.iter()
    }

    /// Distinct keys referenced by the collected elements.
    pub fn keys(&self) -> BTreeSet<&TranslationKey> {
        self.entries.iter().map(|(_, key)| key).collect()
    }
}

/// Summary of one apply pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ApplyOutcome {
    /// Elements whose text was set from the catalog
    pub updated: usize,
    /// Elements left as they were because no string was found
    pub unchanged: usize,
    /// Registered elements missing from the document (removed after attach)
    pub missing: usize,
    /// Whether the selector button label was rewritten
    pub label_updated: bool,
}

#[derive(Debug, Clone)]
pub struct Applicator {
    fallback: FallbackPolicy,
    name_class: String,
}

impl Applicator {
    /// `name_class` is the class list put on the display-name span of the
    /// selector button (hides the name on narrow viewports).
    pub fn new(fallback: FallbackPolicy, name_class: impl Into<String>) -> Self {
        Self {
            fallback,
            name_class: name_class.into(),
        }
    }

    pub fn fallback(&self) -> FallbackPolicy {
        self.fallback
    }

    /// Rewrite every registered element and the selector label for `code`.
    pub fn apply(
        &self,
        document: &mut Document,
        elements: &TaggedElements,
        catalog: &Catalog,
        registry: &LanguageRegistry,
        button: Option<ElementId>,
        code: &str,
    ) -> ApplyOutcome {
        let mut outcome = ApplyOutcome::default();

        for (element, key) in elements.iter() {
            if !document.exists(*element) {
                outcome.missing += 1;
                continue;
            }

            match self.resolve(catalog, code, key.as_str()) {
                Some(text) => {
                    document.set_text(*element, text);
                    outcome.updated += 1;
                }
                None => outcome.unchanged += 1,
            }
        }

        if let Some(button) = button {
            outcome.label_updated = self.update_label(document, registry, button, code);
        }

        debug!(
            "Applied '{}': {} updated, {} unchanged, {} missing",
            code, outcome.updated, outcome.unchanged, outcome.missing
        );
        outcome
    }

    fn resolve<'a>(&self, catalog: &'a Catalog, code: &str, key: &str) -> Option<&'a str> {
        catalog.lookup(code, key).or_else(|| match self.fallback {
            FallbackPolicy::KeepExisting => None,
            FallbackPolicy::DefaultLanguage => catalog.lookup(catalog.default_language().as_str(), key),
        })
    }

    /// Set the button to "<glyph> <span>name</span>".
    fn update_label(
        &self,
        document: &mut Document,
        registry: &LanguageRegistry,
        button: ElementId,
        code: &str,
    ) -> bool {
        let Some(language) = registry.get_by_code(code) else {
            return false;
        };
        if !document.exists(button) {
            return false;
        }

        document.set_text(button, &format!("{} ", language.glyph));
        if let Some(name) = document.append_child(button, "span") {
            document.add_class_list(name, &self.name_class);
            document.set_text(name, language.native_name);
        }
        true
    }
}

impl Default for Applicator {
    fn default() -> Self {
        Self::new(FallbackPolicy::default(), "hidden md:inline")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixture {
        doc: Document,
        elements: TaggedElements,
        greet: ElementId,
        bye: ElementId,
        button: ElementId,
    }

    fn catalog() -> Catalog {
        Catalog::builder("en")
            .language("en", [("greet", "Hello"), ("bye", "Goodbye")])
            .language("es", [("greet", "Hola")])
            .build()
            .unwrap()
    }

    fn fixture() -> Fixture {
        let mut doc = Document::new();
        let root = doc.root();
        let greet = doc.append_child(root, "h1").unwrap();
        doc.set_attribute(greet, "data-i18n", "greet");
        doc.set_text(greet, "static greeting");
        let bye = doc.append_child(root, "p").unwrap();
        doc.set_attribute(bye, "data-i18n", "bye");
        doc.set_text(bye, "static farewell");
        let button = doc.append_child(root, "button").unwrap();

        let elements = TaggedElements::collect(&doc, "data-i18n");
        Fixture {
            doc,
            elements,
            greet,
            bye,
            button,
        }
    }

    // ==================== TaggedElements Tests ====================

    #[test]
    fn test_collect_tagged_elements() {
        let f = fixture();
        assert_eq!(f.elements.len(), 2);
        let keys: Vec<_> = f.elements.keys().into_iter().map(|k| k.as_str()).collect();
        assert_eq!(keys, vec!["bye", "greet"]);
    }

    #[test]
    fn test_collect_empty_document() {
        assert!(TaggedElements::collect(&Document::new(), "data-i18n").is_empty());
    }

    // ==================== apply Tests ====================

    #[test]
    fn test_apply_full_language() {
        let mut f = fixture();
        let outcome = Applicator::default().apply(
            &mut f.doc,
            &f.elements,
            &catalog(),
            LanguageRegistry::builtin(),
            None,
            "en",
        );
        assert_eq!(outcome.updated, 2);
        assert_eq!(f.doc.text(f.greet), Some("Hello"));
        assert_eq!(f.doc.text(f.bye), Some("Goodbye"));
    }

    #[test]
    fn test_apply_partial_language_keeps_existing_text() {
        let mut f = fixture();
        let outcome = Applicator::default().apply(
            &mut f.doc,
            &f.elements,
            &catalog(),
            LanguageRegistry::builtin(),
            None,
            "es",
        );
        assert_eq!(outcome.updated, 1);
        assert_eq!(outcome.unchanged, 1);
        assert_eq!(f.doc.text(f.greet), Some("Hola"));
        assert_eq!(f.doc.text(f.bye), Some("static farewell"));
    }

    #[test]
    fn test_apply_partial_language_with_default_fallback() {
        let mut f = fixture();
        let applicator = Applicator::new(FallbackPolicy::DefaultLanguage, "hidden md:inline");
        let outcome = applicator.apply(
            &mut f.doc,
            &f.elements,
            &catalog(),
            LanguageRegistry::builtin(),
            None,
            "es",
        );
        assert_eq!(outcome.updated, 2);
        assert_eq!(f.doc.text(f.bye), Some("Goodbye"));
    }

    #[test]
    fn test_apply_unknown_language_changes_nothing() {
        let mut f = fixture();
        let outcome = Applicator::default().apply(
            &mut f.doc,
            &f.elements,
            &catalog(),
            LanguageRegistry::builtin(),
            Some(f.button),
            "fr",
        );
        assert_eq!(outcome.updated, 0);
        assert!(!outcome.label_updated);
        assert_eq!(f.doc.text(f.greet), Some("static greeting"));
    }

    #[test]
    fn test_apply_counts_removed_elements_as_missing() {
        let mut f = fixture();
        f.doc.remove(f.greet);
        let outcome = Applicator::default().apply(
            &mut f.doc,
            &f.elements,
            &catalog(),
            LanguageRegistry::builtin(),
            None,
            "en",
        );
        assert_eq!(outcome.missing, 1);
        assert_eq!(outcome.updated, 1);
    }

    // ==================== Label Tests ====================

    #[test]
    fn test_apply_updates_selector_label() {
        let mut f = fixture();
        let outcome = Applicator::default().apply(
            &mut f.doc,
            &f.elements,
            &catalog(),
            LanguageRegistry::builtin(),
            Some(f.button),
            "es",
        );
        assert!(outcome.label_updated);
        assert_eq!(f.doc.text_content(f.button), "🇪🇸 Español");

        let span = f.doc.children(f.button)[0];
        assert!(f.doc.has_class(span, "hidden"));
        assert!(f.doc.has_class(span, "md:inline"));
    }

    #[test]
    fn test_label_rewrite_does_not_accumulate_spans() {
        let mut f = fixture();
        let applicator = Applicator::default();
        for code in ["es", "en"] {
            applicator.apply(
                &mut f.doc,
                &f.elements,
                &catalog(),
                LanguageRegistry::builtin(),
                Some(f.button),
                code,
            );
        }
        assert_eq!(f.doc.children(f.button).len(), 1);
        assert_eq!(f.doc.text_content(f.button), "🇺🇸 English");
    }
}
