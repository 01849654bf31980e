//! Skeleton of the Deadhand landing page.
//!
//! Only the parts the localization engine touches are modeled: tagged text
//! elements grouped by section, and the language selector widget. The baked-in
//! text is the English copy, as served before any script runs.

use crate::document::{Document, ElementId};
use crate::i18n::{LanguageConfig, LanguageRegistry};

/// Sections of the page and the translation keys each one renders.
pub const SECTIONS: &[(&str, &[&str])] = &[
    ("nav", &["nav_pricing", "nav_docs", "nav_launch"]),
    (
        "hero",
        &[
            "hero_badge",
            "hero_title_1",
            "hero_title_2",
            "hero_subtitle",
            "hero_cta",
            "hero_cta_2",
        ],
    ),
    (
        "specs",
        &[
            "spec_encryption",
            "spec_encryption_val",
            "spec_threshold",
            "spec_threshold_val",
            "spec_trigger",
            "spec_trigger_val",
            "spec_trust",
            "spec_trust_val",
        ],
    ),
    (
        "problem",
        &[
            "problem_label",
            "problem_title",
            "problem_subtitle",
            "problem_stat_1",
            "problem_stat_1_desc",
            "problem_stat_2",
            "problem_stat_2_desc",
            "problem_stat_3",
            "problem_stat_3_desc",
        ],
    ),
    (
        "solution",
        &[
            "solution_label",
            "solution_title",
            "solution_subtitle",
            "shard_a",
            "shard_a_desc",
            "shard_b",
            "shard_b_desc",
            "shard_c",
            "shard_c_desc",
        ],
    ),
    (
        "protocol",
        &[
            "protocol_label",
            "protocol_title",
            "protocol_subtitle",
            "step_1_title",
            "step_1_desc",
            "step_2_title",
            "step_2_desc",
            "step_3_title",
            "step_3_desc",
        ],
    ),
    ("security", &["security_label", "security_title", "security_subtitle"]),
    ("faq", &["faq_label", "faq_title", "faq_subtitle"]),
    ("cta", &["cta_title", "cta_subtitle", "cta_button", "cta_note"]),
    ("footer", &["footer_opensource"]),
];

/// Build the landing page document.
///
/// `baked_text` supplies the initial text of each tagged element; keys it
/// does not know keep an empty element.
pub fn landing_page<'a>(
    registry: &LanguageRegistry,
    baked_text: impl Fn(&str) -> Option<&'a str>,
) -> Document {
    let mut doc = Document::new();
    let root = doc.root();

    for (section, keys) in SECTIONS {
        let Some(container) = doc.append_child(root, "section") else {
            continue;
        };
        doc.set_attribute(container, "id", section);
        if *section == "nav" {
            selector_widget(&mut doc, container, registry);
        }
        for &key in keys.iter() {
            if let Some(element) = doc.append_child(container, "span") {
                doc.set_attribute(element, "data-i18n", key);
                doc.set_text(element, baked_text(key).unwrap_or_default());
            }
        }
    }

    doc
}

/// `div#lang-selector > button#lang-btn + div#lang-dropdown.hidden > button[data-lang]*`
fn selector_widget(doc: &mut Document, parent: ElementId, registry: &LanguageRegistry) {
    let Some(selector) = doc.append_child(parent, "div") else {
        return;
    };
    doc.set_attribute(selector, "id", "lang-selector");

    if let Some(button) = doc.append_child(selector, "button") {
        doc.set_attribute(button, "id", "lang-btn");
        doc.set_text(button, "🌐");
    }

    let Some(dropdown) = doc.append_child(selector, "div") else {
        return;
    };
    doc.set_attribute(dropdown, "id", "lang-dropdown");
    doc.add_class(dropdown, "hidden");

    for language in registry.list_enabled() {
        option(doc, dropdown, language);
    }
}

fn option(doc: &mut Document, dropdown: ElementId, language: &LanguageConfig) {
    if let Some(item) = doc.append_child(dropdown, "button") {
        doc.set_attribute(item, "data-lang", language.code);
        doc.set_text(item, &format!("{} {}", language.glyph, language.native_name));
    }
}
