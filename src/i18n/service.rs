//! Localization service: ties the catalog, language state, applicator and
//! selector together for one page.
//!
//! A service is an ordinary value; every page (or test) builds its own. It
//! can be driven directly through [`LocalizationService::attach`] and
//! [`LocalizationService::set_language`], or mounted on a [`Page`] so that
//! load and click events reach it through explicit subscriptions.

use crate::config::Config;
use crate::document::{Document, ElementId};
use crate::i18n::{
    Applicator, ApplyOutcome, Catalog, CatalogError, LanguageChange, LanguageCode,
    LanguageRegistry, LanguageState, LocalizationMetrics, SelectorController, SelectorState,
    SelectorWidget, TaggedElements,
};
use crate::page::{DomEvent, EventKind, EventListener, ListenerId, Page};
use crate::storage::PreferenceStore;
use std::cell::RefCell;
use std::rc::Rc;
use tracing::{debug, info};

pub struct LocalizationService {
    config: Config,
    catalog: Catalog,
    registry: LanguageRegistry,
    state: LanguageState,
    applicator: Applicator,
    elements: TaggedElements,
    selector: SelectorController,
    metrics: LocalizationMetrics,
    attached: bool,
}

impl LocalizationService {
    /// Create a service and read the persisted language preference.
    pub fn new(
        catalog: Catalog,
        registry: LanguageRegistry,
        store: Box<dyn PreferenceStore>,
        config: &Config,
    ) -> Self {
        let metrics = LocalizationMetrics::new();
        let state = LanguageState::initialize(&catalog, store, config.storage_key.as_str());
        if state.read_failed() {
            metrics.record_storage_failure();
        }

        Self {
            applicator: Applicator::new(config.fallback, config.name_class.as_str()),
            selector: SelectorController::new(SelectorWidget::default(), config.hidden_class.as_str()),
            elements: TaggedElements::default(),
            config: config.clone(),
            catalog,
            registry,
            state,
            metrics,
            attached: false,
        }
    }

    /// Service over the bundled catalog and selector metadata, using the
    /// configured default language.
    pub fn builtin(store: Box<dyn PreferenceStore>, config: &Config) -> Result<Self, CatalogError> {
        let catalog = Catalog::builtin().with_default_language(&config.default_language)?;
        Ok(Self::new(
            catalog,
            LanguageRegistry::builtin().clone(),
            store,
            config,
        ))
    }

    // ==================== Accessors ====================

    /// The current language.
    pub fn current_language(&self) -> &LanguageCode {
        self.state.get()
    }

    pub fn state(&self) -> &LanguageState {
        &self.state
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn registry(&self) -> &LanguageRegistry {
        &self.registry
    }

    pub fn metrics(&self) -> &LocalizationMetrics {
        &self.metrics
    }

    pub fn tagged_elements(&self) -> &TaggedElements {
        &self.elements
    }

    pub fn selector_state(&self) -> SelectorState {
        self.selector.state()
    }

    pub fn selector_widget(&self) -> &SelectorWidget {
        self.selector.widget()
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    // ==================== Lifecycle ====================

    /// Collect translatable elements and selector widget from `document`,
    /// then run the first apply pass for the current language.
    ///
    /// Calling it again re-collects, which picks up elements added since.
    pub fn attach(&mut self, document: &mut Document) -> ApplyOutcome {
        self.elements = TaggedElements::collect(document, &self.config.marker_attribute);
        let widget = SelectorWidget::locate(
            document,
            &self.config.button_id,
            &self.config.dropdown_id,
            &self.config.selector_id,
        );
        self.selector.bind(document, widget);

        if self.attached {
            debug!("Localization re-attached, re-collected {} elements", self.elements.len());
        } else {
            info!(
                "Localization attached: {} translatable elements, selector {}, fallback {:?}",
                self.elements.len(),
                if widget.button.is_some() { "found" } else { "absent" },
                self.applicator.fallback()
            );
        }
        self.attached = true;

        self.apply(document)
    }

    /// Rewrite the document for the current language.
    pub fn apply(&mut self, document: &mut Document) -> ApplyOutcome {
        let outcome = self.applicator.apply(
            document,
            &self.elements,
            &self.catalog,
            &self.registry,
            self.selector.widget().button,
            self.state.get().as_str(),
        );
        self.metrics.record_apply(outcome.updated, outcome.unchanged);
        outcome
    }

    /// Switch to `code`: persist it, re-apply the document and close the
    /// selector. Unknown codes are ignored.
    ///
    /// Returns whether the language was accepted.
    pub fn set_language(&mut self, document: &mut Document, code: &str) -> bool {
        match self.state.set(&self.catalog, code) {
            LanguageChange::Rejected => {
                self.metrics.record_rejected_change();
                false
            }
            LanguageChange::Accepted { persisted } => {
                if !persisted {
                    self.metrics.record_storage_failure();
                }
                self.metrics.record_language_change();
                self.apply(document);
                self.selector.close(document);
                true
            }
        }
    }

    /// Open or close the selector dropdown.
    pub fn toggle_selector(&mut self, document: &mut Document) -> SelectorState {
        self.selector.toggle(document)
    }

    /// Route a click on `target`.
    ///
    /// In order: a language option (closest element with the option
    /// attribute) selects that language; the toggle button toggles the
    /// dropdown; anything outside the widget closes it. An option whose
    /// code is rejected falls through to the other two.
    pub fn handle_click(&mut self, document: &mut Document, target: ElementId) {
        let option = document
            .closest_with_attribute(target, &self.config.option_attribute)
            .map(|(_, code)| code.to_string());
        if let Some(code) = option {
            if self.set_language(document, &code) {
                return;
            }
        }

        if self.selector.is_toggle(document, target) {
            self.selector.toggle(document);
            return;
        }

        self.selector.handle_outside_click(document, target);
    }

    // ==================== Subscriptions ====================

    /// Subscribe `service` to the page's load and click events.
    pub fn mount(service: &Rc<RefCell<LocalizationService>>, page: &mut Page) -> Mount {
        let listener: Rc<RefCell<dyn EventListener>> = service.clone();
        let listeners = vec![
            page.add_listener(EventKind::ContentLoaded, Rc::clone(&listener)),
            page.add_listener(EventKind::Click, listener),
        ];
        debug!("Localization mounted with {} listeners", listeners.len());
        Mount { listeners }
    }
}

impl EventListener for LocalizationService {
    fn handle_event(&mut self, document: &mut Document, event: &DomEvent) {
        match event {
            DomEvent::ContentLoaded => {
                self.attach(document);
            }
            DomEvent::Click { target } => self.handle_click(document, *target),
        }
    }
}

/// Subscriptions created by [`LocalizationService::mount`].
#[derive(Debug)]
#[must_use = "dropping a Mount leaves the listeners subscribed; call unmount to remove them"]
pub struct Mount {
    listeners: Vec<ListenerId>,
}

impl Mount {
    /// Remove every subscription. Returns how many were still registered.
    pub fn unmount(self, page: &mut Page) -> usize {
        let removed = self
            .listeners
            .into_iter()
            .filter(|id| page.remove_listener(*id))
            .count();
        debug!("Localization unmounted, removed {} listeners", removed);
        removed
    }
}
