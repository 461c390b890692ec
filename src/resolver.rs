//! Support resolution: is a component insertable under a framework, and with
//! which snippet.
//!
//! Lookups are pure and never fail. Unknown components, unknown framework
//! keys and unsupported pairs all answer "no"; the caller decides how to show
//! that (normally by disabling the component button beforehand).

use crate::catalog::{ComponentDefinition, ComponentIndex};
use crate::framework::Framework;
use tracing::debug;

#[derive(Clone, Copy, Debug)]
pub struct SupportResolver<'c> {
    index: &'c ComponentIndex,
}

impl<'c> SupportResolver<'c> {
    pub fn new(index: &'c ComponentIndex) -> Self {
        Self { index }
    }

    pub fn index(&self) -> &'c ComponentIndex {
        self.index
    }

    /// The component, if it exists and `framework` supports it.
    pub fn supported_component(
        &self,
        component_id: &str,
        framework: Framework,
    ) -> Option<&'c ComponentDefinition> {
        let Some(component) = self.index.component(component_id) else {
            debug!(component = component_id, "unknown component");
            return None;
        };
        if !component.supports(framework) {
            debug!(
                component = component_id,
                framework = %framework,
                "component unsupported under framework"
            );
            return None;
        }
        Some(component)
    }

    pub fn is_supported(&self, component_id: &str, framework: Framework) -> bool {
        self.supported_component(component_id, framework).is_some()
    }

    /// The stored snippet, exactly as catalogued.
    pub fn snippet(&self, component_id: &str, framework: Framework) -> Option<&'c str> {
        let snippet = self
            .supported_component(component_id, framework)?
            .snippet(framework);
        // The index rejects supported-but-empty snippets at load time.
        debug_assert!(
            snippet.is_some(),
            "component {component_id} supported by {framework} without a snippet"
        );
        snippet
    }

    /// [`Self::is_supported`] for a framework given by key; unknown keys are
    /// unsupported.
    pub fn is_supported_by_key(&self, component_id: &str, framework_key: &str) -> bool {
        Framework::try_from(framework_key)
            .is_ok_and(|framework| self.is_supported(component_id, framework))
    }

    /// [`Self::snippet`] for a framework given by key.
    pub fn snippet_by_key(&self, component_id: &str, framework_key: &str) -> Option<&'c str> {
        let framework = Framework::try_from(framework_key).ok()?;
        self.snippet(component_id, framework)
    }
}
