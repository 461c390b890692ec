//! Insertion flow for "insert component X" requests.
//!
//! A request for a direct component inserts its snippet immediately. A
//! request for a structured component opens a [`PendingForm`]; the form is
//! later confirmed (fragment generated and inserted) or cancelled (nothing
//! emitted). At most one form is open: any accepted request replaces it.
//!
//! ```text
//! Idle --direct--> Idle
//! Idle --structured--> AwaitingFormInput --confirm/cancel--> Idle
//! ```
//!
//! The framework is read from the [`ActiveFramework`] accessor when a request
//! arrives. A form keeps the framework it was opened under, so switching
//! frameworks while it is open does not change what confirm produces.

use crate::catalog::{ComponentDefinition, ComponentId, ComponentIndex};
use crate::editor::{ActiveFramework, EditorInsert};
use crate::error::InsertionError;
use crate::forms::{FormKind, FormValues};
use crate::framework::Framework;
use crate::resolver::SupportResolver;
use tracing::{debug, info};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InsertionOutcome {
    /// `fragment` was handed to the editor.
    Inserted {
        component: ComponentId,
        fragment: String,
    },
    /// A form is open and waits for confirm or cancel.
    AwaitingForm {
        component: ComponentId,
        form: FormKind,
    },
}

/// Working state of an open component form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingForm {
    component: ComponentId,
    title: String,
    form: FormKind,
    framework: Framework,
    values: FormValues,
}

impl PendingForm {
    fn open(component: &ComponentDefinition, form: FormKind, framework: Framework) -> Self {
        let title = match component.icon.as_str() {
            "" => format!("Insert {}", component.label),
            icon => format!("{icon} Insert {}", component.label),
        };
        Self {
            component: component.id.clone(),
            title,
            form,
            framework,
            values: FormValues::new(),
        }
    }

    pub fn component(&self) -> &ComponentId {
        &self.component
    }

    /// Heading for the form, e.g. `🃏 Insert Card`.
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn form(&self) -> FormKind {
        self.form
    }

    /// Framework captured when the form opened.
    pub fn framework(&self) -> Framework {
        self.framework
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    /// The fragment confirm would insert right now.
    pub fn preview(&self) -> String {
        self.form.generate(&self.values, self.framework)
    }
}

pub struct InsertionCoordinator<'c, F, E> {
    resolver: SupportResolver<'c>,
    frameworks: F,
    editor: E,
    pending: Option<PendingForm>,
}

impl<'c, F: ActiveFramework, E: EditorInsert> InsertionCoordinator<'c, F, E> {
    pub fn new(index: &'c ComponentIndex, frameworks: F, editor: E) -> Self {
        Self {
            resolver: SupportResolver::new(index),
            frameworks,
            editor,
            pending: None,
        }
    }

    /// Route an insertion request.
    ///
    /// Unknown or unsupported components are rejected without touching the
    /// editor or an open form. Any accepted request discards an open form.
    pub fn request_insertion(
        &mut self,
        component_id: &str,
    ) -> Result<InsertionOutcome, InsertionError> {
        let framework = self.frameworks.active_framework();
        let component = self.supported(component_id, framework)?;

        if let Some(previous) = self.pending.take() {
            debug!(
                component = %previous.component,
                "open form replaced by new insertion request"
            );
        }

        if let Some(form) = component.form {
            debug!(component = component_id, form = %form, framework = %framework, "opening form");
            self.pending = Some(PendingForm::open(component, form, framework));
            return Ok(InsertionOutcome::AwaitingForm {
                component: component.id.clone(),
                form,
            });
        }

        let Some(snippet) = component.snippet(framework) else {
            return Err(InsertionError::Unsupported {
                component: component_id.to_string(),
                framework,
            });
        };
        let fragment = snippet.to_string();
        self.emit(&component.id, framework, &fragment);
        Ok(InsertionOutcome::Inserted {
            component: component.id.clone(),
            fragment,
        })
    }

    pub fn pending(&self) -> Option<&PendingForm> {
        self.pending.as_ref()
    }

    /// Update one field of the open form.
    pub fn set_field(&mut self, name: &str, value: &str) -> Result<(), InsertionError> {
        let pending = self.pending.as_mut().ok_or(InsertionError::NoPendingForm)?;
        if pending.form.schema().field(name).is_none() {
            return Err(InsertionError::UnknownField {
                form: pending.form.as_str().to_string(),
                field: name.to_string(),
            });
        }
        pending.values.set(name, value);
        Ok(())
    }

    /// Generate the open form's fragment, insert it, and close the form.
    pub fn confirm(&mut self) -> Result<InsertionOutcome, InsertionError> {
        let pending = self.pending.take().ok_or(InsertionError::NoPendingForm)?;
        let fragment = pending.preview();
        self.emit(&pending.component, pending.framework, &fragment);
        Ok(InsertionOutcome::Inserted {
            component: pending.component,
            fragment,
        })
    }

    /// Close the open form without inserting. Returns whether one was open.
    pub fn cancel(&mut self) -> bool {
        match self.pending.take() {
            Some(pending) => {
                debug!(component = %pending.component, "form cancelled");
                true
            }
            None => false,
        }
    }

    pub fn resolver(&self) -> SupportResolver<'c> {
        self.resolver
    }

    pub fn frameworks(&self) -> &F {
        &self.frameworks
    }

    pub fn editor(&self) -> &E {
        &self.editor
    }

    pub fn into_editor(self) -> E {
        self.editor
    }

    fn supported(
        &self,
        component_id: &str,
        framework: Framework,
    ) -> Result<&'c ComponentDefinition, InsertionError> {
        if let Some(component) = self.resolver.supported_component(component_id, framework) {
            return Ok(component);
        }
        if self.resolver.index().component(component_id).is_none() {
            Err(InsertionError::UnknownComponent(component_id.to_string()))
        } else {
            Err(InsertionError::Unsupported {
                component: component_id.to_string(),
                framework,
            })
        }
    }

    fn emit(&mut self, component: &ComponentId, framework: Framework, fragment: &str) {
        info!(
            component = %component,
            framework = %framework,
            bytes = fragment.len(),
            "inserting component fragment"
        );
        self.editor.insert_block(fragment);
    }
}
