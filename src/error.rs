//! Reasons an insertion request produced no fragment.
//!
//! The editor UI treats every variant as a silent no-op; the CLI reports
//! them. None of them leave state behind.

use crate::framework::Framework;
use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum InsertionError {
    /// The id is not in the catalogue.
    #[error("unknown component '{0}'")]
    UnknownComponent(String),

    /// The component exists but the framework does not support it.
    #[error("component '{component}' is not supported by {}", .framework.label())]
    Unsupported {
        component: String,
        framework: Framework,
    },

    /// Confirm or field update arrived with no form open.
    #[error("no component form is open")]
    NoPendingForm,

    /// Field update for a name the open form does not declare.
    #[error("the {form} form has no field '{field}'")]
    UnknownField { form: String, field: String },
}
