//! # Field Rejections
//!
//! Structured, field-addressed validation errors and the sink validators
//! write them to. A rejection never interrupts control flow: validators keep
//! evaluating independent rules and the caller renders every rejection at once.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Path of a rejected field.
///
/// Collection fields carry the element index and render with array-index
/// suffix notation, e.g. `conceptClasses[2]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FieldPath {
    /// Field name as exposed to the form layer.
    pub field: String,
    /// Element index for collection fields.
    pub index: Option<usize>,
}

impl FieldPath {
    /// Path to a scalar field.
    pub fn field(name: impl Into<String>) -> Self {
        Self {
            field: name.into(),
            index: None,
        }
    }

    /// Path to one element of a collection field.
    pub fn indexed(name: impl Into<String>, index: usize) -> Self {
        Self {
            field: name.into(),
            index: Some(index),
        }
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.index {
            Some(index) => write!(f, "{}[{}]", self.field, index),
            None => f.write_str(&self.field),
        }
    }
}

impl From<&str> for FieldPath {
    fn from(name: &str) -> Self {
        Self::field(name)
    }
}

/// One rejected field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldRejection {
    /// The offending field.
    pub field: FieldPath,
    /// Message code resolved by the presentation layer.
    pub code: String,
    /// Positional formatting arguments for the message code.
    pub args: Vec<String>,
    /// Fallback text when the code cannot be resolved.
    pub default_message: Option<String>,
}

impl FieldRejection {
    /// Create a rejection with no arguments and no fallback text.
    pub fn new(field: impl Into<FieldPath>, code: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            code: code.into(),
            args: Vec::new(),
            default_message: None,
        }
    }

    /// Set the formatting arguments.
    pub fn with_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args = args.into_iter().map(Into::into).collect();
        self
    }

    /// Set the fallback message.
    pub fn with_default_message(mut self, message: impl Into<String>) -> Self {
        self.default_message = Some(message.into());
        self
    }
}

impl fmt::Display for FieldRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.default_message {
            Some(message) => write!(f, "{}: {} ({})", self.field, self.code, message),
            None => write!(f, "{}: {}", self.field, self.code),
        }
    }
}

/// Error-accumulation sink handed to validators.
pub trait RejectionSink {
    /// Record a rejected field.
    fn reject(&mut self, rejection: FieldRejection);

    /// Whether anything has been rejected so far.
    fn has_rejections(&self) -> bool;
}

/// Collecting sink bound to one validated object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationErrors {
    object_name: String,
    rejections: Vec<FieldRejection>,
}

impl ValidationErrors {
    /// Create an empty sink for the named object (e.g. `"orderType"`).
    pub fn new(object_name: impl Into<String>) -> Self {
        Self {
            object_name: object_name.into(),
            rejections: Vec::new(),
        }
    }

    /// Name of the validated object.
    pub fn object_name(&self) -> &str {
        &self.object_name
    }

    /// All rejections in the order they were recorded.
    pub fn rejections(&self) -> &[FieldRejection] {
        &self.rejections
    }

    /// Rejections recorded against one rendered field path.
    pub fn field_rejections<'a>(
        &'a self,
        field: &'a str,
    ) -> impl Iterator<Item = &'a FieldRejection> + 'a {
        self.rejections
            .iter()
            .filter(move |r| r.field.to_string() == field)
    }

    /// Whether a rendered field path has at least one rejection.
    pub fn has_field_rejection(&self, field: &str) -> bool {
        self.field_rejections(field).next().is_some()
    }

    pub fn len(&self) -> usize {
        self.rejections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rejections.is_empty()
    }

    /// `Ok(())` when nothing was rejected, otherwise the collected errors.
    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.rejections.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl RejectionSink for ValidationErrors {
    fn reject(&mut self, rejection: FieldRejection) {
        self.rejections.push(rejection);
    }

    fn has_rejections(&self) -> bool {
        !self.rejections.is_empty()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} rejection(s) for '{}'",
            self.rejections.len(),
            self.object_name
        )?;
        for rejection in &self.rejections {
            write!(f, "; {}", rejection)?;
        }
        Ok(())
    }
}
