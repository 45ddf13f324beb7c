//! # Order Type Validator
//!
//! Application service that implements both the typed
//! `OrderTypeValidationApi` and the registry-facing `Validator` trait.
//!
//! ## Rules
//!
//! Evaluated in order against the candidate and the persisted population:
//!
//! 1. `name` present and not whitespace-only. Failing this stops the run.
//! 2. `parent` not in the candidate's own subtree (self included).
//! 3. `name` not carried by a different persisted node.
//! 4. No concept class shared with a different persisted node, retired
//!    nodes included. Rejections are addressed by the tag's index in the
//!    candidate's own list.
//!
//! Rules 2-4 are independent; each violation adds one rejection.

use crate::config::ValidationConfig;
use crate::domain::{OrderType, RejectionCode};
use crate::metrics;
use crate::ports::inbound::OrderTypeValidationApi;
use crate::ports::outbound::{OrderTypeHierarchy, OrderTypeLookup};
use emr_telemetry::{log_event, subsystem_span};
use shared_types::{
    downcast_target, Entity, EntityKind, FieldPath, FieldRejection, RejectionSink,
    ValidationFault, Validator,
};
use std::time::Instant;
use tracing::debug;

const SUBSYSTEM: &str = "order-types";

/// Save-time validator for order types.
pub struct OrderTypeValidator<L: OrderTypeLookup, H: OrderTypeHierarchy> {
    lookup: L,
    hierarchy: H,
    config: ValidationConfig,
}

impl<L: OrderTypeLookup, H: OrderTypeHierarchy> OrderTypeValidator<L, H> {
    /// Create a validator with default message codes.
    pub fn new(lookup: L, hierarchy: H) -> Self {
        Self::with_config(lookup, hierarchy, ValidationConfig::default())
    }

    /// Create a validator with custom config.
    pub fn with_config(lookup: L, hierarchy: H, config: ValidationConfig) -> Self {
        Self {
            lookup,
            hierarchy,
            config,
        }
    }

    pub fn config(&self) -> &ValidationConfig {
        &self.config
    }

    fn reject(
        &self,
        errors: &mut dyn RejectionSink,
        field: FieldPath,
        code: RejectionCode,
        args: Vec<String>,
        default_message: String,
    ) {
        log_event!(
            warn,
            SUBSYSTEM,
            "Order type field rejected",
            field = %field,
            rule = code.as_str()
        );
        metrics::record_rejection(code.as_str());

        let mut rejection = FieldRejection::new(field, self.config.codes.code_for(code)).with_args(args);
        if self.config.include_default_messages {
            rejection = rejection.with_default_message(default_message);
        }
        errors.reject(rejection);
    }

    fn check_rules(
        &self,
        order_type: &OrderType,
        errors: &mut dyn RejectionSink,
    ) -> Result<(), ValidationFault> {
        if !order_type.has_name_text() {
            self.reject(
                errors,
                FieldPath::field("name"),
                RejectionCode::MissingName,
                Vec::new(),
                "Name is required".to_string(),
            );
            return Ok(());
        }
        let name = order_type.display_name();
        debug!(order_type = name, "[order-types] checking hierarchy, name and concept classes");

        if let Some(parent) = order_type.parent {
            if self.hierarchy.is_ancestor_or_self(order_type, parent)? {
                self.reject(
                    errors,
                    FieldPath::field("parent"),
                    RejectionCode::ParentAmongDescendants,
                    vec![name.to_string()],
                    format!("Parent of {} is among its descendants", name),
                );
            }
        }

        if let Some(duplicate) = self.lookup.find_order_type_by_name(name)? {
            if !order_type.is_same_entity(&duplicate) {
                self.reject(
                    errors,
                    FieldPath::field("name"),
                    RejectionCode::DuplicateName,
                    vec![name.to_string()],
                    format!("Duplicate order type name: {}", name),
                );
            }
        }

        for other in self.lookup.list_order_types(true)? {
            // Editing: the stored copy of this node never conflicts with itself
            if order_type.is_same_entity(&other) {
                continue;
            }
            for class in &other.concept_classes {
                let Some(index) = order_type.concept_class_index(class) else {
                    continue;
                };
                self.reject(
                    errors,
                    FieldPath::indexed("conceptClasses", index),
                    RejectionCode::DuplicateConceptClass,
                    vec![class.name.clone(), name.to_string()],
                    format!(
                        "{} is already associated to another order type: {}",
                        class.name,
                        other.display_name()
                    ),
                );
            }
        }

        Ok(())
    }
}

impl<L: OrderTypeLookup, H: OrderTypeHierarchy> OrderTypeValidationApi
    for OrderTypeValidator<L, H>
{
    fn validate_order_type(
        &self,
        order_type: &OrderType,
        errors: &mut dyn RejectionSink,
    ) -> Result<(), ValidationFault> {
        let _span = subsystem_span!("validate_order_type", subsystem = SUBSYSTEM).entered();
        let started = Instant::now();
        let mut tally = Tally::new(errors);

        let outcome = self.check_rules(order_type, &mut tally);

        match &outcome {
            Ok(()) => {
                metrics::record_validation();
                metrics::record_validation_latency(started.elapsed().as_secs_f64());
                log_event!(
                    info,
                    SUBSYSTEM,
                    "Order type validated",
                    order_type = order_type.display_name(),
                    rejections = tally.count
                );
            }
            Err(fault) => {
                metrics::record_fault();
                log_event!(
                    error,
                    SUBSYSTEM,
                    "Order type validation aborted",
                    order_type = order_type.display_name(),
                    error = %fault
                );
            }
        }

        outcome
    }
}

impl<L: OrderTypeLookup, H: OrderTypeHierarchy> Validator for OrderTypeValidator<L, H> {
    fn kind(&self) -> EntityKind {
        EntityKind::OrderType
    }

    fn name(&self) -> &'static str {
        "OrderTypeValidator"
    }

    fn validate(
        &self,
        target: Option<&dyn Entity>,
        errors: &mut dyn RejectionSink,
    ) -> Result<(), ValidationFault> {
        let order_type = downcast_target::<OrderType>(target, self.kind()).map_err(|fault| {
            metrics::record_fault();
            log_event!(warn, SUBSYSTEM, "Validator misuse", error = %fault);
            fault
        })?;
        self.validate_order_type(order_type, errors)
    }
}

/// Counts rejections on their way to the caller's sink.
struct Tally<'a> {
    inner: &'a mut dyn RejectionSink,
    count: usize,
}

impl<'a> Tally<'a> {
    fn new(inner: &'a mut dyn RejectionSink) -> Self {
        Self { inner, count: 0 }
    }
}

impl RejectionSink for Tally<'_> {
    fn reject(&mut self, rejection: FieldRejection) {
        self.count += 1;
        debug!(total = self.count, "[order-types] rejection recorded");
        self.inner.reject(rejection);
    }

    fn has_rejections(&self) -> bool {
        self.inner.has_rejections()
    }
}
