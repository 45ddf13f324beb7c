//! # Registry Dispatch Flows
//!
//! Tests the save-time hook end to end: an entity handed to
//! `ValidatorRegistry` is routed by kind to `OrderTypeValidator`, which reads
//! the population through the in-memory store.
//!
//! ```text
//! [Save request] ──&dyn Entity──→ [ValidatorRegistry]
//!                                        │ kind lookup
//!                                        ↓
//!                               [OrderTypeValidator]
//!                                   │           │
//!                         OrderTypeLookup   OrderTypeHierarchy
//!                                   └─────┬─────┘
//!                                         ↓
//!                              [InMemoryOrderTypeStore]
//! ```

#[cfg(test)]
mod tests {
    use std::any::Any;
    use std::sync::Arc;

    use emr_telemetry::{init_logging, TelemetryConfig, TelemetryError};
    use order_type_validation::{
        ConceptClass, InMemoryOrderTypeStore, OrderType, OrderTypeLookup, OrderTypeValidator,
        ValidationConfig,
    };
    use shared_types::{
        downcast_target, Entity, EntityKind, FieldRejection, RejectionSink, ValidationError,
        ValidationFault, Validator, ValidatorRegistry,
    };

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    fn init_test_logging() {
        let mut config = TelemetryConfig::for_subsystem("tests");
        config.log_level = "debug".to_string();
        match init_logging(&config) {
            Ok(_) | Err(TelemetryError::AlreadyInitialized(_)) => {}
            Err(e) => panic!("logging setup failed: {}", e),
        }
    }

    /// Drug ── Antibiotic, with Drug owning the "Drug" concept class.
    fn seeded_store() -> Arc<InMemoryOrderTypeStore> {
        let store = InMemoryOrderTypeStore::new();
        let drug = store.insert(
            OrderType::new("Drug Order").with_concept_classes(vec![ConceptClass::new(3, "Drug")]),
        );
        store.insert(OrderType::new("Antibiotic Order").with_parent(drug));
        Arc::new(store)
    }

    fn by_name(store: &InMemoryOrderTypeStore, name: &str) -> OrderType {
        store
            .find_order_type_by_name(name)
            .expect("store is up")
            .expect("seeded")
    }

    fn registry_over(store: &Arc<InMemoryOrderTypeStore>) -> ValidatorRegistry {
        let mut registry = ValidatorRegistry::new();
        registry.register(Arc::new(OrderTypeValidator::new(
            Arc::clone(store),
            Arc::clone(store),
        )));
        registry
    }

    /// Concept class validator used to show the registry is open-ended.
    struct NamedConceptClassValidator;

    impl Validator for NamedConceptClassValidator {
        fn kind(&self) -> EntityKind {
            EntityKind::ConceptClass
        }

        fn name(&self) -> &'static str {
            "NamedConceptClassValidator"
        }

        fn validate(
            &self,
            target: Option<&dyn Entity>,
            errors: &mut dyn RejectionSink,
        ) -> Result<(), ValidationFault> {
            let class = downcast_target::<ConceptClass>(target, self.kind())?;
            if class.name.trim().is_empty() {
                errors.reject(FieldRejection::new("name", "error.name"));
            }
            Ok(())
        }
    }

    /// Entity of a kind nobody registered a validator for.
    struct Concept;

    impl Entity for Concept {
        fn kind(&self) -> EntityKind {
            EntityKind::Concept
        }

        fn as_any(&self) -> &dyn Any {
            self
        }
    }

    // =============================================================================
    // INTEGRATION TESTS: SAVE-TIME HOOK
    // =============================================================================

    #[test]
    fn test_valid_order_type_passes_the_hook() {
        init_test_logging();
        let store = seeded_store();
        let registry = registry_over(&store);

        let candidate = OrderType::new("Lab Order");
        assert!(registry.validate_or_reject(&candidate).is_ok());
    }

    #[test]
    fn test_rejected_order_type_stops_the_save() {
        init_test_logging();
        let store = seeded_store();
        let registry = registry_over(&store);

        let candidate = OrderType::new("Drug Order")
            .with_concept_classes(vec![ConceptClass::new(9, "Test"), ConceptClass::new(3, "Drug")]);

        match registry.validate_or_reject(&candidate) {
            Err(ValidationError::Rejected { kind, errors }) => {
                assert_eq!(kind, EntityKind::OrderType);
                assert_eq!(errors.object_name(), "orderType");
                assert_eq!(errors.len(), 2);
                assert!(errors.has_field_rejection("name"));
                assert!(errors.has_field_rejection("conceptClasses[1]"));
            }
            other => panic!("expected rejection, got {:?}", other),
        }
        // The hook only reads.
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_edit_of_persisted_node_passes_the_hook() {
        init_test_logging();
        let store = seeded_store();
        let registry = registry_over(&store);

        let mut edited = by_name(&store, "Drug Order");
        edited.description = Some("Medication orders".to_string());

        assert!(registry.validate_or_reject(&edited).is_ok());
    }

    #[test]
    fn test_cycle_through_registry_is_rejected() {
        init_test_logging();
        let store = seeded_store();
        let registry = registry_over(&store);
        let antibiotic = by_name(&store, "Antibiotic Order");

        let mut candidate = by_name(&store, "Drug Order");
        candidate.parent = antibiotic.id;

        let err = registry.validate_or_reject(&candidate).unwrap_err();
        assert!(matches!(
            err,
            ValidationError::Rejected { ref errors, .. } if errors.has_field_rejection("parent")
        ));
    }

    #[test]
    fn test_registry_routes_each_kind_to_its_own_validator() {
        init_test_logging();
        let store = seeded_store();
        let mut registry = registry_over(&store);
        registry.register(Arc::new(NamedConceptClassValidator));

        assert_eq!(
            registry.kinds(),
            vec![EntityKind::OrderType, EntityKind::ConceptClass]
        );

        let blank_class = ConceptClass::new(4, " ");
        match registry.validate_or_reject(&blank_class) {
            Err(ValidationError::Rejected { kind, errors }) => {
                assert_eq!(kind, EntityKind::ConceptClass);
                assert_eq!(errors.object_name(), "conceptClass");
                assert!(errors.has_field_rejection("name"));
            }
            other => panic!("expected rejection, got {:?}", other),
        }

        assert!(registry
            .validate_or_reject(&OrderType::new("Lab Order"))
            .is_ok());
    }

    #[test]
    fn test_unregistered_kind_is_a_fault() {
        init_test_logging();
        let store = seeded_store();
        let registry = registry_over(&store);

        let err = registry.validate_or_reject(&Concept).unwrap_err();
        assert!(matches!(
            err,
            ValidationError::Fault(ValidationFault::NoValidator(EntityKind::Concept))
        ));
    }

    #[test]
    fn test_custom_codes_flow_through_registry() {
        init_test_logging();
        let store = seeded_store();
        let config = ValidationConfig::from_json(
            r#"{"codes": {"duplicate_name": "ordertype.name.taken"}, "include_default_messages": false}"#,
        )
        .expect("valid config");
        let mut registry = ValidatorRegistry::new();
        registry.register(Arc::new(OrderTypeValidator::with_config(
            Arc::clone(&store),
            Arc::clone(&store),
            config,
        )));

        let err = registry
            .validate_or_reject(&OrderType::new("Antibiotic Order"))
            .unwrap_err();
        match err {
            ValidationError::Rejected { errors, .. } => {
                let rejection = &errors.rejections()[0];
                assert_eq!(rejection.code, "ordertype.name.taken");
                assert!(rejection.default_message.is_none());
            }
            other => panic!("expected rejection, got {:?}", other),
        }
    }
}
