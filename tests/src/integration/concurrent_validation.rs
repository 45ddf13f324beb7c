//! # Concurrent Validation
//!
//! One registry and one store shared behind `Arc` across worker threads.
//! Runs are independent: each thread gets its own rejection sink and sees
//! the same read-only population.

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::thread;

    use order_type_validation::{ConceptClass, InMemoryOrderTypeStore, OrderType, OrderTypeValidator};
    use parking_lot::Mutex;
    use shared_types::{ValidationError, ValidatorRegistry};

    const WORKERS: usize = 8;

    fn shared_registry() -> (Arc<InMemoryOrderTypeStore>, Arc<ValidatorRegistry>) {
        let store = Arc::new(InMemoryOrderTypeStore::new());
        store.insert(
            OrderType::new("Drug Order").with_concept_classes(vec![ConceptClass::new(3, "Drug")]),
        );

        let mut registry = ValidatorRegistry::new();
        registry.register(Arc::new(OrderTypeValidator::new(
            Arc::clone(&store),
            Arc::clone(&store),
        )));
        (store, Arc::new(registry))
    }

    #[test]
    fn test_parallel_runs_do_not_share_rejections() {
        let (_store, registry) = shared_registry();
        let outcomes = Arc::new(Mutex::new(Vec::new()));

        let handles: Vec<_> = (0..WORKERS)
            .map(|worker| {
                let registry = Arc::clone(&registry);
                let outcomes = Arc::clone(&outcomes);
                thread::spawn(move || {
                    // Even workers collide with the persisted name, odd ones do not.
                    let name = if worker % 2 == 0 {
                        "Drug Order".to_string()
                    } else {
                        format!("Worker Order {}", worker)
                    };
                    let rejections = match registry.validate_or_reject(&OrderType::new(name)) {
                        Ok(()) => 0,
                        Err(ValidationError::Rejected { errors, .. }) => errors.len(),
                        Err(fault) => panic!("unexpected fault: {}", fault),
                    };
                    outcomes.lock().push((worker, rejections));
                })
            })
            .collect();

        for handle in handles {
            handle.join().expect("worker panicked");
        }

        let mut outcomes = outcomes.lock().clone();
        outcomes.sort();
        assert_eq!(outcomes.len(), WORKERS);
        for (worker, rejections) in outcomes {
            let expected = if worker % 2 == 0 { 1 } else { 0 };
            assert_eq!(rejections, expected, "worker {}", worker);
        }
    }

    #[test]
    fn test_validation_sees_writes_made_before_it_starts() {
        let (store, registry) = shared_registry();

        let writer = {
            let store = Arc::clone(&store);
            thread::spawn(move || store.insert(OrderType::new("Lab Order")))
        };
        writer.join().expect("writer panicked");

        let err = registry
            .validate_or_reject(&OrderType::new("Lab Order"))
            .unwrap_err();
        assert!(matches!(
            err,
            ValidationError::Rejected { ref errors, .. } if errors.has_field_rejection("name")
        ));
    }
}
