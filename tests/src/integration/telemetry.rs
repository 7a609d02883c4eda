//! # Telemetry Wiring
//!
//! Installs the global subscriber once and drives a traversal under a span so
//! the kernel's `tracing` events flow through it.

#[cfg(test)]
mod tests {
    use lattice_core::{Domain2, DomainError, Point2};
    use lattice_telemetry::{init_telemetry, traversal_span, TelemetryConfig, TelemetryError};

    // Only test in this crate that touches the global subscriber.
    #[test]
    fn test_init_telemetry_once_then_traverse() {
        let config = TelemetryConfig::default()
            .with_log_level("lattice_core=trace")
            .with_console_output(false);

        let guard = init_telemetry(config.clone()).expect("first init succeeds");
        assert_eq!(guard.logger().service_name(), "lattice-kernel");
        assert!(!guard.logger().is_json());

        let second = init_telemetry(config);
        assert!(matches!(second, Err(TelemetryError::AlreadyInitialized(_))));

        let _span = traversal_span!("telemetry_smoke", dimension = 2).entered();
        let domain = Domain2::new(Point2::new([0, 0]), Point2::new([3, 3])).expect("valid");
        let mut it = domain.begin();
        while !it.is_past_end() {
            it.advance();
        }
        it.retreat();
        assert_eq!(it.current(), domain.upper());

        let rejected = Domain2::new(Point2::new([1, 0]), Point2::new([0, 0]));
        assert!(matches!(rejected, Err(DomainError::InvalidDomain { .. })));
    }
}
