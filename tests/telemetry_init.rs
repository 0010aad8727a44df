use showlog::telemetry::{TelemetryError, init_tracing};

#[test]
fn second_install_reports_instead_of_panicking() {
    init_tracing("showlog=debug").expect("first install");
    assert!(matches!(
        init_tracing("showlog=debug"),
        Err(TelemetryError::Init(_))
    ));
}
