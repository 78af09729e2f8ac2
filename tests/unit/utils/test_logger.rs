use kops_client::utils::logger::setup_logger;
use tracing::info;

#[test]
fn test_setup_logger_keeps_existing_subscriber() {
    let existing = tracing_subscriber::fmt().with_test_writer().finish();
    let _ = tracing::subscriber::set_global_default(existing);
    assert!(tracing::dispatcher::has_been_set());

    // Installing over an existing global subscriber must not panic.
    setup_logger();
    setup_logger();
    info!("still logging");
}
