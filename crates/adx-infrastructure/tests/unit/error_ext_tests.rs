//! Error Extension Tests

use adx_domain::error::{Error, Result};
use adx_infrastructure::error_ext::ErrorContext;
use std::io;

fn not_found() -> io::Error {
    io::Error::new(io::ErrorKind::NotFound, "file not found")
}

#[test]
fn test_io_context() {
    let result: Result<()> = Err(not_found()).io_context("failed to read file");

    if let Err(Error::Io { source, message }) = result {
        assert_eq!(message, "failed to read file: file not found");
        assert!(source.is_some());
    } else {
        panic!("Expected Io error");
    }
}

#[test]
fn test_config_context() {
    let result: Result<()> = Err(not_found()).config_context("bad config");
    assert!(matches!(result, Err(Error::Configuration { .. })));
}

#[test]
fn test_catalog_context() {
    let err = Err::<(), _>(not_found())
        .catalog_context("bad catalog")
        .expect_err("catalog error");
    assert_eq!(err.to_string(), "Catalog error: bad catalog: file not found");
}

#[test]
fn test_lazy_context_is_infrastructure() {
    let result: Result<()> = Err(not_found()).with_context(|| format!("step {}", 2));

    match result {
        Err(Error::Infrastructure { message, source }) => {
            assert_eq!(message, "step 2: file not found");
            assert!(source.is_some());
        }
        other => panic!("Expected Infrastructure error, got {other:?}"),
    }
}

#[test]
fn test_ok_passes_through() {
    let result: Result<u8> = Ok::<u8, io::Error>(7).context("unused");
    assert_eq!(result.expect("ok value"), 7);
}
