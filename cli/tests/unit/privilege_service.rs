//! Privilege resolution against the fake host.

#![allow(clippy::expect_used)]

use zbx_provision::application::services::privilege::resolve_privilege;
use zbx_provision::domain::{Elevation, PrivilegeError};

use crate::fakes::{Event, FakeHost, RecordingReporter};

#[test]
fn test_root_runs_directly() {
    let host = FakeHost::new();
    let reporter = RecordingReporter::default();
    let elevation = resolve_privilege(&host, "sudo", &reporter).expect("resolve");
    assert_eq!(elevation, Elevation::Direct);
    assert_eq!(reporter.events(), vec![Event::Step("running as root".to_owned())]);
}

#[test]
fn test_root_ignores_missing_helper() {
    let host = FakeHost::new();
    let elevation =
        resolve_privilege(&host, "sudo", &RecordingReporter::default()).expect("resolve");
    assert_eq!(elevation, Elevation::Direct);
}

#[test]
fn test_non_root_uses_available_helper() {
    let host = FakeHost::new().not_root().with_tool("sudo");
    let elevation =
        resolve_privilege(&host, "sudo", &RecordingReporter::default()).expect("resolve");
    assert_eq!(elevation, Elevation::Helper("sudo".to_owned()));
}

#[test]
fn test_non_root_honours_configured_helper() {
    let host = FakeHost::new().not_root().with_tool("doas");
    let elevation =
        resolve_privilege(&host, "doas", &RecordingReporter::default()).expect("resolve");
    assert_eq!(elevation, Elevation::Helper("doas".to_owned()));
}

#[test]
fn test_non_root_without_helper_fails_without_side_effects() {
    let host = FakeHost::new().not_root();
    let reporter = RecordingReporter::default();
    let err = resolve_privilege(&host, "sudo", &reporter).expect_err("should fail");
    assert!(matches!(err, PrivilegeError::Unavailable { ref helper } if helper == "sudo"));
    assert!(err.to_string().contains("sudo"));
    assert!(host.calls().is_empty());
    assert!(reporter.events().is_empty());
}
