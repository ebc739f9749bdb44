mod common;

use std::path::PathBuf;

use common::{build_dicom_buffer, write_temp_file};
use radview_core::error::{RadViewError, Result};
use radview_core::io::export::{export_to_dir, export_with, ExportGuard, ExportSources};

// ---------------------------------------------------------------------------
// Validation gates the sink
// ---------------------------------------------------------------------------

#[test]
fn test_valid_buffer_invokes_sink_exactly_once() {
    let mut invocations = 0;
    let result = export_with(
        ExportSources::from_memory(build_dicom_buffer(32)),
        "weld_7",
        |bytes, name| {
            invocations += 1;
            assert_eq!(name, "weld_7.dcm");
            assert_eq!(bytes.len(), 132 + 32);
            Ok(())
        },
    );
    assert!(result.is_ok());
    assert_eq!(invocations, 1);
}

#[test]
fn test_short_buffer_never_reaches_sink() {
    let mut invoked = false;
    let result = export_with(
        ExportSources::from_memory(vec![0u8; 131]),
        "weld_7",
        |_, _| {
            invoked = true;
            Ok(())
        },
    );
    assert!(matches!(
        result,
        Err(RadViewError::UnsupportedSignature(_))
    ));
    assert!(!invoked, "sink must not run for an invalid binary");
}

#[test]
fn test_missing_sources_fail() {
    let result: Result<()> = export_with(ExportSources::default(), "x", |_, _| Ok(()));
    assert!(matches!(result, Err(RadViewError::NoExportSource)));
}

// ---------------------------------------------------------------------------
// Source priority
// ---------------------------------------------------------------------------

#[test]
fn test_in_memory_beats_file_and_fetch() {
    let mut memory_bytes = build_dicom_buffer(4);
    memory_bytes[132] = 1;
    let mut file_bytes = build_dicom_buffer(4);
    file_bytes[132] = 2;
    let tmp = write_temp_file(&file_bytes);

    let sources = ExportSources {
        in_memory: Some(memory_bytes),
        file: Some(tmp.path().to_path_buf()),
        fetch: Some(Box::new(|| panic!("fetch must not run"))),
    };
    export_with(sources, "x", |bytes, _| {
        assert_eq!(bytes[132], 1, "in-memory source takes priority");
        Ok(())
    })
    .unwrap();
}

#[test]
fn test_file_beats_fetch() {
    let mut file_bytes = build_dicom_buffer(4);
    file_bytes[132] = 2;
    let tmp = write_temp_file(&file_bytes);

    let sources = ExportSources {
        in_memory: None,
        file: Some(tmp.path().to_path_buf()),
        fetch: Some(Box::new(|| panic!("fetch must not run"))),
    };
    export_with(sources, "x", |bytes, _| {
        assert_eq!(bytes[132], 2);
        Ok(())
    })
    .unwrap();
}

#[test]
fn test_fetch_used_as_last_resort() {
    let sources = ExportSources::from_fetch(Box::new(|| Ok(build_dicom_buffer(8))));
    export_with(sources, "x", |bytes, _| {
        assert_eq!(bytes.len(), 140);
        Ok(())
    })
    .unwrap();
}

#[test]
fn test_fetch_failure_propagates() {
    let sources = ExportSources::from_fetch(Box::new(|| {
        Err(RadViewError::Manifest("backend unreachable".into()))
    }));
    let result: Result<()> = export_with(sources, "x", |_, _| Ok(()));
    assert!(result.is_err());
}

// ---------------------------------------------------------------------------
// export_to_dir
// ---------------------------------------------------------------------------

#[test]
fn test_export_to_dir_writes_validated_copy() {
    let dir = tempfile::tempdir().unwrap();
    let bytes = build_dicom_buffer(64);
    let dest = export_to_dir(
        ExportSources::from_memory(bytes.clone()),
        "estudio_123",
        dir.path(),
    )
    .unwrap();

    assert_eq!(dest, dir.path().join("estudio_123.dcm"));
    assert_eq!(std::fs::read(&dest).unwrap(), bytes);
}

#[test]
fn test_export_to_dir_writes_nothing_on_invalid_input() {
    let dir = tempfile::tempdir().unwrap();
    let result = export_to_dir(
        ExportSources::from_memory(vec![0u8; 200]),
        "bad",
        dir.path(),
    );
    assert!(result.is_err());
    assert_eq!(
        std::fs::read_dir(dir.path()).unwrap().count(),
        0,
        "no partial artifact may be written"
    );
}

#[test]
fn test_export_source_from_file_reads_disk() {
    let bytes = build_dicom_buffer(16);
    let tmp = write_temp_file(&bytes);
    let dir = tempfile::tempdir().unwrap();
    let dest = export_to_dir(
        ExportSources::from_file(PathBuf::from(tmp.path())),
        "copy.dcm",
        dir.path(),
    )
    .unwrap();
    assert_eq!(std::fs::read(dest).unwrap(), bytes);
}

// ---------------------------------------------------------------------------
// ExportGuard
// ---------------------------------------------------------------------------

#[test]
fn test_guard_refuses_overlapping_exports() {
    let mut guard = ExportGuard::default();
    assert!(!guard.is_downloading());

    guard.begin().unwrap();
    assert!(guard.is_downloading());
    assert!(matches!(guard.begin(), Err(RadViewError::ExportInFlight)));

    guard.finish();
    assert!(!guard.is_downloading());
    assert!(guard.begin().is_ok());
}
