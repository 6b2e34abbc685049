#![no_main]

//! Fuzz target for the scan -> validate -> fix pipeline: arbitrary source
//! never panics the scanner, and every planned fix splices cleanly into the
//! source it was planned against.

use classort_edit::apply_fixes;
use classort_engine::validate;
use classort_scan::{ScanConfig, scan_source};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(source) = std::str::from_utf8(data) else {
        return;
    };

    let config = ScanConfig::default();
    let mut fixes = Vec::new();
    for sequence in scan_source(source, &config) {
        let report = validate(&sequence, source);
        for diagnostic in report.diagnostics {
            if let Some(fix) = diagnostic.fix {
                fixes.push(fix);
            }
        }
    }

    // Overlap rejection is allowed; panics and invalid splices are not.
    let _ = apply_fixes(source, &fixes);
});
