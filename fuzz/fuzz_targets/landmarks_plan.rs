//! Fuzz target for layout planning.
//!
//! Any landmark document that parses must either plan cleanly or fail with
//! an error, and a successful plan must yield a sheet job without panicking.

#![no_main]

use std::path::Path;

use libfuzzer_sys::fuzz_target;
use passfoto::compliance::check_plan;
use passfoto::input::io_json::from_json_slice;
use passfoto::input::Landmarks;
use passfoto::layout::{plan_layout, LayoutConfig};
use passfoto::render::sheet_job;

fuzz_target!(|data: &[u8]| {
    if data.len() > 64 * 1024 {
        return;
    }

    let Ok(document) = from_json_slice(data) else {
        return;
    };
    let landmarks = Landmarks::from_document(&document, (3000, 4000));
    if let Ok(plan) = plan_layout(&landmarks, &LayoutConfig::default()) {
        let _ = check_plan(&plan, None);
        let _ = sheet_job(&plan, Path::new("portrait.jpg"), true);
    }
});
