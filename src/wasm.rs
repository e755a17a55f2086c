//! WASM bindings for CLT Solver
//!
//! Lets a browser compute laminates locally. Input and output are JSON
//! strings in the same shapes as the HTTP service.

use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::error::CLTResult;
use crate::input::parse_plies;
use crate::laminate::LaminateAssembly;
use crate::results::LaminateReport;

// Use wee_alloc for smaller WASM binary
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

/// Initialize panic hook for better error messages in browser console
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

#[derive(Debug, Serialize)]
struct LaminateResponse {
    success: bool,
    error: Option<String>,
    results: Option<LaminateReport>,
}

fn compute(request_json: &str) -> CLTResult<LaminateReport> {
    let plies = parse_plies(request_json)?;
    Ok(LaminateAssembly::new(&plies)?.to_report())
}

/// Compute a laminate from a JSON ply list or layup document
#[wasm_bindgen]
pub fn compute_laminate(request_json: &str) -> String {
    let response = match compute(request_json) {
        Ok(report) => LaminateResponse {
            success: true,
            error: None,
            results: Some(report),
        },
        Err(e) => LaminateResponse {
            success: false,
            error: Some(e.to_string()),
            results: None,
        },
    };

    serde_json::to_string(&response).unwrap_or_else(|e| {
        format!(r#"{{"success":false,"error":"Serialization failed: {}"}}"#, e)
    })
}

/// Get version information
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
