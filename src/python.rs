//! Python bindings via PyO3.
//!
//! Exposes the paragraph pipeline and the PDF parser to Python. Parsed
//! documents are returned as JSON strings so the Python side can `json.loads`
//! them without a mirrored class hierarchy.
//!
//! # Example
//!
//! ```python
//! import json
//! from pdf_paragraphs import parse_pdf, extract_paragraphs
//!
//! doc = json.loads(parse_pdf(open("report.pdf", "rb").read(), "report.pdf"))
//! paras = extract_paragraphs(["Header\nBody text", "Header\nMore text"])
//! ```

use pyo3::exceptions::{PyRuntimeError, PyValueError};
use pyo3::prelude::*;

use crate::api::{DocumentParser, DEFAULT_DOCUMENT_NAME};
use crate::error::Error;

fn to_py_err(err: Error) -> PyErr {
    if err.is_payload_error() {
        PyValueError::new_err(err.public_message())
    } else {
        PyRuntimeError::new_err(err.public_message())
    }
}

/// Extract paragraphs from already-extracted page text.
///
/// Args:
///     pages (list[str]): Raw text of each page, in page order
///
/// Returns:
///     list[tuple[str, int]]: (paragraph text, 1-based page number) pairs
#[pyfunction]
fn extract_paragraphs(py: Python<'_>, pages: Vec<String>) -> Vec<(String, usize)> {
    py.detach(|| {
        crate::pipeline::extract_paragraphs(&pages)
            .into_iter()
            .map(|e| (e.text, e.page))
            .collect()
    })
}

/// Parse PDF bytes into the JSON document envelope.
///
/// Args:
///     data (bytes): PDF file content
///     name (str): Document name written into the envelope
///
/// Returns:
///     str: JSON document
///
/// Raises:
///     ValueError: If the payload is empty or too large
///     RuntimeError: If the PDF cannot be parsed
#[pyfunction]
#[pyo3(signature = (data, name = DEFAULT_DOCUMENT_NAME.to_string()))]
fn parse_pdf(py: Python<'_>, data: Vec<u8>, name: String) -> PyResult<String> {
    py.detach(|| {
        DocumentParser::new()
            .parse_bytes(&data, &name)
            .and_then(|doc| doc.to_json())
    })
    .map_err(to_py_err)
}

/// Parse a base64-encoded PDF into the JSON document envelope.
#[pyfunction]
#[pyo3(signature = (pdf_base64, name = DEFAULT_DOCUMENT_NAME.to_string()))]
fn parse_pdf_base64(py: Python<'_>, pdf_base64: String, name: String) -> PyResult<String> {
    py.detach(|| {
        DocumentParser::new()
            .parse_base64(&pdf_base64, &name)
            .and_then(|doc| doc.to_json())
    })
    .map_err(to_py_err)
}

/// Python module for paragraph extraction.
#[pymodule]
fn pdf_paragraphs(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(extract_paragraphs, m)?)?;
    m.add_function(wrap_pyfunction!(parse_pdf, m)?)?;
    m.add_function(wrap_pyfunction!(parse_pdf_base64, m)?)?;

    m.add("VERSION", env!("CARGO_PKG_VERSION"))?;
    Ok(())
}
