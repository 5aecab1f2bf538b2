use std::fs;
use std::path::PathBuf;

use paperwork::error::Error;
use paperwork::style::DocumentStyle;
use paperwork::{fonts, generate_invoice, generate_letter};

const SAMPLE_INVOICE: &str = r#"{
    "invoice_number": "INV-2024-0008",
    "date": "April 1, 2024",
    "due_date": "April 30, 2024",
    "customer": {
        "name": "Acme Corp",
        "address": "1 Acme Way, Springfield",
        "email": "billing@acme.example"
    },
    "line_items": [
        {
            "service": "Hosting",
            "description": "Monthly plan",
            "quantity": 1,
            "rate": 8.00,
            "total": 8.00
        }
    ],
    "subtotal": 8.00,
    "tax_rate": 0.08,
    "tax_amount": 0.64,
    "total_amount": 8.64
}"#;

const SAMPLE_LETTER: &str =
    r#"{"name":"Jane Doe","address":"123 Main St, Springfield","message":"Hello"}"#;

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("paperwork-{}-{}", name, std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).expect("create scratch dir");
    dir
}

#[test]
fn missing_input_file_maps_to_file_not_found() {
    let style = DocumentStyle::default();
    let dir = scratch_dir("missing-input");

    let err = generate_invoice(dir.join("absent.json"), dir.join("out.pdf"), &style)
        .expect_err("input does not exist");
    assert!(matches!(err, Error::FileNotFound { .. }));
    assert!(!dir.join("out.pdf").exists(), "no partial output on failure");

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn malformed_json_maps_to_invalid_json() {
    let style = DocumentStyle::default();
    let dir = scratch_dir("malformed-json");
    let data_file = dir.join("broken.json");
    fs::write(&data_file, "{not json").expect("write data file");

    let err = generate_letter(&data_file, dir.join("out.pdf"), &style)
        .expect_err("input is not JSON");
    assert!(matches!(err, Error::InvalidJson { .. }));
    assert!(!dir.join("out.pdf").exists(), "no partial output on failure");

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn missing_letter_fields_are_reported_together() {
    let style = DocumentStyle::default();
    let dir = scratch_dir("missing-fields");
    let data_file = dir.join("letter.json");
    fs::write(&data_file, r#"{"name":"Jane Doe"}"#).expect("write data file");

    let err = generate_letter(&data_file, dir.join("out.pdf"), &style)
        .expect_err("required fields missing");
    match err {
        Error::Validation(err) => {
            let missing: Vec<&str> = err.missing_fields().iter().map(String::as_str).collect();
            assert_eq!(missing, ["address", "message"]);
            assert!(err.to_string().contains("message"));
        }
        other => panic!("expected validation error, got {other:?}"),
    }

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn generate_invoice_creates_missing_output_directories() {
    if !fonts::bundled_fonts_available() {
        eprintln!(
            "Skipping generate_invoice_creates_missing_output_directories: bundled fonts missing."
        );
        return;
    }

    let style = DocumentStyle::default();
    let dir = scratch_dir("invoice-output");
    let data_file = dir.join("invoice.json");
    fs::write(&data_file, SAMPLE_INVOICE).expect("write data file");

    let output_path = dir.join("nested/deep/invoice.pdf");
    let bytes = generate_invoice(&data_file, &output_path, &style).expect("generate invoice");

    let written = fs::read(&output_path).expect("output file exists");
    assert_eq!(written.len(), bytes);
    assert!(written.starts_with(b"%PDF"));

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn generate_letter_writes_pdf() {
    if !fonts::bundled_fonts_available() {
        eprintln!("Skipping generate_letter_writes_pdf: bundled fonts missing.");
        return;
    }

    let style = DocumentStyle::default();
    let dir = scratch_dir("letter-output");
    let data_file = dir.join("letter.json");
    fs::write(&data_file, SAMPLE_LETTER).expect("write data file");

    let output_path = dir.join("letter.pdf");
    let bytes = generate_letter(&data_file, &output_path, &style).expect("generate letter");

    let written = fs::read(&output_path).expect("output file exists");
    assert_eq!(written.len(), bytes);
    assert!(written.starts_with(b"%PDF"));

    let _ = fs::remove_dir_all(&dir);
}
