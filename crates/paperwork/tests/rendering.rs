use paperwork::records::InvoiceRecord;
use paperwork::style::DocumentStyle;
use paperwork::{assemble, fonts, render};
use sha2::{Digest, Sha256};

const SAMPLE_INVOICE: &str = r#"{
    "invoice_number": "INV-2024-0007",
    "date": "March 1, 2024",
    "due_date": "March 31, 2024",
    "customer": {
        "name": "Acme Corp",
        "address": "1 Acme Way, Springfield",
        "email": "billing@acme.example"
    },
    "line_items": [
        {
            "service": "Consulting",
            "description": "Architecture review",
            "quantity": 2,
            "rate": 150.00,
            "total": 300.00
        }
    ],
    "subtotal": 300.00,
    "tax_rate": 0.08,
    "tax_amount": 24.00,
    "total_amount": 324.00,
    "notes": "Net 30."
}"#;

fn render_sample_invoice() -> Option<Vec<u8>> {
    if !fonts::bundled_fonts_available() {
        return None;
    }

    let record = InvoiceRecord::from_json_str(SAMPLE_INVOICE).expect("sample invoice parses");
    let style = DocumentStyle::default();
    let blocks = assemble::invoice_blocks(&record, &style);
    let bytes =
        render::render_blocks(&blocks, &style, "Invoice INV-2024-0007").expect("render invoice");
    Some(bytes)
}

/// Metadata segments the engine stamps with wall-clock times and random
/// identifiers on every render. Their contents are zeroed before hashing;
/// their lengths stay fixed, so offsets are unaffected.
const VOLATILE_SPANS: &[(&[u8], &[u8])] = &[
    (b"/CreationDate(", b")"),
    (b"/ModDate(", b")"),
    (b"/ID[", b"]"),
    (b"<xmp:CreateDate>", b"</xmp:CreateDate>"),
    (b"<xmp:ModifyDate>", b"</xmp:ModifyDate>"),
    (b"<xmp:MetadataDate>", b"</xmp:MetadataDate>"),
    (b"<xmpMM:DocumentID>", b"</xmpMM:DocumentID>"),
    (b"<xmpMM:InstanceID>", b"</xmpMM:InstanceID>"),
    (b"<xmpMM:VersionID>", b"</xmpMM:VersionID>"),
];

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack.windows(needle.len()).position(|window| window == needle)
}

fn zero_span_contents(data: &mut [u8], start: &[u8], end: &[u8]) {
    let mut from = 0;
    while let Some(position) = find(&data[from..], start) {
        let begin = from + position + start.len();
        let Some(length) = find(&data[begin..], end) else {
            return;
        };
        for byte in &mut data[begin..begin + length] {
            if byte.is_ascii_alphanumeric() || matches!(*byte, b'+' | b'-' | b':' | b'.' | b'\'') {
                *byte = b'0';
            }
        }
        from = begin + length + end.len();
    }
}

fn normalized_hash(bytes: &[u8]) -> [u8; 32] {
    let mut normalized = bytes.to_vec();
    for (start, end) in VOLATILE_SPANS {
        zero_span_contents(&mut normalized, start, end);
    }
    Sha256::digest(&normalized).into()
}

#[test]
fn renders_non_empty_pdf() {
    let Some(bytes) = render_sample_invoice() else {
        eprintln!(
            "Skipping renders_non_empty_pdf: bundled fonts missing. Set PAPERWORK_FONTS_DIR or see assets/fonts/README.md."
        );
        return;
    };
    assert!(bytes.starts_with(b"%PDF"), "output must be a PDF document");
}

#[test]
fn rendering_is_deterministic() {
    let Some(bytes_a) = render_sample_invoice() else {
        eprintln!(
            "Skipping rendering_is_deterministic: bundled fonts missing. Set PAPERWORK_FONTS_DIR or see assets/fonts/README.md."
        );
        return;
    };
    let bytes_b = render_sample_invoice().expect("fonts were available a moment ago");

    assert_eq!(bytes_a.len(), bytes_b.len(), "PDF sizes should match");
    assert_eq!(
        normalized_hash(&bytes_a),
        normalized_hash(&bytes_b),
        "renders must be identical after metadata normalization"
    );
}
