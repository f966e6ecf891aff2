//! Structural tests for the report PDF

use super::*;
use crate::options::{ExportOptions, PdfLayout};
use chrono::{TimeZone, Utc};
use proptest::prelude::*;
use report_model::{CellValue, ReportDataset};

fn scenario_a() -> ReportDataset {
    ReportDataset::new(
        "emprestimos",
        "Relatório de Empréstimos",
        Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap(),
    )
    .with_headers(["Código", "Usuário"])
    .with_row(["1", "42"])
}

fn scenario_b() -> ReportDataset {
    ReportDataset {
        rows: Vec::new(),
        ..scenario_a()
    }
}

fn encode(ds: &ReportDataset) -> Vec<u8> {
    encode_pdf(ds, &ExportOptions::default()).unwrap()
}

/// Positions of `xref` on a line of its own (not the one inside `startxref`)
fn xref_keyword_positions(pdf: &[u8]) -> Vec<usize> {
    (1..pdf.len().saturating_sub(4))
        .filter(|&i| &pdf[i..i + 4] == b"xref" && pdf[i - 1] == b'\n' && pdf[i + 4] == b'\n')
        .collect()
}

fn startxref_value(pdf: &[u8]) -> usize {
    let text = std::str::from_utf8(pdf).unwrap();
    let tail = &text[text.rfind("startxref\n").unwrap() + "startxref\n".len()..];
    tail.lines().next().unwrap().parse().unwrap()
}

/// Xref entries as (offset, generation, flag)
fn xref_entries(pdf: &[u8]) -> Vec<(usize, u32, char)> {
    let start = xref_keyword_positions(pdf)[0];
    let text = std::str::from_utf8(&pdf[start..]).unwrap();
    let mut lines = text.split('\n');
    assert_eq!(lines.next(), Some("xref"));
    let header = lines.next().unwrap();
    let count: usize = header.split(' ').nth(1).unwrap().parse().unwrap();

    let table_start = start + "xref\n".len() + header.len() + 1;
    (0..count)
        .map(|i| {
            let at = table_start + i * XREF_ENTRY_LEN;
            let raw = &pdf[at..at + XREF_ENTRY_LEN];
            let entry = std::str::from_utf8(raw).unwrap();
            assert!(entry.ends_with(" \n"), "entry {i} is not 20 bytes: {entry:?}");
            let offset: usize = entry[0..10].parse().unwrap();
            let generation: u32 = entry[11..16].parse().unwrap();
            (offset, generation, entry.as_bytes()[17] as char)
        })
        .collect()
}

#[test]
fn test_header() {
    assert!(encode(&scenario_a()).starts_with(b"%PDF-1.4\n"));
}

#[test]
fn test_single_xref_and_trailer() {
    let pdf = encode(&scenario_a());
    let text = String::from_utf8(pdf.clone()).unwrap();

    assert_eq!(xref_keyword_positions(&pdf).len(), 1);
    assert_eq!(text.matches("trailer\n").count(), 1);
    assert!(text.contains("xref\n0 6\n0000000000 65535 f \n"));
    assert!(text.contains("trailer\n<< /Size 6 /Root 1 0 R >>\nstartxref\n"));
    assert!(text.ends_with("%%EOF"));
}

#[test]
fn test_startxref_points_at_xref() {
    for ds in [scenario_a(), scenario_b()] {
        let pdf = encode(&ds);
        let at = startxref_value(&pdf);
        assert_eq!(at, xref_keyword_positions(&pdf)[0]);
        assert!(pdf[at..].starts_with(b"xref\n"));
    }
}

#[test]
fn test_xref_offsets_point_at_objects() {
    let pdf = encode(&scenario_a());
    let entries = xref_entries(&pdf);

    assert_eq!(entries.len(), 6);
    assert_eq!(entries[0], (0, 65535, 'f'));
    for (i, &(offset, generation, flag)) in entries.iter().enumerate().skip(1) {
        assert_eq!(generation, 0);
        assert_eq!(flag, 'n');
        let expected = format!("{} 0 obj", i);
        assert!(
            pdf[offset..].starts_with(expected.as_bytes()),
            "object {i} not found at offset {offset}"
        );
    }
}

#[test]
fn test_tracked_offsets_match_output() {
    let escaped: Vec<String> = report_lines(&scenario_a(), &ExportOptions::default())
        .iter()
        .map(|l| escape_pdf_string(l))
        .collect();
    let objects = build_pdf_objects(&escaped, &PdfLayout::default());
    let table = track_offsets(PDF_HEADER, &objects);
    let pdf = assemble(PDF_HEADER, &objects, &table).unwrap();

    for number in 1..=5u32 {
        let offset = table.offset_of(number).unwrap() as usize;
        assert!(pdf[offset..].starts_with(format!("{} 0 obj", number).as_bytes()));
    }
    assert_eq!(table.xref_start as usize, startxref_value(&pdf));
}

#[test]
fn test_scenario_a_content() {
    let pdf = encode(&scenario_a());
    let text = String::from_utf8(pdf).unwrap();

    let content = "BT\n/F1 12 Tf\n72 760 Td\n\
                   (Relatorio de Emprestimos) Tj\n0 -16 Td\n\
                   (Gerado em: 2025-01-01) Tj\n0 -16 Td\n\
                   () Tj\n0 -16 Td\n\
                   (Codigo | Usuario) Tj\n0 -16 Td\n\
                   (1 | 42) Tj\nET";
    let stream = format!(
        "4 0 obj\n<< /Length {} >>\nstream\n{}\nendstream\nendobj\n",
        content.len(),
        content
    );
    assert!(text.contains(&stream));
}

#[test]
fn test_scenario_b_is_valid() {
    let pdf = encode(&scenario_b());
    let text = String::from_utf8(pdf.clone()).unwrap();

    assert!(text.contains("(Codigo | Usuario) Tj\nET"));
    assert_eq!(xref_entries(&pdf).len(), 6);
    assert_eq!(startxref_value(&pdf), xref_keyword_positions(&pdf)[0]);
}

#[test]
fn test_output_is_ascii() {
    let ds = scenario_a().with_row(["Ünïcödé 価格", "€"]);
    assert!(encode(&ds).is_ascii());
}

#[test]
fn test_deterministic() {
    let ds = scenario_a().with_row(vec![CellValue::Number(3.5), CellValue::Null]);
    assert_eq!(encode(&ds), encode(&ds));
}

#[test]
fn test_reserved_characters_in_cells() {
    let ds = scenario_a().with_row(["f(x)", "C:\\temp"]);
    let text = String::from_utf8(encode(&ds)).unwrap();
    assert!(text.contains("(f\\(x\\) | C:\\\\temp) Tj"));
}

#[test]
fn test_parses_with_lopdf() {
    let pdf = encode(&scenario_a());
    let doc = lopdf::Document::load_mem(&pdf).unwrap();

    assert_eq!(doc.objects.len(), 5);
    let pages = doc.get_pages();
    assert_eq!(pages.len(), 1);

    let page_id = *pages.values().next().unwrap();
    let content = doc.get_page_content(page_id).unwrap();
    assert!(content.starts_with(b"BT\n/F1 12 Tf\n72 760 Td\n(Relatorio de Emprestimos) Tj"));
}

#[test]
fn test_empty_lines_parse_with_lopdf() {
    let pdf = encode_pdf_lines(&[], &PdfLayout::default()).unwrap();
    let doc = lopdf::Document::load_mem(&pdf).unwrap();
    assert_eq!(doc.get_pages().len(), 1);
}

proptest! {
    #[test]
    fn prop_offsets_and_startxref_hold(
        title in "\\PC{0,40}",
        rows in proptest::collection::vec(proptest::collection::vec("\\PC{0,12}", 2), 0..20),
    ) {
        let mut ds = ReportDataset { title, ..scenario_b() };
        for row in &rows {
            ds = ds.with_row(row.iter().map(String::as_str));
        }
        let pdf = encode(&ds);

        prop_assert!(pdf.is_ascii());
        let xref_at = xref_keyword_positions(&pdf);
        prop_assert_eq!(xref_at.len(), 1);
        prop_assert_eq!(startxref_value(&pdf), xref_at[0]);

        let entries = xref_entries(&pdf);
        prop_assert_eq!(entries.len(), 6);
        for (i, &(offset, _, _)) in entries.iter().enumerate().skip(1) {
            let expected = format!("{} 0 obj", i);
            prop_assert!(pdf[offset..].starts_with(expected.as_bytes()));
        }
    }
}
