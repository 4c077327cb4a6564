//! Property tests for sanitizers and document well-formedness

use excelxml::sanitize::{
    sanitize_workbook_title, sanitize_worksheet_title, FORBIDDEN_WORKSHEET_CHARS,
    MAX_WORKSHEET_TITLE_LEN,
};
use excelxml::{CellValue, Workbook};
use proptest::prelude::*;
use quick_xml::events::Event;
use quick_xml::Reader;

fn cell_value() -> impl Strategy<Value = CellValue> {
    prop_oneof![
        Just(CellValue::Empty),
        any::<String>().prop_map(CellValue::String),
        any::<i64>().prop_map(CellValue::Int),
        any::<f64>().prop_map(CellValue::Float),
    ]
}

fn table() -> impl Strategy<Value = Vec<Vec<CellValue>>> {
    prop::collection::vec(prop::collection::vec(cell_value(), 0..6), 0..6)
}

fn assert_well_formed(xml: &str) -> usize {
    let mut reader = Reader::from_str(xml);
    let mut depth = 0i64;
    let mut cells = 0usize;
    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => {
                depth += 1;
                if e.name().as_ref() == b"Cell" {
                    cells += 1;
                }
            }
            Ok(Event::End(_)) => depth -= 1,
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => panic!("malformed document: {e}\n{xml}"),
        }
    }
    assert_eq!(depth, 0);
    cells
}

proptest! {
    #[test]
    fn workbook_title_is_idempotent(s in any::<String>()) {
        let once = sanitize_workbook_title(&s);
        prop_assert_eq!(sanitize_workbook_title(&once), once);
    }

    #[test]
    fn worksheet_title_is_idempotent(s in any::<String>()) {
        let once = sanitize_worksheet_title(&s);
        prop_assert_eq!(sanitize_worksheet_title(&once), once);
    }

    #[test]
    fn worksheet_title_is_bounded(s in any::<String>()) {
        let sanitized = sanitize_worksheet_title(&s);
        prop_assert!(sanitized.chars().count() <= MAX_WORKSHEET_TITLE_LEN);
        prop_assert!(!sanitized.chars().any(|c| FORBIDDEN_WORKSHEET_CHARS.contains(&c)));
    }

    #[test]
    fn workbook_title_uses_whitelist(s in any::<String>()) {
        let sanitized = sanitize_workbook_title(&s);
        prop_assert!(sanitized
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-' || c == '.'));
    }

    #[test]
    fn any_table_renders_well_formed(
        title in any::<String>(),
        rows in table(),
        convert in any::<bool>(),
    ) {
        let expected_cells: usize = rows.iter().map(Vec::len).sum();

        let mut workbook = Workbook::builder().convert_types(convert).build();
        workbook.add_array(title, rows);

        let xml = workbook.render();
        prop_assert_eq!(assert_well_formed(&xml), expected_cells);
        prop_assert_eq!(workbook.render(), xml);
    }
}
