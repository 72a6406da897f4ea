//! Workbook import/export tests

use gfix::core::process_workbook;
use gfix::excel::{WorkbookExporter, WorkbookImporter};
use gfix::types::{CellValue, Sheet, Workbook};
use pretty_assertions::assert_eq;
use rust_xlsxwriter::{ExcelDateTime, Format, Workbook as XlsxWorkbook};
use std::path::Path;
use tempfile::TempDir;

fn write_dates_fixture(path: &Path) {
    let mut workbook = XlsxWorkbook::new();
    let date_format = Format::new().set_num_format("d-mmm");

    let sheet = workbook.add_worksheet();
    sheet.set_name("Sheet1").unwrap();
    sheet.write_string(0, 0, "gene").unwrap();
    sheet
        .write_datetime_with_format(0, 1, &ExcelDateTime::from_ymd(2023, 9, 7).unwrap(), &date_format)
        .unwrap();
    for (row, (y, m, d)) in [(2023, 3, 1), (2023, 12, 1), (2024, 6, 15), (2023, 7, 4)]
        .into_iter()
        .enumerate()
    {
        let row = row as u32 + 1;
        sheet
            .write_datetime_with_format(row, 0, &ExcelDateTime::from_ymd(y, m, d).unwrap(), &date_format)
            .unwrap();
        sheet.write_number(row, 1, f64::from(row)).unwrap();
    }
    sheet.write_string(5, 0, "ST6GAL1").unwrap();
    sheet.write_string(5, 1, "3.14").unwrap();
    sheet.write_boolean(6, 0, true).unwrap();

    let sheet = workbook.add_worksheet();
    sheet.set_name("Second Sheet").unwrap();
    sheet.write_string(0, 0, "id").unwrap();
    sheet.write_string(1, 0, "MARCH1").unwrap();

    workbook.save(path).unwrap();
}

// ═══════════════════════════════════════════════════════════════════════════
// IMPORTER TESTS
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_import_preserves_native_types() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("genes.xlsx");
    write_dates_fixture(&input);

    let workbook = WorkbookImporter::new(&input).import().unwrap();
    assert_eq!(workbook.sheet_names(), vec!["Sheet1", "Second Sheet"]);

    let sheet = workbook.sheet("Sheet1").unwrap();
    assert_eq!(sheet.headers[0], CellValue::text("gene"));
    assert!(matches!(sheet.headers[1], CellValue::DateTime(_)));
    assert!(matches!(sheet.rows[0][0], CellValue::DateTime(_)));
    assert_eq!(sheet.rows[0][1], CellValue::Number(1.0));
    assert_eq!(sheet.rows[4][1], CellValue::text("3.14"));
    assert_eq!(sheet.rows[5][0], CellValue::Bool(true));
    assert_eq!(sheet.rows[5][1], CellValue::Empty);
    assert_eq!(sheet.row_count(), 6);
    assert_eq!(sheet.column_count(), 2);
}

#[test]
fn test_import_missing_file() {
    let result = WorkbookImporter::new("no_such_file.xlsx").import();
    assert!(result.is_err());
}

#[test]
fn test_import_corrupt_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("corrupt.xlsx");
    std::fs::write(&path, b"this is not a zip archive").unwrap();

    let result = WorkbookImporter::new(&path).import();
    assert!(result.is_err());
}

#[test]
fn test_import_keeps_leading_blank_rows_and_columns() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("offset.xlsx");

    let mut workbook = XlsxWorkbook::new();
    let sheet = workbook.add_worksheet();
    sheet.write_string(2, 1, "gene").unwrap();
    sheet.write_string(3, 1, "1-Mar").unwrap();
    workbook.save(&path).unwrap();

    let imported = WorkbookImporter::new(&path).import().unwrap();
    let sheet = &imported.sheets[0];
    assert_eq!(sheet.column_count(), 2);
    assert_eq!(sheet.row_count(), 3);
    assert_eq!(sheet.headers, vec![CellValue::Empty, CellValue::Empty]);
    assert_eq!(sheet.rows[1][1], CellValue::text("gene"));
    assert_eq!(sheet.rows[2][1], CellValue::text("1-Mar"));
}

#[test]
fn test_import_empty_sheet() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("blank.xlsx");

    let mut workbook = XlsxWorkbook::new();
    workbook.add_worksheet().set_name("blank").unwrap();
    workbook.save(&path).unwrap();

    let imported = WorkbookImporter::new(&path).import().unwrap();
    assert_eq!(imported.sheet_names(), vec!["blank"]);
    assert!(imported.sheets[0].is_empty());
}

// ═══════════════════════════════════════════════════════════════════════════
// ROUND TRIP TESTS
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_fix_round_trip_values() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("genes.xlsx");
    let output = dir.path().join("fixed.xlsx");
    write_dates_fixture(&input);

    let workbook = WorkbookImporter::new(&input).import().unwrap();
    let report = process_workbook(&workbook);
    WorkbookExporter::new(report.workbook.clone())
        .export(&output)
        .unwrap();

    let fixed = WorkbookImporter::new(&output).import().unwrap();
    let sheet = fixed.sheet("Sheet1").unwrap();

    assert_eq!(sheet.headers[1], CellValue::text("SEPTIN7"));
    let column: Vec<CellValue> = sheet.rows.iter().map(|r| r[0].clone()).collect();
    assert_eq!(
        column,
        vec![
            CellValue::text("MARCHF1"),
            CellValue::text("DELEC1"),
            CellValue::text("JUN"),
            CellValue::text("JUL-04"),
            CellValue::text("ST6GAL1"),
            CellValue::Bool(true),
        ]
    );
    assert_eq!(sheet.rows[4][1], CellValue::text("3.14"));
    assert_eq!(sheet.rows[0][1], CellValue::Number(1.0));

    let second = fixed.sheet("Second Sheet").unwrap();
    assert_eq!(second.rows[0][0], CellValue::text("MARCHF1"));

    assert_eq!(report.total_changes(), 6);
}

#[test]
fn test_round_trip_preserves_shape() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("genes.xlsx");
    let output = dir.path().join("fixed.xlsx");
    write_dates_fixture(&input);

    let original = WorkbookImporter::new(&input).import().unwrap();
    let report = process_workbook(&original);
    WorkbookExporter::new(report.workbook).export(&output).unwrap();
    let fixed = WorkbookImporter::new(&output).import().unwrap();

    assert_eq!(fixed.sheet_names(), original.sheet_names());
    for (a, b) in original.sheets.iter().zip(&fixed.sheets) {
        assert_eq!(a.row_count(), b.row_count(), "rows differ in {}", a.name);
        assert_eq!(a.column_count(), b.column_count(), "columns differ in {}", a.name);
    }
}

#[test]
fn test_second_run_finds_nothing() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("genes.xlsx");
    let once = dir.path().join("once.xlsx");
    write_dates_fixture(&input);

    let report = process_workbook(&WorkbookImporter::new(&input).import().unwrap());
    WorkbookExporter::new(report.workbook).export(&once).unwrap();

    let again = process_workbook(&WorkbookImporter::new(&once).import().unwrap());
    assert_eq!(again.total_changes(), 0);
}

#[test]
fn test_export_unchanged_date_cell_stays_a_date() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("dates.xlsx");

    let dt = chrono::NaiveDate::from_ymd_opt(2023, 3, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();
    let mut sheet = Sheet::new("raw").with_headers(vec![CellValue::text("when")]);
    sheet.push_row(vec![CellValue::DateTime(dt)]);
    let mut workbook = Workbook::new();
    workbook.add_sheet(sheet);

    WorkbookExporter::new(workbook).export(&output).unwrap();
    let imported = WorkbookImporter::new(&output).import().unwrap();
    assert_eq!(imported.sheets[0].rows[0][0], CellValue::DateTime(dt));
}
