use genolens::application::services::TablePreview;
use genolens::domain::Table;

fn table_with_rows(columns: &[&str], rows: &[&[&str]]) -> Table {
    let mut table = Table::new(columns.iter().map(|c| c.to_string()).collect());
    for row in rows {
        table.push_row_padded(row.iter().map(|v| v.to_string()).collect());
    }
    table
}

#[test]
fn given_recognizable_columns_when_detecting_then_matches_case_insensitively_in_order() {
    let table = table_with_rows(&["Gene_Symbol", "Chrom", "unrelated"], &[]);

    let preview = TablePreview::of(&table, 20);

    assert_eq!(preview.detected_columns(), ["Gene_Symbol", "Chrom"]);
}

#[test]
fn given_more_than_six_matches_when_detecting_then_caps_at_six() {
    let table = table_with_rows(
        &["gene", "genes", "symbol", "chrom", "pos", "ref", "alt"],
        &[],
    );

    let preview = TablePreview::of(&table, 20);

    assert_eq!(preview.detected_columns().len(), 6);
    assert_eq!(
        preview.detected_columns(),
        ["gene", "genes", "symbol", "chrom", "pos", "ref"]
    );
}

#[test]
fn given_no_recognizable_columns_when_detecting_then_returns_empty() {
    let table = table_with_rows(&["sample", "quality"], &[]);

    let preview = TablePreview::of(&table, 20);

    assert!(preview.detected_columns().is_empty());
}

#[test]
fn given_table_larger_than_limit_when_previewing_then_keeps_first_rows_only() {
    let rows: Vec<Vec<String>> = (0..50).map(|i| vec![i.to_string()]).collect();
    let mut table = Table::new(vec!["n".to_string()]);
    for row in rows {
        table.push_row_padded(row);
    }

    let preview = TablePreview::of(&table, 20);

    assert_eq!(preview.rows().len(), 20);
    assert_eq!(preview.total_rows(), 50);
    assert_eq!(preview.rows()[0], ["0"]);
    assert_eq!(preview.rows()[19], ["19"]);
}

#[test]
fn given_preview_when_serializing_then_csv_has_headers_and_bounded_rows() {
    let table = table_with_rows(&["CHROM", "POS"], &[&["1", "100"], &["2", "250"]]);

    let csv = TablePreview::of(&table, 1).to_csv();

    assert_eq!(csv, "CHROM,POS\n1,100\n");
}

#[test]
fn given_ragged_input_rows_when_building_table_then_width_invariant_holds() {
    let mut table = Table::new(vec!["a".to_string(), "b".to_string()]);
    table.push_row_padded(vec!["1".to_string()]);
    table.push_row_padded(vec!["1".to_string(), "2".to_string(), "3".to_string()]);

    for row in table.rows() {
        assert_eq!(row.len(), table.columns().len());
    }
    assert_eq!(table.rows()[0], ["1", ""]);
    assert_eq!(table.rows()[1], ["1", "2"]);
}

#[test]
fn given_short_row_when_pushing_strictly_then_row_is_dropped() {
    let mut table = Table::new(vec!["a".to_string(), "b".to_string()]);

    assert!(!table.push_row_strict(vec!["1".to_string()]));
    assert!(table.push_row_strict(vec!["1".to_string(), "2".to_string(), "3".to_string()]));

    assert_eq!(table.row_count(), 1);
    assert_eq!(table.rows()[0], ["1", "2"]);
}
