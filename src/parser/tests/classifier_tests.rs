//! Tests for numeric line classification

use super::super::classifier::classify_line;

#[test]
fn test_fused_minus_is_split() {
    let row = classify_line(" 3-4.500E+02  1.0").unwrap();
    assert_eq!(row, vec![3.0, -450.0, 1.0]);
}

#[test]
fn test_table_row_with_negatives() {
    let row = classify_line("     1   -2.0000    1.5000     0.300  -10.00   1").unwrap();
    assert_eq!(row, vec![1.0, -2.0, 1.5, 0.3, -10.0, 1.0]);
}

#[test]
fn test_scientific_notation_row() {
    let row = classify_line("  1.0E-02  2.5e+03  -3.0E-01").unwrap();
    assert_eq!(row.len(), 3);
    assert!((row[0] - 0.01).abs() < 1e-15);
    assert!((row[1] - 2500.0).abs() < 1e-12);
    assert!((row[2] + 0.3).abs() < 1e-15);
}

#[test]
fn test_blank_lines_are_not_rows() {
    assert_eq!(classify_line(""), None);
    assert_eq!(classify_line("     "), None);
    assert_eq!(classify_line("\t"), None);
}

#[test]
fn test_text_lines_are_not_rows() {
    assert_eq!(classify_line(" POINT      X        Y      MACH NO.     ANGLE"), None);
    assert_eq!(classify_line("           (IN)     (IN)                 (DEG)"), None);
    assert_eq!(classify_line("  RC = 6.0000  BMACH = 4.0000"), None);
    assert_eq!(classify_line("     1    0.0000    PT"), None);
}

#[test]
fn test_canonical_form_is_stable() {
    let samples = [
        " 3-4.500E+02  1.0",
        "     1    0.0000    1.0000    4.0000     0.000",
        "        2   0.5000   0.6000   0.7000   0.8000",
        "  0.0000    0.0100    0.0010",
        " 12-3-4 5",
    ];

    for sample in samples {
        let row = classify_line(sample).unwrap();
        let canonical = row
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(" ");
        let again = classify_line(&canonical)
            .unwrap_or_else(|| panic!("canonical form of '{}' is not a row", sample));
        assert_eq!(again.len(), row.len(), "column count changed for '{}'", sample);
    }
}
