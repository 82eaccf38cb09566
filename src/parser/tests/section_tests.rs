//! Tests for section classification and the per-kind handlers

use super::super::diagnostics::{DiagnosticKind, ParseContext};
use super::super::section::{classify_title, dispatch_section};
use super::{FIXTURE_TITLE, fixture_section, heading, lines};
use crate::error::ConturError;
use crate::models::{Parameter, ParameterGroup, SectionKind};

fn dispatch(section: &[String], offset: usize, ctx: &mut ParseContext) -> crate::Result<crate::Section> {
    dispatch_section(section, offset, FIXTURE_TITLE, ctx)
}

fn with_heading(title: &str, body: &[&str]) -> Vec<String> {
    let mut section = vec![heading(title)];
    section.extend(lines(body));
    section
}

#[test]
fn test_compound_heading_is_inviscid_contour() {
    let (kind, title) = classify_title(
        &heading("INVISCID CONTOUR FROM THROAT CHARACTERISTIC"),
        FIXTURE_TITLE,
    )
    .unwrap();

    assert_eq!(kind, SectionKind::InviscidContour);
    assert!(title.ends_with("INVISCID CONTOUR FROM THROAT CHARACTERISTIC"));
    assert!(!title.contains(FIXTURE_TITLE));
}

#[test]
fn test_single_match_headings() {
    let cases = [
        ("NOZZLE CONTOUR", SectionKind::NozzleContour),
        ("THROAT CHARACTERISTIC", SectionKind::ThroatCharacteristic),
        (
            "INTERMEDIATE LEFT CHARACTERISTIC",
            SectionKind::IntermediateLeftCharacteristic,
        ),
        (
            "COORDINATES AND DERIVATIVES (CONT.)",
            SectionKind::CoordinatesAndDerivatives,
        ),
    ];
    for (text, expected) in cases {
        let (kind, _) = classify_title(&heading(text), FIXTURE_TITLE).unwrap();
        assert_eq!(kind, expected, "heading '{}'", text);
    }
}

#[test]
fn test_unknown_heading() {
    let result = classify_title(&heading("MASS FLOW SUMMARY"), FIXTURE_TITLE);
    assert!(matches!(result, Err(ConturError::UnknownSection { .. })));
}

#[test]
fn test_ambiguous_heading() {
    let result = classify_title(
        &heading("NOZZLE CONTOUR AND UPSTREAM CONTOUR"),
        FIXTURE_TITLE,
    );
    match result {
        Err(ConturError::AmbiguousSection { matches, .. }) => {
            assert!(matches.contains("NOZZLE CONTOUR"));
            assert!(matches.contains("UPSTREAM CONTOUR"));
        }
        other => panic!("expected an ambiguous section, got {:?}", other),
    }
}

#[test]
fn test_generic_section_tables_and_parameters() {
    let mut ctx = ParseContext::new();
    let section = dispatch(&fixture_section(8..17), 8, &mut ctx).unwrap();

    assert_eq!(section.kind, SectionKind::NozzleContour);
    assert_eq!(section.line_ranges, vec![8..17]);
    assert_eq!(section.tables.len(), 1);

    let table = &section.tables[0];
    assert_eq!(table.headers(), &["POINT", "X", "Y", "Mach", "ANGLE"]);
    assert_eq!(table.len(), 3);
    assert_eq!(table.column("ANGLE").unwrap(), vec![0.0, -0.5, -1.0]);

    assert_eq!(
        section.parameters,
        vec![
            ParameterGroup::Values(vec![
                Parameter::new("RC", Some(6.0)),
                Parameter::new("BMACH", Some(4.0)),
                Parameter::new("ETAD", Some(12.0)),
            ]),
            ParameterGroup::TableMarker(1),
            ParameterGroup::Values(vec![Parameter::new("FLOW", Some(12300.0))]),
        ]
    );
    assert!(ctx.diagnostics().is_empty());
}

#[test]
fn test_characteristic_columns_are_relabelled() {
    let mut ctx = ParseContext::new();
    let section = dispatch(&fixture_section(0..8), 0, &mut ctx).unwrap();

    assert_eq!(section.kind, SectionKind::ThroatCharacteristic);
    assert_eq!(section.tables[0].headers(), &["POINT", "X", "Y", "MACH"]);
    assert_eq!(section.tables[0].len(), 4);
}

#[test]
fn test_characteristic_without_table() {
    let section = with_heading("THROAT CHARACTERISTIC", &["  PSI = 12.5000"]);
    let result = dispatch(&section, 0, &mut ParseContext::new());

    assert!(matches!(result, Err(ConturError::MissingTable { .. })));
}

#[test]
fn test_upstream_contour_header() {
    let mut ctx = ParseContext::new();
    let section = dispatch(&fixture_section(17..24), 17, &mut ctx).unwrap();

    let table = &section.tables[0];
    assert_eq!(
        table.headers(),
        &["POINT", "X_over_YO", "Y_over_YO", "MACH", "ANGLE", "POINT1"]
    );
    assert_eq!(table.column("POINT1").unwrap(), vec![1.0, 2.0, 3.0]);
}

#[test]
fn test_upstream_contour_without_header_line() {
    let section = with_heading("UPSTREAM CONTOUR", &["  1  -2.0  1.5  0.3  -10.0  1"]);
    let result = dispatch(&section, 0, &mut ParseContext::new());

    assert!(matches!(result, Err(ConturError::MalformedTable { .. })));
}

#[test]
fn test_inviscid_contour_tables_are_merged() {
    let mut ctx = ParseContext::new();
    let section = dispatch(&fixture_section(24..34), 24, &mut ctx).unwrap();

    assert_eq!(section.kind, SectionKind::InviscidContour);
    assert_eq!(section.tables.len(), 1);

    let table = &section.tables[0];
    assert_eq!(
        table.headers(),
        &[
            "POINT",
            "X_over_YO",
            "Y_over_YO",
            "INT_Y_over_YO",
            "PAR_over_YO",
            "HYP_over_YO",
            "C_Y",
            "C_YI",
            "C_YP",
        ]
    );
    assert_eq!(table.len(), 4);

    let first = &table.rows()[0];
    assert_eq!(&first[..6], &[1.0, 0.0, 1.0, 1.0, 1.0, 1.0]);
    assert!(first[6..].iter().all(|v| v.is_nan()));
    assert_eq!(table.column("POINT").unwrap(), vec![1.0, 2.0, 3.0, 4.0]);
}

#[test]
fn test_inviscid_header_falls_back_to_whitespace_split() {
    let section = with_heading(
        "INVISCID CONTOUR",
        &[
            "  XOI = 0.1000",
            "  POINT     X/YO      Y/YO",
            "",
            "      1    0.5000-0.2500",
            "      2    1.0000-0.5000",
        ],
    );
    let mut ctx = ParseContext::new();
    let section = dispatch(&section, 0, &mut ctx).unwrap();

    assert_eq!(section.tables.len(), 1);
    assert_eq!(
        section.tables[0].headers(),
        &["POINT", "X_over_YO", "Y_over_YO"]
    );
    assert_eq!(section.tables[0].column("Y_over_YO").unwrap(), vec![-0.25, -0.5]);
    assert!(ctx.diagnostics().is_empty());
}

#[test]
fn test_inviscid_leading_table_must_be_one_row() {
    let section = with_heading(
        "INVISCID CONTOUR",
        &[
            "",
            "",
            "",
            "  POINT C(Y)",
            "  1  2",
            "  2  3",
            "",
            "",
            "  1  2  3",
        ],
    );
    let result = dispatch(&section, 0, &mut ParseContext::new());

    assert!(matches!(result, Err(ConturError::MalformedTable { .. })));
}

#[test]
fn test_boundary_layer_rows_gain_extra_columns() {
    let mut ctx = ParseContext::new();
    let section = dispatch(&fixture_section(34..46), 34, &mut ctx).unwrap();

    assert_eq!(section.kind, SectionKind::BoundaryLayerCalculations);
    let table = &section.tables[0];
    assert_eq!(table.headers(), &["X", "DELTA", "THETA", "CF", "RE"]);
    assert_eq!(table.column("X").unwrap(), vec![0.0, 1.0, 2.0]);
    assert_eq!(table.column("CF").unwrap(), vec![0.002, 0.003, 0.004]);
    assert_eq!(table.column("RE").unwrap(), vec![1.5e6, 2.5e6, 3.5e6]);
    assert!(ctx.diagnostics().is_empty());
}

#[test]
fn test_boundary_layer_malformed_rows_are_skipped() {
    let section = with_heading(
        "BOUNDARY LAYER CALCULATIONS",
        &[
            "  PR = 0.7100",
            "      X     DELTA     THETA",
            "",
            "  0.0000    0.0100    0.0010",
            "  CF = 0.0020  RE = 1.50E+06",
            "  1.0000    0.0200    0.0020",
            "  CF = ****  RE = 2.50E+06",
            "  2.0000    0.0300    0.0030",
            "  CF = 0.0040",
            "  3.0000    0.0400    0.0040",
            "  CF = 0.0050  RE = 4.50E+06",
        ],
    );
    let mut ctx = ParseContext::new();
    let section = dispatch(&section, 100, &mut ctx).unwrap();

    let table = &section.tables[0];
    assert_eq!(table.headers(), &["X", "DELTA", "THETA", "CF", "RE"]);
    assert_eq!(table.column("X").unwrap(), vec![0.0, 3.0]);

    let diagnostics = ctx.diagnostics();
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].kind, DiagnosticKind::MalformedRow);
    assert_eq!(diagnostics[0].line, Some(106));
}

#[test]
fn test_boundary_layer_with_station_column_is_plain() {
    let section = with_heading(
        "BOUNDARY LAYER CALCULATIONS",
        &[
            "  PR = 0.7100",
            "",
            "",
            "",
            "    STA     X     DELTA",
            "",
            "      1   0.0000    0.0100",
            "      2   1.0000    0.0200",
        ],
    );
    let section = dispatch(&section, 0, &mut ParseContext::new()).unwrap();

    assert_eq!(section.tables.len(), 1);
    assert_eq!(section.tables[0].headers(), &["STA", "X", "DELTA"]);
    assert_eq!(section.tables[0].len(), 2);
}

#[test]
fn test_short_boundary_layer_section() {
    let section = with_heading("BOUNDARY LAYER CALCULATIONS", &["  PR = 0.7100", ""]);
    let result = dispatch(&section, 0, &mut ParseContext::new());

    assert!(matches!(
        result,
        Err(ConturError::LineOutOfRange { index: 5, len: 3 })
    ));
}

#[test]
fn test_short_row_inside_table_is_skipped() {
    let section = with_heading(
        "NOZZLE CONTOUR",
        &[
            "  RC = 6.0000",
            "       X       Y   ANGLE",
            "",
            "  0.0000  1.0000  0.0000",
            "  1.0000  1.2000",
            "  2.0000  1.4000  0.1000",
            "  3.0000  1.5000  0.0000",
        ],
    );
    let mut ctx = ParseContext::new();
    let section = dispatch(&section, 20, &mut ctx).unwrap();

    assert_eq!(section.tables.len(), 1);
    assert_eq!(section.tables[0].headers(), &["X", "Y", "ANGLE"]);
    assert_eq!(
        section.tables[0].column("X").unwrap(),
        vec![0.0, 2.0, 3.0]
    );
    assert_eq!(
        section.parameters,
        vec![
            ParameterGroup::Values(vec![Parameter::new("RC", Some(6.0))]),
            ParameterGroup::TableMarker(1),
        ]
    );

    let diagnostics = ctx.diagnostics();
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].kind, DiagnosticKind::MalformedRow);
    assert_eq!(diagnostics[0].line, Some(25));
}
