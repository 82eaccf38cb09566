//! Report vocabulary and parsing constants
//!
//! This module contains the section titles, column markers, header
//! replacement tables and defaults that encode the layout of CONTUR
//! output reports.

// =============================================================================
// Report Layout
// =============================================================================

/// Character span of the first report line that holds the repeated title marker
pub const TITLE_SPAN: (usize, usize) = (10, 20);

/// Default number of samples per refined contour segment
pub const DEFAULT_REFINE_POINTS: usize = 21;

// =============================================================================
// Section Vocabulary
// =============================================================================

/// Section title phrases, in dispatch priority order
pub mod titles {
    pub const NOZZLE_CONTOUR: &str = "NOZZLE CONTOUR";
    pub const UPSTREAM_CONTOUR: &str = "UPSTREAM CONTOUR";
    pub const INTERMEDIATE_RIGHT_CHARACTERISTIC: &str = "INTERMEDIATE RIGHT CHARACTERISTIC";
    pub const INTERMEDIATE_LEFT_CHARACTERISTIC: &str = "INTERMEDIATE LEFT CHARACTERISTIC";
    pub const BOUNDARY_LAYER_CALCULATIONS: &str = "BOUNDARY LAYER CALCULATIONS";
    pub const INVISCID_CONTOUR: &str = "INVISCID CONTOUR";
    pub const THROAT_VELOCITY_DISTRIBUTION: &str = "THROAT VELOCITY DISTRIBUTION";
    pub const THROAT_CHARACTERISTIC: &str = "THROAT CHARACTERISTIC";
    pub const COORDINATES_AND_DERIVATIVES: &str = "COORDINATES AND DERIVATIVES";

    /// Marker that, together with [`INVISCID_CONTOUR`], identifies the compound title
    pub const FROM_THROAT_CHARACTERISTIC: &str = "FROM THROAT CHARACTERISTIC";
}

/// Boundary layer sections carrying this label on line 5 have a plain layout
pub const STATION_MARKER: &str = "STA";

/// Line index checked for [`STATION_MARKER`]
pub const STATION_MARKER_LINE: usize = 5;

/// Inviscid contour sections with this column label on line 4 hold a split table
pub const INVISCID_SPLIT_MARKER: &str = "C(Y)";

/// Line index checked for [`INVISCID_SPLIT_MARKER`]
pub const INVISCID_SPLIT_MARKER_LINE: usize = 4;

/// Header of the merged inviscid contour table
pub const INVISCID_MERGED_HEADER: &[&str] = &[
    "POINT", "X/YO", "Y/YO", "INT.Y/YO", "PAR/YO", "HYP/YO", "C(Y)", "C(YI)", "C(YP)",
];

// =============================================================================
// Column Naming
// =============================================================================

/// Canonical name for point index columns
pub const POINT_COLUMN: &str = "POINT";

/// Canonical name for axial position columns
pub const POSITION_COLUMN: &str = "X";

/// Trailing point index column of upstream contour tables
pub const TRAILING_POINT_COLUMN: &str = "POINT1";

/// Column holding the Mach number after sanitization
pub const MACH_COLUMN: &str = "Mach";

/// Prefix for generated placeholder column names
pub const UNTITLED_PREFIX: &str = "Untitled";

/// Whole-phrase replacements applied before character sanitization
pub const PHRASE_REPLACEMENTS: &[(&str, &str)] = &[("MACH NO.", "Mach")];

/// Punctuation spelled out inside identifiers
pub const PUNCTUATION_WORDS: &[(char, &str)] =
    &[('.', "_"), ('*', "star_"), ('/', "_over_"), ('+', "_plus_")];
