//! Core data structures shared across the report parser.
//!
//! Defines section kinds, scalar parameter records and refined curve
//! samples used throughout the library.

use crate::constants::titles;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Computational stage a report section belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SectionKind {
    NozzleContour,
    UpstreamContour,
    IntermediateRightCharacteristic,
    IntermediateLeftCharacteristic,
    BoundaryLayerCalculations,
    InviscidContour,
    ThroatVelocityDistribution,
    ThroatCharacteristic,
    CoordinatesAndDerivatives,
}

impl SectionKind {
    /// All kinds in dispatch order
    pub const ALL: [SectionKind; 9] = [
        SectionKind::NozzleContour,
        SectionKind::UpstreamContour,
        SectionKind::IntermediateRightCharacteristic,
        SectionKind::IntermediateLeftCharacteristic,
        SectionKind::BoundaryLayerCalculations,
        SectionKind::InviscidContour,
        SectionKind::ThroatVelocityDistribution,
        SectionKind::ThroatCharacteristic,
        SectionKind::CoordinatesAndDerivatives,
    ];

    /// Title phrase that identifies this kind inside a section heading
    pub fn title(&self) -> &'static str {
        match self {
            SectionKind::NozzleContour => titles::NOZZLE_CONTOUR,
            SectionKind::UpstreamContour => titles::UPSTREAM_CONTOUR,
            SectionKind::IntermediateRightCharacteristic => {
                titles::INTERMEDIATE_RIGHT_CHARACTERISTIC
            }
            SectionKind::IntermediateLeftCharacteristic => titles::INTERMEDIATE_LEFT_CHARACTERISTIC,
            SectionKind::BoundaryLayerCalculations => titles::BOUNDARY_LAYER_CALCULATIONS,
            SectionKind::InviscidContour => titles::INVISCID_CONTOUR,
            SectionKind::ThroatVelocityDistribution => titles::THROAT_VELOCITY_DISTRIBUTION,
            SectionKind::ThroatCharacteristic => titles::THROAT_CHARACTERISTIC,
            SectionKind::CoordinatesAndDerivatives => titles::COORDINATES_AND_DERIVATIVES,
        }
    }

    /// CamelCase name, used for view grouping and export file names
    pub fn name(&self) -> &'static str {
        match self {
            SectionKind::NozzleContour => "NozzleContour",
            SectionKind::UpstreamContour => "UpstreamContour",
            SectionKind::IntermediateRightCharacteristic => "IntermediateRightCharacteristic",
            SectionKind::IntermediateLeftCharacteristic => "IntermediateLeftCharacteristic",
            SectionKind::BoundaryLayerCalculations => "BoundaryLayerCalculations",
            SectionKind::InviscidContour => "InviscidContour",
            SectionKind::ThroatVelocityDistribution => "ThroatVelocityDistribution",
            SectionKind::ThroatCharacteristic => "ThroatCharacteristic",
            SectionKind::CoordinatesAndDerivatives => "CoordinatesAndDerivatives",
        }
    }

    pub fn is_characteristic(&self) -> bool {
        self.name().contains("Characteristic")
    }

    pub fn is_contour(&self) -> bool {
        self.name().contains("Contour")
    }

    pub fn is_boundary_layer(&self) -> bool {
        self.name().contains("BoundaryLayer")
    }
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A `name = value` annotation; `value` is `None` when no digits followed the `=`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,
    pub value: Option<f64>,
}

impl Parameter {
    pub fn new(name: impl Into<String>, value: Option<f64>) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// One entry of a section's parameter timeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ParameterGroup {
    /// Annotations found on one non-table line, in reading order
    Values(Vec<Parameter>),
    /// Position of table block `n` (1-based) among the annotations
    TableMarker(usize),
}

impl ParameterGroup {
    /// Parameters of a value group, empty for a table marker
    pub fn parameters(&self) -> &[Parameter] {
        match self {
            ParameterGroup::Values(params) => params,
            ParameterGroup::TableMarker(_) => &[],
        }
    }
}

/// One sample of a refined contour
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurvePoint {
    pub x: f64,
    pub y: f64,
}

impl CurvePoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}
