//! Head size compliance checking.
//!
//! Re-measures the chin-to-head distance after the layout transform and
//! classifies it against the measurement standard. The result is advisory:
//! it drives the optional overlay and the report, and never blocks output.

mod report;

pub use report::{ComplianceIssue, ComplianceReport, IssueCode, IssueContext, Severity};

use serde::Serialize;

use crate::face::DimensionDrift;
use crate::geo::{Resolution, Vector2d};
use crate::layout::{LayoutPlan, Placement};
use crate::standards::MeasurementStandard;

/// How far outside the ideal range a head may be and still count as borderline.
pub const BORDERLINE_TOLERANCE_MM: f64 = 1.0;

/// Classification of a measured head size.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HeadSizeClass {
    /// Within the ideal range.
    Compliant,
    /// Outside the ideal range by at most [`BORDERLINE_TOLERANCE_MM`], and
    /// still within the outer range.
    Borderline,
    /// Anything else.
    NonCompliant,
}

impl HeadSizeClass {
    /// Short label used on overlays and in reports.
    pub fn label(self) -> &'static str {
        match self {
            HeadSizeClass::Compliant => "OK",
            HeadSizeClass::Borderline => "borderline",
            HeadSizeClass::NonCompliant => "illegal",
        }
    }
}

/// A measured head size and its classification.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct HeadSizeMeasurement {
    pub size_mm: f64,
    pub class: HeadSizeClass,
}

/// Classifies a chin-to-head size in millimeters.
pub fn classify_head_size(size_mm: f64, standard: &MeasurementStandard) -> HeadSizeClass {
    let ideal = &standard.chin_to_head_ideal;
    if ideal.contains(size_mm) {
        HeadSizeClass::Compliant
    } else if ideal.distance_to(size_mm) <= BORDERLINE_TOLERANCE_MM
        && standard.chin_to_head.contains(size_mm)
    {
        HeadSizeClass::Borderline
    } else {
        HeadSizeClass::NonCompliant
    }
}

/// Measures the transformed top and chin points and classifies the result.
pub fn evaluate_head_size(
    top_px: Vector2d,
    chin_px: Vector2d,
    standard: &MeasurementStandard,
    resolution: Resolution,
) -> HeadSizeMeasurement {
    let size_mm = resolution.to_mm((chin_px - top_px).length());
    HeadSizeMeasurement {
        size_mm,
        class: classify_head_size(size_mm, standard),
    }
}

/// Head size measurement for one placement of a plan.
pub fn measure_placement(plan: &LayoutPlan, placement: &Placement) -> HeadSizeMeasurement {
    evaluate_head_size(
        placement.transform.apply(plan.geometry.top),
        placement.transform.apply(plan.geometry.chin),
        plan.config.standard(),
        plan.config.resolution,
    )
}

/// Checks a whole plan and collects the findings.
pub fn check_plan(plan: &LayoutPlan, drift: Option<DimensionDrift>) -> ComplianceReport {
    let mut report = ComplianceReport::new();

    if let Some(drift) = drift {
        report.add(ComplianceIssue::warning(
            IssueCode::DimensionDrift,
            format!(
                "Landmarks were recorded on a {} x {} image, but the image is {} x {}",
                drift.recorded.0, drift.recorded.1, drift.actual.0, drift.actual.1
            ),
            IssueContext::Document,
        ));
    }

    if plan.placements.is_empty() {
        report.add(ComplianceIssue::warning(
            IssueCode::NoPlacements,
            format!(
                "Canvas {:.1} x {:.1} mm cannot hold a single {:.1} x {:.1} mm image",
                plan.config.canvas_mm.x,
                plan.config.canvas_mm.y,
                plan.dimensions.outlined_mm.x,
                plan.dimensions.outlined_mm.y
            ),
            IssueContext::Document,
        ));
    }

    let ideal = plan.config.standard().chin_to_head_ideal;
    for placement in &plan.placements {
        let head = measure_placement(plan, placement);
        let context = IssueContext::Placement {
            index: placement.index,
        };
        match head.class {
            HeadSizeClass::Compliant => {}
            HeadSizeClass::Borderline => report.add(ComplianceIssue::warning(
                IssueCode::HeadSizeBorderline,
                format!(
                    "Head-to-chin {:.1} mm is just outside the ideal range {}",
                    head.size_mm, ideal
                ),
                context,
            )),
            HeadSizeClass::NonCompliant => report.add(ComplianceIssue::error(
                IssueCode::HeadSizeNonCompliant,
                format!(
                    "Head-to-chin {:.1} mm is outside the ideal range {}",
                    head.size_mm, ideal
                ),
                context,
            )),
        }
        report.head_sizes.push(head);
    }

    report
}
