//! Radar chart geometry.
//!
//! Axes are spaced `360 / N` degrees apart. Angles are measured clockwise
//! from "up": the conversion subtracts 90° so that axis 0 points straight
//! up in a y-down (SVG) coordinate system.
//!
//! A level `v` sits at `(max_radius / 5) * (v + 1)`. Level 0 is therefore
//! a fifth of the radius, never the center, so an all-zero vector still
//! draws as a small polygon.

use serde::Serialize;

use radar_core::constants::{DEFAULT_LABEL_OFFSET, GRID_RING_COUNT};
use radar_core::errors::GeometryError;
use radar_core::{Level, RiskVector};

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Convert polar coordinates (angle in degrees, 0 = up, clockwise) to
/// Cartesian coordinates around `center`.
pub fn polar_to_cartesian(center: Point, radius: f64, angle_deg: f64) -> Point {
    let rad = (angle_deg - 90.0).to_radians();
    Point {
        x: center.x + radius * rad.cos(),
        y: center.y + radius * rad.sin(),
    }
}

/// Angle of axis `index` out of `axis_count`, in degrees.
pub fn axis_angle(index: usize, axis_count: usize) -> f64 {
    index as f64 * (360.0 / axis_count as f64)
}

/// Distance from the center at which `level` is drawn.
pub fn level_radius(max_radius: f64, level: Level) -> f64 {
    (max_radius / GRID_RING_COUNT as f64) * (f64::from(level.value()) + 1.0)
}

/// One concentric reference polygon.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GridRing {
    /// 1 ..= 5, innermost first.
    pub step: usize,
    pub radius: f64,
    pub points: Vec<Point>,
}

impl GridRing {
    pub fn is_outer(&self) -> bool {
        self.step == GRID_RING_COUNT
    }
}

/// Spoke from the center to the outer ring.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AxisLine {
    pub angle_deg: f64,
    pub from: Point,
    pub to: Point,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LabelAnchor {
    pub text: String,
    pub position: Point,
}

/// Fixed parameters of a radar: where it sits and how many axes it has.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RadarLayout {
    center: Point,
    max_radius: f64,
    axis_count: usize,
    label_offset: f64,
}

impl RadarLayout {
    pub fn new(center: Point, max_radius: f64, axis_count: usize) -> Result<Self, GeometryError> {
        if axis_count == 0 {
            return Err(GeometryError::NoAxes);
        }
        if !max_radius.is_finite() || max_radius <= 0.0 {
            return Err(GeometryError::InvalidRadius { radius: max_radius });
        }
        Ok(Self {
            center,
            max_radius,
            axis_count,
            label_offset: DEFAULT_LABEL_OFFSET,
        })
    }

    /// Layout for a square chart of edge `size`: centered, with `margin`
    /// left between the outer ring and the edge for labels.
    pub fn for_chart(size: f64, margin: f64, axis_count: usize) -> Result<Self, GeometryError> {
        let max_radius = size / 2.0 - margin;
        if !(max_radius > 0.0) {
            return Err(GeometryError::ChartTooSmall { size, margin });
        }
        Self::new(Point::new(size / 2.0, size / 2.0), max_radius, axis_count)
    }

    #[must_use]
    pub fn with_label_offset(mut self, offset: f64) -> Self {
        self.label_offset = offset;
        self
    }

    pub fn center(&self) -> Point {
        self.center
    }

    pub fn max_radius(&self) -> f64 {
        self.max_radius
    }

    pub fn axis_count(&self) -> usize {
        self.axis_count
    }

    pub fn label_offset(&self) -> f64 {
        self.label_offset
    }

    pub fn angle(&self, index: usize) -> f64 {
        axis_angle(index, self.axis_count)
    }

    /// Point on axis `index` at `radius`.
    pub fn point(&self, index: usize, radius: f64) -> Point {
        polar_to_cartesian(self.center, radius, self.angle(index))
    }

    /// Reference rings at 1/5 … 5/5 of the radius.
    pub fn grid_rings(&self) -> Vec<GridRing> {
        (1..=GRID_RING_COUNT)
            .map(|step| {
                let radius = (self.max_radius / GRID_RING_COUNT as f64) * step as f64;
                GridRing {
                    step,
                    radius,
                    points: (0..self.axis_count).map(|i| self.point(i, radius)).collect(),
                }
            })
            .collect()
    }

    pub fn axes(&self) -> Vec<AxisLine> {
        (0..self.axis_count)
            .map(|i| AxisLine {
                angle_deg: self.angle(i),
                from: self.center,
                to: self.point(i, self.max_radius),
            })
            .collect()
    }

    /// Vertices of the data polygon, one per axis.
    pub fn data_polygon(&self, levels: &[Level]) -> Result<Vec<Point>, GeometryError> {
        self.check_len(levels.len())?;
        Ok(levels
            .iter()
            .enumerate()
            .map(|(i, level)| self.point(i, level_radius(self.max_radius, *level)))
            .collect())
    }

    /// Label positions just beyond the outer ring.
    pub fn label_anchors<S: AsRef<str>>(
        &self,
        labels: &[S],
    ) -> Result<Vec<LabelAnchor>, GeometryError> {
        self.check_len(labels.len())?;
        let radius = self.max_radius + self.label_offset;
        Ok(labels
            .iter()
            .enumerate()
            .map(|(i, text)| LabelAnchor {
                text: text.as_ref().to_string(),
                position: self.point(i, radius),
            })
            .collect())
    }

    /// Full chart geometry for the given labels and levels.
    pub fn build<S: AsRef<str>>(
        &self,
        labels: &[S],
        levels: &[Level],
    ) -> Result<RadarGeometry, GeometryError> {
        Ok(RadarGeometry {
            layout: *self,
            rings: self.grid_rings(),
            axes: self.axes(),
            data: self.data_polygon(levels)?,
            labels: self.label_anchors(labels)?,
        })
    }

    /// Geometry for a risk vector, one axis per dimension.
    pub fn build_for_vector<S: AsRef<str>>(
        &self,
        labels: &[S],
        vector: &RiskVector,
    ) -> Result<RadarGeometry, GeometryError> {
        self.build(labels, vector.levels())
    }

    fn check_len(&self, actual: usize) -> Result<(), GeometryError> {
        if actual == self.axis_count {
            Ok(())
        } else {
            Err(GeometryError::LengthMismatch {
                expected: self.axis_count,
                actual,
            })
        }
    }
}

/// Everything needed to draw one radar chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RadarGeometry {
    pub layout: RadarLayout,
    pub rings: Vec<GridRing>,
    pub axes: Vec<AxisLine>,
    pub data: Vec<Point>,
    pub labels: Vec<LabelAnchor>,
}
