// Copyright 2025 the unitdash Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Unit boundary geometry.
//!
//! Boundaries are small polygons (a few kilometres across), so a local equirectangular
//! projection is accurate enough to draw them and to turn a click position back into a
//! coordinate.

extern crate alloc;

use alloc::vec::Vec;

use kurbo::{BezPath, Point, Rect};

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

/// A WGS84 coordinate in degrees.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LatLng {
    /// Latitude in degrees.
    pub lat: f64,
    /// Longitude in degrees.
    pub lng: f64,
}

impl LatLng {
    /// Creates a new coordinate.
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// Returns the arithmetic mean of the vertices, or `None` for an empty polygon.
pub fn centroid(vertices: &[LatLng]) -> Option<LatLng> {
    if vertices.is_empty() {
        return None;
    }
    let (lat, lng) = vertices
        .iter()
        .fold((0.0, 0.0), |(lat, lng), v| (lat + v.lat, lng + v.lng));
    #[allow(
        clippy::cast_precision_loss,
        reason = "polygon vertex counts are tiny"
    )]
    let n = vertices.len() as f64;
    Some(LatLng::new(lat / n, lng / n))
}

/// Latitude/longitude bounding box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeoBounds {
    /// South-west corner.
    pub min: LatLng,
    /// North-east corner.
    pub max: LatLng,
}

impl GeoBounds {
    /// Returns the bounds of `vertices`, or `None` for an empty polygon.
    pub fn of(vertices: &[LatLng]) -> Option<Self> {
        let first = *vertices.first()?;
        Some(vertices.iter().fold(
            Self {
                min: first,
                max: first,
            },
            |b, v| Self {
                min: LatLng::new(b.min.lat.min(v.lat), b.min.lng.min(v.lng)),
                max: LatLng::new(b.max.lat.max(v.lat), b.max.lng.max(v.lng)),
            },
        ))
    }

    /// Returns the center of the box.
    pub fn center(&self) -> LatLng {
        LatLng::new(
            (self.min.lat + self.max.lat) * 0.5,
            (self.min.lng + self.max.lng) * 0.5,
        )
    }
}

/// A local equirectangular projection that fits a bounding box into a viewport rectangle.
///
/// Longitudes are scaled by `cos(latitude)` at the box center so shapes keep their aspect
/// ratio. The fitted box is centered in the viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FlatProjection {
    origin: LatLng,
    lng_scale: f64,
    scale: f64,
    viewport_center: Point,
}

impl FlatProjection {
    /// Fits `bounds` into `viewport`, leaving `padding` on every side.
    pub fn fit(bounds: GeoBounds, viewport: Rect, padding: f64) -> Self {
        let origin = bounds.center();
        let lng_scale = origin.lat.to_radians().cos();
        let geo_w = (bounds.max.lng - bounds.min.lng) * lng_scale;
        let geo_h = bounds.max.lat - bounds.min.lat;
        let avail_w = (viewport.width() - 2.0 * padding).max(0.0);
        let avail_h = (viewport.height() - 2.0 * padding).max(0.0);
        let scale = match (geo_w > 0.0, geo_h > 0.0) {
            (true, true) => (avail_w / geo_w).min(avail_h / geo_h),
            (true, false) => avail_w / geo_w,
            (false, true) => avail_h / geo_h,
            (false, false) => 1.0,
        };
        Self {
            origin,
            lng_scale,
            scale,
            viewport_center: viewport.center(),
        }
    }

    /// Projects a coordinate into viewport space (y grows downward).
    pub fn project(&self, p: LatLng) -> Point {
        Point::new(
            self.viewport_center.x + (p.lng - self.origin.lng) * self.lng_scale * self.scale,
            self.viewport_center.y - (p.lat - self.origin.lat) * self.scale,
        )
    }

    /// Inverse of [`Self::project`].
    pub fn unproject(&self, p: Point) -> LatLng {
        LatLng::new(
            self.origin.lat - (p.y - self.viewport_center.y) / self.scale,
            self.origin.lng + (p.x - self.viewport_center.x) / (self.lng_scale * self.scale),
        )
    }

    /// Projects a closed polygon into a path.
    pub fn polygon(&self, vertices: &[LatLng]) -> BezPath {
        let mut path = BezPath::new();
        let points: Vec<Point> = vertices.iter().map(|v| self.project(*v)).collect();
        if let Some((first, rest)) = points.split_first() {
            path.move_to(*first);
            for p in rest {
                path.line_to(*p);
            }
            path.close_path();
        }
        path
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use kurbo::Shape;

    use super::*;

    fn section() -> Vec<LatLng> {
        alloc::vec![
            LatLng::new(37.6, -106.3),
            LatLng::new(37.65, -106.25),
            LatLng::new(37.7, -106.3),
            LatLng::new(37.68, -106.35),
            LatLng::new(37.63, -106.37),
        ]
    }

    #[test]
    fn centroid_is_the_vertex_mean() {
        let c = centroid(&section()).expect("non-empty");
        assert!((c.lat - 37.652).abs() < 1e-9, "lat {}", c.lat);
        assert!((c.lng - -106.314).abs() < 1e-9, "lng {}", c.lng);
        assert_eq!(centroid(&[]), None);
    }

    #[test]
    fn bounds_cover_every_vertex() {
        let b = GeoBounds::of(&section()).expect("non-empty");
        assert_eq!(b.min, LatLng::new(37.6, -106.37));
        assert_eq!(b.max, LatLng::new(37.7, -106.25));
    }

    #[test]
    fn projection_fits_the_viewport_and_round_trips() {
        let vertices = section();
        let viewport = Rect::new(0.0, 0.0, 400.0, 300.0);
        let proj = FlatProjection::fit(GeoBounds::of(&vertices).expect("non-empty"), viewport, 20.0);

        let path = proj.polygon(&vertices);
        let bbox = path.bounding_box();
        assert!(bbox.x0 >= 20.0 - 1e-9 && bbox.x1 <= 380.0 + 1e-9, "bbox {bbox:?}");
        assert!(bbox.y0 >= 20.0 - 1e-9 && bbox.y1 <= 280.0 + 1e-9, "bbox {bbox:?}");

        let north = proj.project(LatLng::new(37.7, -106.3));
        let south = proj.project(LatLng::new(37.6, -106.3));
        assert!(north.y < south.y, "north is up");

        let back = proj.unproject(proj.project(vertices[3]));
        assert!((back.lat - vertices[3].lat).abs() < 1e-9);
        assert!((back.lng - vertices[3].lng).abs() < 1e-9);
    }
}
