//! # Stereographic projection of the sky
//!
//! The celestial sphere, seen from the observer, is mapped onto a plane tangent at the
//! projection center `(λ0, φ1)` given in horizontal coordinates. The mapping is conformal:
//! circles on the sphere remain circles (or lines) on the plane, which is why horizontal
//! parallels of altitude can be drawn as circles.
//!
//! ## Degenerate geometry
//!
//! - The antipode of the center is sent to infinity. [`StereographicProjection::apply`] does not
//!   clamp this case: callers must discard points whose coordinates are not finite.
//! - The inverse mapping at the exact plane origin returns the projection center, and points
//!   at infinity are mapped back to the antipode.
//! - The parallel of altitude `−φ1` passes through the antipode and is projected onto the
//!   straight line `y = −tan φ1` instead of a circle, see [`ParallelImage`].
use std::fmt;

use tracing::trace;

use crate::{
    constants::Radian,
    coordinates::{conversions::Transform, CartesianCoordinates, HorizontalCoordinates},
    math::angle,
};

/// Below this magnitude the denominator `sin(alt) + sin(φ1)` is treated as zero.
const DEGENERATE_EPSILON: f64 = 1e-12;

/// Image of a horizontal parallel of altitude on the projection plane.
#[derive(Debug, Clone, Copy)]
pub enum ParallelImage {
    Circle {
        center: CartesianCoordinates,
        radius: f64,
    },
    /// The parallel through the antipode of the center, projected to a horizontal line.
    Line { y: f64 },
}

/// Stereographic projection centred on a direction of the local sky.
#[derive(Debug, Clone, Copy)]
pub struct StereographicProjection {
    center: HorizontalCoordinates,
    cos_center_lat: f64,
    sin_center_lat: f64,
}

impl StereographicProjection {
    pub fn new(center: HorizontalCoordinates) -> Self {
        let (sin_center_lat, cos_center_lat) = center.alt().sin_cos();
        StereographicProjection {
            center,
            cos_center_lat,
            sin_center_lat,
        }
    }

    pub fn center(&self) -> &HorizontalCoordinates {
        &self.center
    }

    fn parallel_denominator(&self, parallel: &HorizontalCoordinates) -> Option<f64> {
        let denominator = parallel.alt().sin() + self.sin_center_lat;
        if denominator.abs() < DEGENERATE_EPSILON {
            trace!(alt = parallel.alt(), "parallel through the antipode of the center");
            None
        } else {
            Some(denominator)
        }
    }

    /// Center of the circle onto which the parallel of `parallel`'s altitude is projected.
    ///
    /// Return
    /// ------
    /// * `(0, cos φ1 / (sin(alt) + sin φ1))`, or `None` for the degenerate parallel `alt = −φ1`
    ///   which is projected onto a line
    pub fn circle_center_for_parallel(
        &self,
        parallel: &HorizontalCoordinates,
    ) -> Option<CartesianCoordinates> {
        self.parallel_denominator(parallel)
            .map(|denominator| CartesianCoordinates::new(0.0, self.cos_center_lat / denominator))
    }

    /// Radius of the circle onto which the parallel of `parallel`'s altitude is projected.
    ///
    /// Return
    /// ------
    /// * `cos(alt) / (sin(alt) + sin φ1)`, or exactly [`f64::INFINITY`] for the degenerate
    ///   parallel `alt = −φ1`
    pub fn circle_radius_for_parallel(&self, parallel: &HorizontalCoordinates) -> f64 {
        self.parallel_denominator(parallel)
            .map_or(f64::INFINITY, |denominator| {
                parallel.alt().cos() / denominator
            })
    }

    /// Circle or line onto which the parallel of `parallel`'s altitude is projected.
    pub fn parallel_image(&self, parallel: &HorizontalCoordinates) -> ParallelImage {
        match self.parallel_denominator(parallel) {
            Some(denominator) => ParallelImage::Circle {
                center: CartesianCoordinates::new(0.0, self.cos_center_lat / denominator),
                radius: parallel.alt().cos() / denominator,
            },
            None => ParallelImage::Line {
                y: -self.sin_center_lat / self.cos_center_lat,
            },
        }
    }

    /// Projected diameter of a sphere of angular size `rad` seen at the projection center.
    pub fn apply_to_angle(&self, rad: Radian) -> f64 {
        2.0 * (rad / 4.0).tan()
    }

    /// Inverse projection: the horizontal coordinates of a point of the plane.
    ///
    /// ```text
    /// ρ = √(x² + y²),  sin c = 2ρ / (ρ² + 1),  cos c = (1 − ρ²) / (ρ² + 1)
    /// λ = atan2(x·sin c, ρ·cos φ1·cos c − y·sin φ1·sin c) + λ0
    /// φ = asin(cos c·sin φ1 + y·sin c·cos φ1 / ρ)
    /// ```
    ///
    /// The origin (`ρ = 0`) is mapped back to the projection center. Points at infinity, and
    /// points with non-finite coordinates such as the image of the antipode, are mapped to the
    /// antipode of the center `(λ0 + π, −φ1)`. Beyond `ρ = 1` the half-angle terms are evaluated
    /// on `1/ρ` so that `ρ²` never overflows.
    pub fn inverse_apply(&self, xy: &CartesianCoordinates) -> HorizontalCoordinates {
        let (x, y) = (xy.x(), xy.y());
        let rho = xy.as_vector().norm();
        if rho == 0.0 {
            return self.center;
        }
        if !rho.is_finite() {
            trace!(x, y, "inverse projection of a point at infinity");
            return self.antipode();
        }

        let (sin_c, cos_c) = if rho <= 1.0 {
            let denominator = rho * rho + 1.0;
            (2.0 * rho / denominator, (1.0 - rho * rho) / denominator)
        } else {
            let inv_rho = rho.recip();
            let denominator = inv_rho * inv_rho + 1.0;
            (2.0 * inv_rho / denominator, (inv_rho * inv_rho - 1.0) / denominator)
        };

        let lon = (x * sin_c).atan2(
            rho * self.cos_center_lat * cos_c - y * self.sin_center_lat * sin_c,
        ) + self.center.az();
        let sin_lat = cos_c * self.sin_center_lat + (y / rho) * sin_c * self.cos_center_lat;

        HorizontalCoordinates::new_unchecked(
            angle::normalize_positive(lon),
            sin_lat.clamp(-1.0, 1.0).asin(),
        )
    }

    fn antipode(&self) -> HorizontalCoordinates {
        HorizontalCoordinates::new_unchecked(
            angle::normalize_positive(self.center.az() + std::f64::consts::PI),
            -self.center.alt(),
        )
    }
}

impl Transform<HorizontalCoordinates> for StereographicProjection {
    type Output = CartesianCoordinates;

    /// ```text
    /// d = 1 / (1 + sin φ·sin φ1 + cos φ·cos φ1·cos(λ − λ0))
    /// x = d·cos φ·sin(λ − λ0)
    /// y = d·(sin φ·cos φ1 − cos φ·sin φ1·cos(λ − λ0))
    /// ```
    fn apply(&self, hor: &HorizontalCoordinates) -> CartesianCoordinates {
        let (sin_lat, cos_lat) = hor.alt().sin_cos();
        let (sin_dlon, cos_dlon) = (hor.az() - self.center.az()).sin_cos();

        let d = 1.0
            / (1.0 + sin_lat * self.sin_center_lat + cos_lat * self.cos_center_lat * cos_dlon);
        CartesianCoordinates::new(
            d * cos_lat * sin_dlon,
            d * (sin_lat * self.cos_center_lat - cos_lat * self.sin_center_lat * cos_dlon),
        )
    }
}

impl fmt::Display for StereographicProjection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StereographicProjection centered at {}", self.center)
    }
}

#[cfg(test)]
mod projection_test {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    #[test]
    fn test_apply() {
        let projection =
            StereographicProjection::new(HorizontalCoordinates::of_deg(45.0, 45.0).unwrap());
        let xy = projection.apply(&HorizontalCoordinates::of_deg(45.0, 30.0).unwrap());
        assert_relative_eq!(xy.x(), 0.0, epsilon = 1e-12);
        assert_relative_eq!(xy.y(), -0.13165249758739583, epsilon = 1e-12);

        let center = projection.apply(projection.center());
        assert_relative_eq!(center.x(), 0.0, epsilon = 1e-12);
        assert_relative_eq!(center.y(), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_antipode_is_not_finite() {
        let projection =
            StereographicProjection::new(HorizontalCoordinates::of_deg(0.0, 0.0).unwrap());
        let xy = projection.apply(&HorizontalCoordinates::of_deg(180.0, 0.0).unwrap());
        assert!(!xy.x().is_finite() || !xy.y().is_finite());
    }

    #[test]
    fn test_inverse_apply() {
        let projection =
            StereographicProjection::new(HorizontalCoordinates::of_deg(45.0, 45.0).unwrap());
        let hor = projection.inverse_apply(&CartesianCoordinates::new(10.0, 0.0));
        assert_relative_eq!(hor.az(), 3.648704634091643, epsilon = 1e-12);
        assert_relative_eq!(hor.alt(), -0.7657872146885684, epsilon = 1e-12);
    }

    #[test]
    fn test_inverse_apply_at_origin() {
        let center = HorizontalCoordinates::of_deg(123.0, -12.0).unwrap();
        let projection = StereographicProjection::new(center);
        let hor = projection.inverse_apply(&CartesianCoordinates::new(0.0, 0.0));
        assert_eq!(hor.az(), center.az());
        assert_eq!(hor.alt(), center.alt());
    }

    #[test]
    fn test_inverse_apply_at_infinity() {
        let projection =
            StereographicProjection::new(HorizontalCoordinates::of_deg(0.0, 0.0).unwrap());
        let antipode_xy = projection.apply(&HorizontalCoordinates::of_deg(180.0, 0.0).unwrap());
        for xy in [
            antipode_xy,
            CartesianCoordinates::new(f64::INFINITY, 0.0),
            CartesianCoordinates::new(f64::NAN, f64::NAN),
        ] {
            let hor = projection.inverse_apply(&xy);
            assert_relative_eq!(hor.az(), PI, epsilon = 1e-12);
            assert_relative_eq!(hor.alt(), 0.0, epsilon = 1e-12);
        }

        let center = HorizontalCoordinates::of_deg(123.0, -12.0).unwrap();
        let hor = StereographicProjection::new(center)
            .inverse_apply(&CartesianCoordinates::new(f64::NEG_INFINITY, f64::INFINITY));
        assert_relative_eq!(hor.az_deg(), 303.0, epsilon = 1e-9);
        assert_relative_eq!(hor.alt_deg(), 12.0, epsilon = 1e-9);
    }

    #[test]
    fn test_inverse_apply_far_from_origin() {
        let projection =
            StereographicProjection::new(HorizontalCoordinates::of_deg(0.0, 0.0).unwrap());
        let hor = projection.inverse_apply(&CartesianCoordinates::new(1e200, 0.0));
        assert!(hor.az().is_finite() && hor.alt().is_finite());
        assert_relative_eq!(hor.az(), PI, epsilon = 1e-12);
        assert_relative_eq!(hor.alt(), 0.0, epsilon = 1e-12);

        let projection =
            StereographicProjection::new(HorizontalCoordinates::of_deg(45.0, 45.0).unwrap());
        let hor = projection.inverse_apply(&CartesianCoordinates::new(0.0, -1e200));
        assert_relative_eq!(hor.az_deg(), 225.0, epsilon = 1e-9);
        assert_relative_eq!(hor.alt_deg(), -45.0, epsilon = 1e-9);
    }

    #[test]
    fn test_round_trip() {
        for (center_az, center_alt) in [(0.0, 0.0), (180.0, 15.0), (45.0, -60.0), (300.0, 89.0)] {
            let center = HorizontalCoordinates::of_deg(center_az, center_alt).unwrap();
            let projection = StereographicProjection::new(center);
            for az in (0..360).step_by(20) {
                for alt in (-60..=60).step_by(20) {
                    let hor = HorizontalCoordinates::of_deg(az as f64, alt as f64).unwrap();
                    if hor.angular_distance_to(projection.center()) > angle::of_deg(170.0) {
                        continue;
                    }
                    let back = projection.inverse_apply(&projection.apply(&hor));
                    let d_az = angle::normalize_positive(back.az() - hor.az() + PI) - PI;
                    assert!(d_az.abs() < 1e-9, "{hor} -> {back}");
                    assert_relative_eq!(back.alt(), hor.alt(), epsilon = 1e-9);
                }
            }
        }
    }

    #[test]
    fn test_parallel_circles() {
        let projection =
            StereographicProjection::new(HorizontalCoordinates::of_deg(0.0, 45.0).unwrap());
        let parallel = HorizontalCoordinates::of_deg(0.0, 27.0).unwrap();

        let center = projection.circle_center_for_parallel(&parallel).unwrap();
        assert_relative_eq!(center.x(), 0.0);
        assert_relative_eq!(center.y(), 0.6089987400733187, epsilon = 1e-12);
        assert_relative_eq!(
            projection.circle_radius_for_parallel(&parallel),
            0.767383180397855,
            epsilon = 1e-12
        );

        // any point of the parallel lies on the circle
        let point = projection.apply(&HorizontalCoordinates::of_deg(70.0, 27.0).unwrap());
        assert_relative_eq!(
            point.distance_to(&center),
            0.767383180397855,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_degenerate_parallel() {
        let projection =
            StereographicProjection::new(HorizontalCoordinates::of_deg(0.0, 30.0).unwrap());
        let parallel = HorizontalCoordinates::of_deg(0.0, -30.0).unwrap();

        assert!(projection.circle_center_for_parallel(&parallel).is_none());
        assert_eq!(projection.circle_radius_for_parallel(&parallel), f64::INFINITY);
        match projection.parallel_image(&parallel) {
            ParallelImage::Line { y } => {
                assert_relative_eq!(y, -angle::of_deg(30.0).tan(), epsilon = 1e-12);
                let point =
                    projection.apply(&HorizontalCoordinates::of_deg(100.0, -30.0).unwrap());
                assert_relative_eq!(point.y(), y, epsilon = 1e-12);
            }
            ParallelImage::Circle { .. } => panic!("expected a line"),
        }
    }

    #[test]
    fn test_apply_to_angle() {
        let projection =
            StereographicProjection::new(HorizontalCoordinates::of_deg(23.0, 45.0).unwrap());
        assert_relative_eq!(
            projection.apply_to_angle(angle::of_deg(0.5)),
            0.00436333005262522,
            epsilon = 1e-12
        );
        assert_eq!(projection.apply_to_angle(0.0), 0.0);
    }
}
