use crate::model::Pin;
use lyon::geom::{point, LineSegment, Point as GeomPoint};
use symedit_core::{Length, Point, Rect};

/// Radius of the circle drawn around the pin position.
pub const PIN_CIRCLE_RADIUS: Length = Length::from_nm(600_000);

/// Stroke width of the pin line.
pub const PIN_LINE_WIDTH: Length = Length::from_nm(158_750);

/// Gap between the end of the pin line and its name label.
pub const PIN_TEXT_OFFSET: Length = Length::from_nm(500_000);

/// Clickable outline of a pin: the circle at its position united with the
/// stroked line towards its end point.
///
/// Coordinates are nanometers in `f64`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PinShape {
    center: GeomPoint<f64>,
    radius: f64,
    line: LineSegment<f64>,
    half_width: f64,
}

fn to_geom(p: Point) -> GeomPoint<f64> {
    point(p.x.to_nm() as f64, p.y.to_nm() as f64)
}

impl PinShape {
    pub fn of_pin(pin: &Pin) -> Self {
        Self {
            center: to_geom(pin.position()),
            radius: PIN_CIRCLE_RADIUS.to_nm() as f64,
            line: LineSegment {
                from: to_geom(pin.position()),
                to: to_geom(pin.end_point()),
            },
            half_width: PIN_LINE_WIDTH.to_nm() as f64 / 2.0,
        }
    }

    pub fn contains(&self, pos: Point) -> bool {
        let p = to_geom(pos);
        self.center.distance_to(p) <= self.radius
            || self.distance_to_line(p) <= self.half_width
    }

    /// True if the shape and the (closed) rectangle overlap.
    pub fn intersects(&self, rect: &Rect) -> bool {
        let min = to_geom(rect.min());
        let max = to_geom(rect.max());

        let nearest = point(
            self.center.x.clamp(min.x, max.x),
            self.center.y.clamp(min.y, max.y),
        );
        if self.center.distance_to(nearest) <= self.radius {
            return true;
        }

        self.distance_line_to_rect(min, max) <= self.half_width
    }

    /// Axis-aligned bounds of the shape.
    pub fn bounding_rect(&self) -> Rect {
        let r = self.radius.max(self.half_width);
        let xs = [self.line.from.x, self.line.to.x];
        let ys = [self.line.from.y, self.line.to.y];
        let lo = point(xs[0].min(xs[1]) - r, ys[0].min(ys[1]) - r);
        let hi = point(xs[0].max(xs[1]) + r, ys[0].max(ys[1]) + r);
        Rect::from_corners(
            Point::from_nm(lo.x.floor() as i64, lo.y.floor() as i64),
            Point::from_nm(hi.x.ceil() as i64, hi.y.ceil() as i64),
        )
    }

    fn is_degenerate(&self) -> bool {
        self.line.from == self.line.to
    }

    fn distance_to_line(&self, p: GeomPoint<f64>) -> f64 {
        if self.is_degenerate() {
            self.line.from.distance_to(p)
        } else {
            self.line.distance_to_point(p)
        }
    }

    fn distance_line_to_rect(&self, min: GeomPoint<f64>, max: GeomPoint<f64>) -> f64 {
        let inside = |p: GeomPoint<f64>| p.x >= min.x && p.x <= max.x && p.y >= min.y && p.y <= max.y;
        if inside(self.line.from) || inside(self.line.to) {
            return 0.0;
        }

        let corners = [min, point(max.x, min.y), max, point(min.x, max.y)];
        if !self.is_degenerate() {
            for i in 0..corners.len() {
                let edge = LineSegment {
                    from: corners[i],
                    to: corners[(i + 1) % corners.len()],
                };
                if edge.from != edge.to && self.line.intersects(&edge) {
                    return 0.0;
                }
            }
        }

        // Disjoint: the minimum is reached at an endpoint of one of the two.
        let clamp = |p: GeomPoint<f64>| point(p.x.clamp(min.x, max.x), p.y.clamp(min.y, max.y));
        let from_endpoints = [self.line.from, self.line.to]
            .into_iter()
            .map(|p| p.distance_to(clamp(p)));
        let from_corners = corners.into_iter().map(|c| self.distance_to_line(c));
        from_endpoints.chain(from_corners).fold(f64::INFINITY, f64::min)
    }
}
