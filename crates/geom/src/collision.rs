//! Hit-testing between [`Shape`]s.
//!
//! Every pair of variants has an arm in [`check`], so there is no
//! "unsupported combination" failure mode. Edges are treated the way the
//! individual tests below document: circles include their boundary,
//! rectangles do not.

use super::{Circle, Rect, Shape, Vec2};

/// Do the two shapes overlap?
pub fn check(a: &Shape, b: &Shape) -> bool {
    match (a, b) {
        (Shape::Dot(p), Shape::Dot(q)) => p == q,
        (Shape::Dot(p), Shape::Circle(c)) | (Shape::Circle(c), Shape::Dot(p)) => circle_dot(c, *p),
        (Shape::Dot(p), Shape::Rect(r)) | (Shape::Rect(r), Shape::Dot(p)) => rect_dot(r, *p),
        (Shape::Circle(c), Shape::Circle(d)) => circles(c, d),
        (Shape::Circle(c), Shape::Rect(r)) | (Shape::Rect(r), Shape::Circle(c)) => {
            circle_rect(c, r)
        }
        (Shape::Rect(r), Shape::Rect(s)) => rects(r, s),
    }
}

/// Circles touch when the centre distance is at most the sum of radii.
pub fn circles(a: &Circle, b: &Circle) -> bool {
    a.center.distance(b.center) <= a.r + b.r
}

/// A point lies in a circle when it is no further than the radius from the
/// centre.
pub fn circle_dot(c: &Circle, p: Vec2) -> bool {
    c.center.distance(p) <= c.r
}

/// Rectangles overlap when their interiors intersect; sharing an edge is not
/// a hit.
pub fn rects(a: &Rect, b: &Rect) -> bool {
    let (a_ul, a_br) = (a.ul(), a.br());
    let (b_ul, b_br) = (b.ul(), b.br());
    a_ul.x < b_br.x && a_br.x > b_ul.x && a_ul.y < b_br.y && a_br.y > b_ul.y
}

/// A point hits a rectangle only when strictly inside it.
pub fn rect_dot(r: &Rect, p: Vec2) -> bool {
    let (ul, br) = (r.ul(), r.br());
    ul.x < p.x && ul.y < p.y && br.x > p.x && br.y > p.y
}

/// A circle hits a rectangle when the rectangle's closest point to the
/// centre lies within the radius.
pub fn circle_rect(c: &Circle, r: &Rect) -> bool {
    circle_dot(c, r.closest_point(c.center))
}
