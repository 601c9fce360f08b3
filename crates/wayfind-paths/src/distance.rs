use wayfind_core::Point;

/// Cost of moving in a straight line between two cells: their Euclidean
/// distance in cells. Also used as the heuristic, which keeps it admissible.
#[inline]
pub fn traversal_cost(a: Point, b: Point) -> f32 {
    a.distance(b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_steps() {
        let o = Point::ZERO;
        assert_eq!(traversal_cost(o, Point::new(1, 0)), 1.0);
        assert_eq!(traversal_cost(o, Point::new(0, -1)), 1.0);
        assert!((traversal_cost(o, Point::new(1, 1)) - std::f32::consts::SQRT_2).abs() < 1e-6);
        assert_eq!(traversal_cost(Point::new(2, 7), Point::new(5, 3)), 5.0);
    }
}
