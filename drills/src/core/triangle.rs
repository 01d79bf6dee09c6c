//! Triangle kind checks over three side lengths.

/// All sides positive and the longest strictly shorter than the other two combined.
pub fn is_triangle(sides: [f64; 3]) -> bool {
    let total: f64 = sides.iter().sum();
    let longest = sides.iter().copied().fold(f64::MIN, f64::max);
    sides.iter().all(|&side| side > 0.0) && total > 2.0 * longest
}

pub fn equilateral(sides: [f64; 3]) -> bool {
    is_triangle(sides) && distinct_sides(sides) == 1
}

/// At least two equal sides, so every equilateral triangle is also isosceles.
pub fn isosceles(sides: [f64; 3]) -> bool {
    is_triangle(sides) && distinct_sides(sides) <= 2
}

pub fn scalene(sides: [f64; 3]) -> bool {
    is_triangle(sides) && distinct_sides(sides) == 3
}

fn distinct_sides(mut sides: [f64; 3]) -> usize {
    sides.sort_by(f64::total_cmp);
    1 + sides.windows(2).filter(|pair| pair[0] != pair[1]).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equilateral_needs_equal_positive_sides() {
        assert!(equilateral([2.0, 2.0, 2.0]));
        assert!(equilateral([0.5, 0.5, 0.5]));
        assert!(!equilateral([0.0, 0.0, 0.0]));
        assert!(!equilateral([2.0, 3.0, 2.0]));
    }

    #[test]
    fn isosceles_includes_equilateral() {
        assert!(isosceles([3.0, 4.0, 4.0]));
        assert!(isosceles([4.0, 3.0, 4.0]));
        assert!(isosceles([4.0, 4.0, 4.0]));
        assert!(!isosceles([2.0, 3.0, 4.0]));
        assert!(!isosceles([1.0, 1.0, 3.0]));
    }

    #[test]
    fn scalene_needs_three_distinct_sides() {
        assert!(scalene([5.0, 4.0, 6.0]));
        assert!(scalene([0.5, 0.4, 0.6]));
        assert!(!scalene([4.0, 4.0, 4.0]));
        assert!(!scalene([7.0, 3.0, 2.0]));
    }

    #[test]
    fn degenerate_triangles_are_rejected() {
        assert!(!is_triangle([1.0, 1.0, 2.0]));
        assert!(!is_triangle([-1.0, 2.0, 2.0]));
    }
}
