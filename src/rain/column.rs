use crate::backend::RandomSource;

/// Lower bound of a column's speed multiplier.
const MIN_SPEED: f64 = 0.3;

/// Width of the speed multiplier range, `[MIN_SPEED, MIN_SPEED + SPEED_RANGE)`.
const SPEED_RANGE: f64 = 0.7;

/// How far above the top edge a freshly sized column may start, in cells.
const INITIAL_STAGGER: f64 = 100.0;

/// How far above the top edge a recycled column may restart, in cells.
const RESET_STAGGER: f64 = 20.0;

/// One vertical lane of the rain field.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    /// Vertical position of the glyph, in cells. Negative while the column
    /// is still waiting above the viewport.
    pub offset: f64,
    /// Cells advanced per painted frame.
    pub speed: f64,
}

impl Column {
    /// Creates a column with a staggered start.
    fn new<R: RandomSource>(rng: &mut R) -> Self {
        Self {
            offset: rng.next_f64() * -INITIAL_STAGGER,
            speed: random_speed(rng),
        }
    }

    /// Sends the column back above the top edge with a fresh speed.
    pub(crate) fn recycle<R: RandomSource>(&mut self, rng: &mut R) {
        self.offset = rng.next_f64() * -RESET_STAGGER;
        self.speed = random_speed(rng);
    }
}

fn random_speed<R: RandomSource>(rng: &mut R) -> f64 {
    MIN_SPEED + rng.next_f64() * SPEED_RANGE
}

/// Number of columns needed to cover `width` pixels.
pub fn column_count(width: f64, cell_size: f64) -> usize {
    if width <= 0.0 {
        return 0;
    }
    (width / cell_size).ceil() as usize
}

/// Builds a fresh set of columns covering `width` pixels.
///
/// Previous column state is never reused: every offset and speed is drawn
/// again.
pub fn init_columns<R: RandomSource>(width: f64, cell_size: f64, rng: &mut R) -> Vec<Column> {
    (0..column_count(width, cell_size))
        .map(|_| Column::new(rng))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::SmallRng, SeedableRng};

    #[test]
    fn test_column_count() {
        [
            (0.0, 0),
            (1.0, 1),
            (14.0, 1),
            (15.0, 2),
            (1280.0, 92),
            (1920.0, 138),
        ]
        .into_iter()
        .for_each(|(width, expected)| assert_eq!(column_count(width, 14.0), expected));
    }

    #[test]
    fn test_init_ranges() {
        let mut rng = SmallRng::seed_from_u64(7);
        for width in [13.0, 500.0, 1366.0, 2560.0] {
            let columns = init_columns(width, 14.0, &mut rng);
            assert_eq!(columns.len(), (width / 14.0_f64).ceil() as usize);
            for column in &columns {
                assert!((0.3..1.0).contains(&column.speed), "{}", column.speed);
                assert!(column.offset <= 0.0 && column.offset > -100.0);
            }
        }
    }

    #[test]
    fn test_recycle_ranges() {
        let mut rng = SmallRng::seed_from_u64(11);
        let mut column = Column {
            offset: 80.0,
            speed: 0.5,
        };
        for _ in 0..1000 {
            column.recycle(&mut rng);
            assert!(column.offset <= 0.0 && column.offset > -20.0);
            assert!((0.3..1.0).contains(&column.speed));
        }
    }
}
