//! Random ball placement.

use crate::board::Board;
use crate::core::{Ball, Color, Position, RandomSource};

/// Place up to `count` random balls on empty cells.
///
/// Empty cells are shuffled and the first `count` are filled; colors are
/// drawn uniformly from the first `color_count` palette entries. A board
/// with fewer empty cells than `count` is simply filled. Returns the
/// positions written, so the caller can check them for lines.
pub fn spawn<R: RandomSource>(
    board: &mut Board,
    count: usize,
    color_count: usize,
    rng: &mut R,
) -> Vec<Position> {
    let colors = Color::palette(color_count);
    if colors.is_empty() {
        return Vec::new();
    }

    let mut empty = board.empty_cells();
    rng.shuffle(&mut empty);
    empty.truncate(count);

    for pos in &empty {
        let color = colors[rng.gen_index(colors.len())];
        board.place(Ball::new(color), *pos);
    }

    tracing::trace!(spawned = empty.len(), requested = count, "spawned balls");
    empty
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GameRng, SequenceRng};

    #[test]
    fn test_spawns_requested_count() {
        let mut board = Board::new(9, 9);
        let mut rng = GameRng::new(42);

        let spawned = spawn(&mut board, 3, 6, &mut rng);

        assert_eq!(spawned.len(), 3);
        assert_eq!(board.occupied_count(), 3);
        for pos in &spawned {
            let ball = board.ball_at(*pos).unwrap();
            assert!(ball.color.index() < 6);
        }
    }

    #[test]
    fn test_never_overfills() {
        let mut board = Board::new(2, 2);
        let mut rng = GameRng::new(1);

        let first = spawn(&mut board, 3, 4, &mut rng);
        assert_eq!(first.len(), 3);

        let second = spawn(&mut board, 3, 4, &mut rng);
        assert_eq!(second.len(), 1);
        assert!(board.is_full());

        let third = spawn(&mut board, 3, 4, &mut rng);
        assert!(third.is_empty());
    }

    #[test]
    fn test_spawns_only_on_empty_cells() {
        let mut board = Board::new(3, 3);
        let keep = Ball::new(Color::Pink);
        board.place(keep, Position::new(0, 0));

        let mut rng = SequenceRng::new(vec![0]);
        let spawned = spawn(&mut board, 2, 2, &mut rng);

        // Identity shuffle fills the first empty cells in row-major order.
        assert_eq!(spawned, vec![Position::new(0, 1), Position::new(0, 2)]);
        assert_eq!(board.ball_at(Position::new(0, 0)), Some(keep));
        assert_eq!(board.ball_at(Position::new(0, 1)), Some(Ball::new(Color::Red)));
    }

    #[test]
    fn test_color_count_limits_palette() {
        let mut board = Board::new(9, 9);
        let mut rng = GameRng::new(5);

        spawn(&mut board, 81, 2, &mut rng);

        assert!(board.is_full());
        for (_, ball) in board.iter() {
            assert!(matches!(ball.color, Color::Red | Color::Green));
        }
    }

    #[test]
    fn test_same_seed_same_spawn() {
        let mut a = Board::new(9, 9);
        let mut b = Board::new(9, 9);

        spawn(&mut a, 5, 6, &mut GameRng::new(77));
        spawn(&mut b, 5, 6, &mut GameRng::new(77));

        assert_eq!(a, b);
    }
}
