//! Proximity blocking: enemies standing right next to the player stop
//! movement toward them. Attacks are never blocked.

use bevy::prelude::*;

use super::components::BlockedDirections;

/// Which directions the given enemy positions block for a player at
/// `player`.
///
/// An enemy blocks a side when its vertical offset is below `height`
/// and its horizontal offset on that side is below `distance`. An enemy
/// at exactly the same x blocks neither side.
pub fn blocked_directions(
    player: Vec2,
    enemies: impl IntoIterator<Item = Vec2>,
    distance: f32,
    height: f32,
) -> BlockedDirections {
    let mut blocked = BlockedDirections::default();

    for enemy in enemies {
        let dx = enemy.x - player.x;
        let dy = (enemy.y - player.y).abs();
        if dy >= height {
            continue;
        }

        if dx > 0.0 && dx < distance {
            blocked.right = true;
        } else if dx < 0.0 && -dx < distance {
            blocked.left = true;
        }
    }

    blocked
}

#[cfg(test)]
mod tests {
    use super::*;

    const PLAYER: Vec2 = Vec2::new(400.0, 350.0);

    fn query(enemies: &[Vec2]) -> BlockedDirections {
        blocked_directions(PLAYER, enemies.iter().copied(), 70.0, 70.0)
    }

    #[test]
    fn close_enemy_on_the_left_blocks_left() {
        let blocked = query(&[PLAYER + Vec2::new(-20.0, 0.0)]);
        assert_eq!(blocked, BlockedDirections { left: true, right: false });
    }

    #[test]
    fn enemy_far_above_does_not_block() {
        assert_eq!(query(&[PLAYER + Vec2::new(-20.0, 200.0)]), BlockedDirections::default());
    }

    #[test]
    fn enemy_at_same_x_blocks_nothing() {
        assert_eq!(query(&[PLAYER]), BlockedDirections::default());
    }

    #[test]
    fn thresholds_are_exclusive() {
        assert_eq!(query(&[PLAYER + Vec2::new(70.0, 0.0)]), BlockedDirections::default());
        assert_eq!(query(&[PLAYER + Vec2::new(30.0, 70.0)]), BlockedDirections::default());
        assert!(query(&[PLAYER + Vec2::new(69.0, 69.0)]).right);
    }

    #[test]
    fn enemies_on_both_sides_block_both() {
        let blocked = query(&[PLAYER + Vec2::new(-30.0, 5.0), PLAYER + Vec2::new(40.0, -5.0)]);
        assert!(blocked.left && blocked.right);
    }
}
