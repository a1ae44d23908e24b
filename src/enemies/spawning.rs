//! Enemy placement and spawning.

use bevy::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::components::*;
use crate::config::{ArenaLayout, Placement};
use crate::core::{Facing, Velocity};

/// Positions for the enemies described by `layout`.
///
/// Fixed placement lines enemies up from `start_x`; random placement
/// draws x uniformly from its range. Every enemy stands on the ground
/// line and is clamped inside the arena bounds.
pub fn enemy_positions(layout: &ArenaLayout, rng: &mut impl Rng) -> Vec<Vec2> {
    let (left, right) = layout.bounds;

    (0..layout.enemy_count)
        .map(|i| {
            let x = match layout.placement {
                Placement::Fixed { start_x, spacing } => start_x + i as f32 * spacing,
                Placement::Random { min_x, max_x, .. } if min_x < max_x => rng.gen_range(min_x..=max_x),
                Placement::Random { min_x, .. } => min_x,
            };
            Vec2::new(x.clamp(left, right), layout.ground_y)
        })
        .collect()
}

/// RNG for a layout: seeded when the layout asks for repeatable placement.
pub fn placement_rng(layout: &ArenaLayout) -> StdRng {
    match layout.placement {
        Placement::Random { seed: Some(seed), .. } => StdRng::seed_from_u64(seed),
        _ => StdRng::from_entropy(),
    }
}

/// Components of a freshly spawned enemy.
pub fn enemy_bundle(position: Vec2, enemy_type: &str, stats: EnemyStats) -> impl Bundle {
    (
        Enemy::new(&stats),
        EnemyType(enemy_type.to_string()),
        stats,
        EnemyIntent {
            facing: Facing::Left,
            ..default()
        },
        Velocity::default(),
        Facing::Left,
        Transform::from_translation(position.extend(0.0)),
    )
}

pub fn spawn_enemy(commands: &mut Commands, position: Vec2, enemy_type: &str, stats: EnemyStats) -> Entity {
    commands.spawn(enemy_bundle(position, enemy_type, stats)).id()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_placement_lines_up_on_the_ground() {
        let layout = ArenaLayout::default();
        let positions = enemy_positions(&layout, &mut StdRng::seed_from_u64(0));
        assert_eq!(
            positions,
            vec![
                Vec2::new(450.0, 348.0),
                Vec2::new(550.0, 348.0),
                Vec2::new(650.0, 348.0)
            ]
        );
    }

    #[test]
    fn fixed_placement_is_clamped_to_bounds() {
        let layout = ArenaLayout {
            enemy_count: 6,
            ..default()
        };
        let positions = enemy_positions(&layout, &mut StdRng::seed_from_u64(0));
        assert_eq!(positions.last().map(|p| p.x), Some(790.0));
    }

    #[test]
    fn seeded_random_placement_is_repeatable_and_in_range() {
        let layout = ArenaLayout {
            enemy_count: 8,
            placement: Placement::Random {
                min_x: 300.0,
                max_x: 700.0,
                seed: Some(42),
            },
            ..default()
        };

        let first = enemy_positions(&layout, &mut placement_rng(&layout));
        let second = enemy_positions(&layout, &mut placement_rng(&layout));
        assert_eq!(first, second);
        assert!(first.iter().all(|p| (300.0..=700.0).contains(&p.x)));
    }
}
