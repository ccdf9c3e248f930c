/// Hit detection between projectiles, enemies and the player.

use crate::entities::{Body, EntityId, Player};
use crate::panel::Panel;
use crate::trackers::{EnemyTracker, ProjectileTracker};

/// `true` iff the horizontal midpoint of `a` lies within `b`'s span,
/// edges included.  Vertical position is ignored: everything shares a lane.
pub fn collide(a: &impl Body, b: &impl Body) -> bool {
    let a = a.body();
    let b = b.body();
    let mid = a.mid_x();
    mid >= b.x && mid <= b.x + b.width
}

/// Outcome of one collision scan.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScanReport {
    /// (projectile, enemy) pairs that were consumed and scored.
    pub scored: Vec<(EntityId, EntityId)>,
    /// At least one enemy reached the player.
    pub game_over: bool,
}

/// Run the scoring pass, then the game-over pass.
///
/// Scoring is first-match-wins: projectiles are taken in spawn order and each
/// hits the earliest-spawned enemy it overlaps.  Both are removed right away,
/// so neither can take part in a second hit during the same scan.
pub fn scan(
    player: &Player,
    projectiles: &mut ProjectileTracker,
    enemies: &mut EnemyTracker,
    panel: &mut Panel,
) -> ScanReport {
    let mut report = ScanReport::default();

    let projectile_ids: Vec<EntityId> = projectiles.entities().iter().map(|p| p.id).collect();
    for projectile_id in projectile_ids {
        let hit = projectiles
            .entities()
            .iter()
            .find(|p| p.id == projectile_id)
            .and_then(|p| enemies.entities().iter().find(|e| collide(p, *e)))
            .map(|e| e.id);

        if let Some(enemy_id) = hit {
            projectiles.remove(projectile_id);
            enemies.remove(enemy_id);
            panel.add_score();
            tracing::debug!(?projectile_id, ?enemy_id, score = panel.score(), "enemy down");
            report.scored.push((projectile_id, enemy_id));
        }
    }

    report.game_over = enemies.entities().iter().any(|e| collide(e, player));
    report
}
