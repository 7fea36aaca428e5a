use glam::Vec3;

use crate::domain::error::ShapeError;
use crate::domain::shapes::ShapeKind;
use crate::systems::body::BodyId;

use super::SceneCore;

/// A UI request applied between frames
#[derive(Clone, Debug, PartialEq)]
pub enum SceneCommand {
    Spawn {
        kind: ShapeKind,
        position: Vec3,
        scale: f32,
        color: Option<u32>,
    },
    /// Spawn at a random spot (terminal `spawn <kind>`).
    SpawnRandom { kind: ShapeKind },
    Remove { id: BodyId },
    Clear,
}

pub(super) fn queue(scene: &mut SceneCore, command: SceneCommand) {
    scene.pending.push(command);
}

/// Parse the kind now so a typo is reported to the caller immediately.
pub(super) fn queue_spawn_named(
    scene: &mut SceneCore,
    kind: &str,
    position: Vec3,
    scale: f32,
    color: Option<u32>,
) -> Result<(), ShapeError> {
    let kind = ShapeKind::from_name(kind)?;
    queue(
        scene,
        SceneCommand::Spawn {
            kind,
            position,
            scale,
            color,
        },
    );
    Ok(())
}

/// Drain the queue in FIFO order. Failures are logged and skipped.
pub(super) fn apply_pending(scene: &mut SceneCore) -> u32 {
    if scene.pending.is_empty() {
        return 0;
    }

    let pending = std::mem::take(&mut scene.pending);
    let mut applied = 0;

    for command in pending {
        let ok = match command {
            SceneCommand::Spawn {
                kind,
                position,
                scale,
                color,
            } => report(scene.spawn_shape(kind, position, scale, color)),
            SceneCommand::SpawnRandom { kind } => report(scene.spawn_random(kind)),
            SceneCommand::Remove { id } => scene.remove_body(id),
            SceneCommand::Clear => {
                scene.clear();
                true
            }
        };
        if ok {
            applied += 1;
        }
    }

    applied
}

fn report(result: Result<BodyId, ShapeError>) -> bool {
    match result {
        Ok(_) => true,
        Err(e) => {
            console_warn!("queued spawn failed: {}", e);
            false
        }
    }
}
