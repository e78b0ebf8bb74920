//! Pure game-logic functions.
//!
//! Every public update function takes an immutable reference to the current
//! `GameState` and returns a brand-new `GameState`.  Sprites and tuning are
//! read from the shared `Assets` and `GameConfig`, which never change after
//! startup.  `render` is the only function with an output parameter: the
//! canvas it draws into.

use tracing::{debug, trace};

use crate::animation::SpriteAnimation;
use crate::assets::Assets;
use crate::canvas::RasterCanvas;
use crate::config::GameConfig;
use crate::entities::{Alien, AlienKind, Bullet, GameState, Player};
use crate::error::Result;
use crate::input::InputSignals;
use crate::sprite::{blit, overlaps, MaskedSprite};

// ── Constructors ─────────────────────────────────────────────────────────────

/// Formation code for row `yi` (counted from the bottom) of a `rows`-high
/// formation: 1 = TypeA, 2 = TypeB, 3 = TypeC.
pub fn formation_code(rows: usize, yi: usize) -> usize {
    (rows.saturating_sub(yi) / 2 + 1).min(3)
}

/// Horizontal shift that centres `sprite` under the wider death burst.
fn death_offset(assets: &Assets, sprite: &MaskedSprite) -> i32 {
    let death = assets.sheet.sprite(assets.death);
    (death.width() as i32 - sprite.width() as i32) / 2
}

fn alien_animations(assets: &Assets, config: &GameConfig) -> Result<Vec<SpriteAnimation>> {
    assets
        .alien_frames
        .iter()
        .map(|frames| SpriteAnimation::new(frames.clone(), config.frame_duration))
        .collect()
}

/// Build the opening state: the full formation, a centred player and no
/// bullets.
pub fn init_state(config: &GameConfig, assets: &Assets) -> Result<GameState> {
    config.validate()?;
    assets.validate()?;

    let animations = alien_animations(assets, config)?;
    let (ox, oy) = config.formation_origin;
    let (dx, dy) = config.formation_spacing;

    let mut aliens = Vec::with_capacity(config.formation_rows * config.formation_cols);
    for yi in 0..config.formation_rows {
        let kind = AlienKind::from_code(formation_code(config.formation_rows, yi));
        // Every kind has an animation once `assets.validate` has passed.
        let offset = kind
            .animation_index()
            .and_then(|i| animations.get(i))
            .map(|anim| death_offset(assets, assets.sheet.sprite(anim.current())))
            .unwrap_or(0);
        for xi in 0..config.formation_cols {
            aliens.push(Alien {
                x: dx * xi as i32 + ox + offset,
                y: dy * yi as i32 + oy,
                kind,
            });
        }
    }

    let player_sprite = assets.sheet.sprite(assets.player);
    let player = Player {
        x: (config.width / 2) as i32 - (player_sprite.width() / 2) as i32,
        y: config.player_y,
        lives: config.player_lives,
    };

    GameState::with_roster(config, player, aliens, animations)
}

// ── Rendering ────────────────────────────────────────────────────────────────

/// The sprite an alien is currently shown with, if any.
fn alien_sprite<'a>(state: &GameState, assets: &'a Assets, index: usize) -> Option<&'a MaskedSprite> {
    let alien = &state.aliens[index];
    match alien.kind.animation_index() {
        Some(i) => Some(assets.sheet.sprite(state.animations[i].current())),
        None if state.death_timers[index] > 0 => Some(assets.sheet.sprite(assets.death)),
        None => None,
    }
}

/// Draw `state` into `canvas`: clear, then aliens, bullets and the player in
/// that order.
pub fn render(state: &GameState, assets: &Assets, config: &GameConfig, canvas: &mut RasterCanvas) {
    canvas.clear(config.clear_color);

    for (i, alien) in state.aliens.iter().enumerate() {
        if let Some(sprite) = alien_sprite(state, assets, i) {
            blit(canvas, sprite, alien.x, alien.y, config.alien_color);
        }
    }

    let bullet_sprite = assets.sheet.sprite(assets.bullet);
    for bullet in &state.bullets {
        blit(canvas, bullet_sprite, bullet.x, bullet.y, config.bullet_color);
    }

    let player_sprite = assets.sheet.sprite(assets.player);
    blit(canvas, player_sprite, state.player.x, state.player.y, config.player_color);
}

// ── Per-frame sub-steps (in-place on a fresh copy) ───────────────────────────

fn step_animations(state: &mut GameState) {
    for anim in &mut state.animations {
        anim.advance();
    }
}

fn step_death_timers(state: &mut GameState) {
    for (alien, timer) in state.aliens.iter().zip(state.death_timers.iter_mut()) {
        if alien.kind.is_dead() && *timer > 0 {
            *timer -= 1;
        }
    }
}

fn step_bullets(state: &mut GameState, assets: &Assets) {
    let floor = assets.sheet.sprite(assets.bullet).height() as i32;
    let ceiling = state.height as i32;
    let mut i = 0;
    while i < state.bullets.len() {
        let Some(bullet) = state.bullets.get_mut(i) else { break };
        bullet.y += bullet.dir;
        if bullet.y >= ceiling || bullet.y < floor {
            // The swapped-in bullet has not moved yet; revisit this slot.
            state.bullets.swap_remove(i);
            continue;
        }
        i += 1;
    }
}

fn step_hits(state: &mut GameState, assets: &Assets) {
    let bullet_sprite = assets.sheet.sprite(assets.bullet);
    let mut bi = 0;
    while bi < state.bullets.len() {
        let Some(&bullet) = state.bullets.get(bi) else { break };
        let mut hit = None;
        for (ai, alien) in state.aliens.iter().enumerate() {
            let Some(anim) = alien.kind.animation_index() else { continue };
            let sprite = assets.sheet.sprite(state.animations[anim].current());
            if overlaps(bullet_sprite, bullet.x, bullet.y, sprite, alien.x, alien.y) {
                hit = Some((ai, death_offset(assets, sprite)));
                break;
            }
        }
        match hit {
            Some((ai, offset)) => {
                let alien = &mut state.aliens[ai];
                debug!(slot = ai, kind = ?alien.kind, x = alien.x, y = alien.y, "alien destroyed");
                alien.kind = AlienKind::Dead;
                alien.x -= offset;
                state.bullets.swap_remove(bi);
            }
            None => bi += 1,
        }
    }
}

fn step_player(state: &mut GameState, assets: &Assets, config: &GameConfig, movement: i32) {
    let delta = config.player_speed.saturating_mul(movement);
    if delta == 0 {
        return;
    }
    let sprite_w = assets.sheet.sprite(assets.player).width() as i32;
    let max_x = (state.width as i32).saturating_sub(sprite_w).max(0);
    state.player.x = state.player.x.saturating_add(delta).clamp(0, max_x);
}

fn step_fire(state: &mut GameState, assets: &Assets, config: &GameConfig) {
    let sprite = assets.sheet.sprite(assets.player);
    let bullet = Bullet {
        x: state.player.x + (sprite.width() / 2) as i32,
        y: state.player.y + sprite.height() as i32,
        dir: config.bullet_speed,
    };
    if state.bullets.push(bullet).is_err() {
        debug!(capacity = state.bullets.capacity(), "bullet pool full, shot dropped");
    }
}

// ── Public sub-steps (pure) ──────────────────────────────────────────────────

/// Advance every per-type animation clock by one tick.
pub fn advance_animations(state: &GameState) -> GameState {
    let mut next = state.clone();
    step_animations(&mut next);
    next
}

/// Count down the death timer of every dead alien that still shows its
/// burst.
pub fn decay_death_timers(state: &GameState) -> GameState {
    let mut next = state.clone();
    step_death_timers(&mut next);
    next
}

/// Move every bullet by its step and drop those that left the canvas.
pub fn advance_bullets(state: &GameState, assets: &Assets) -> GameState {
    let mut next = state.clone();
    step_bullets(&mut next, assets);
    next
}

/// Resolve bullet–alien hits.  A bullet kills at most one alien.
pub fn resolve_hits(state: &GameState, assets: &Assets) -> GameState {
    let mut next = state.clone();
    step_hits(&mut next, assets);
    next
}

/// Apply a movement signal, keeping the cannon fully on the canvas.
pub fn move_player(state: &GameState, assets: &Assets, config: &GameConfig, movement: i32) -> GameState {
    let mut next = state.clone();
    step_player(&mut next, assets, config, movement);
    next
}

/// Spawn a bullet just above the cannon.  A full pool drops the shot.
pub fn player_shoot(state: &GameState, assets: &Assets, config: &GameConfig) -> GameState {
    let mut next = state.clone();
    step_fire(&mut next, assets, config);
    next
}

// ── Per-frame tick ───────────────────────────────────────────────────────────

/// Advance the simulation by one frame.
///
/// Sub-steps run in a fixed order: animations, death timers, bullet travel
/// and despawn, hits, player movement, fire.  Hits therefore test the
/// animation frame that will be drawn next, and a bullet that leaves the
/// canvas this frame can no longer hit anything.
pub fn tick(state: &GameState, assets: &Assets, config: &GameConfig, signals: &InputSignals) -> GameState {
    let mut next = state.clone();

    step_animations(&mut next);
    step_death_timers(&mut next);
    step_bullets(&mut next, assets);
    step_hits(&mut next, assets);
    step_player(&mut next, assets, config, signals.movement);
    if signals.fire {
        step_fire(&mut next, assets, config);
    }

    next.frame += 1;
    trace!(frame = next.frame, bullets = next.bullets.len(), "tick");
    next
}
