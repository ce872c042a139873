use bevy::prelude::*;
use lv_physics::{Flashes, RenderSnapshot, SimSet};

const ELEMENT_SIZE: Vec2 = Vec2::new(90.0, 56.0);
const SHAKE_TINT: Color = Color::srgb(1.0, 0.62, 0.2);
const RESET_TINT: Color = Color::srgb(0.35, 0.9, 0.45);

/// One sprite per element; `index` ties it to a `RenderSnapshot` slot.
#[derive(Component, Debug, Clone, Copy)]
pub struct OffsetSprite {
    pub index: usize,
    /// Resting position in world space.
    pub base: Vec2,
    pub color: Color,
}

pub struct OffsetSpritesPlugin {
    pub width: f32,
    pub height: f32,
}

impl Plugin for OffsetSpritesPlugin {
    fn build(&self, app: &mut App) {
        let layout = Layout {
            width: self.width,
            height: self.height,
        };
        app.insert_resource(ClearColor(Color::srgb(0.06, 0.07, 0.1)))
            .insert_resource(layout)
            .add_systems(Startup, spawn_sprites)
            .add_systems(Update, (apply_offsets, apply_tint).after(SimSet::Publish));
    }
}

#[derive(Resource, Debug, Clone, Copy)]
struct Layout {
    width: f32,
    height: f32,
}

/// Elements start in two rows across the upper half of the window.
pub fn base_positions(count: usize, width: f32, height: f32) -> Vec<Vec2> {
    let per_row = count.div_ceil(2).max(1);
    let spacing = width * 0.8 / per_row as f32;
    let left = -width * 0.4 + spacing * 0.5;
    (0..count)
        .map(|i| {
            let row = (i / per_row) as f32;
            let col = (i % per_row) as f32;
            Vec2::new(left + col * spacing, height * 0.25 - row * (ELEMENT_SIZE.y + 24.0))
        })
        .collect()
}

/// Engine offsets are screen space (+y down); Bevy's world is +y up.
pub fn world_translation(base: Vec2, offset: Vec2) -> Vec2 {
    Vec2::new(base.x + offset.x, base.y - offset.y)
}

fn spawn_sprites(mut commands: Commands, layout: Res<Layout>, snapshot: Res<RenderSnapshot>) {
    commands.spawn(Camera2d);
    let count = snapshot.offsets.len();
    for (index, base) in base_positions(count, layout.width, layout.height)
        .into_iter()
        .enumerate()
    {
        let hue = index as f32 / count.max(1) as f32 * 360.0;
        let color = Color::hsl(hue, 0.55, 0.6);
        commands.spawn((
            Sprite::from_color(color, ELEMENT_SIZE),
            Transform::from_translation(base.extend(0.0)),
            OffsetSprite { index, base, color },
        ));
    }
    info!(elements = count, "Sprites spawned");
}

fn apply_offsets(snapshot: Res<RenderSnapshot>, mut q: Query<(&OffsetSprite, &mut Transform)>) {
    if !snapshot.is_changed() {
        return;
    }
    for (sprite, mut tf) in &mut q {
        let offset = snapshot.offsets.get(sprite.index).copied().unwrap_or(Vec2::ZERO);
        let t = world_translation(sprite.base, offset);
        tf.translation.x = t.x;
        tf.translation.y = t.y;
    }
}

fn apply_tint(flashes: Res<Flashes>, mut q: Query<(&OffsetSprite, &mut Sprite)>) {
    let tint = if flashes.is_resetting() {
        Some(RESET_TINT)
    } else if flashes.is_shaking() {
        Some(SHAKE_TINT)
    } else {
        None
    };
    for (el, mut sprite) in &mut q {
        let want = tint.unwrap_or(el.color);
        if sprite.color != want {
            sprite.color = want;
        }
    }
}
