//! Roadside trees (cosmetic)

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::consts::*;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tree {
    /// Trunk top-left corner
    pub pos: Vec2,
    /// Nominal descent rate; trees only ever move with the scroll
    pub speed: f32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TreeSpawner {
    timer: u32,
}

impl TreeSpawner {
    /// Count one tick; returns true every `TREE_INTERVAL` ticks
    pub fn tick(&mut self) -> bool {
        self.timer += 1;
        if self.timer >= TREE_INTERVAL {
            self.timer = 0;
            true
        } else {
            false
        }
    }

    pub fn spawn<R: Rng>(rng: &mut R) -> Tree {
        let x = if rng.random_bool(0.5) {
            rng.random_range(TREE_MARGIN as i32..=(ROAD_X - TREE_MARGIN) as i32)
        } else {
            let road_right = ROAD_X + ROAD_WIDTH;
            rng.random_range(
                (road_right + TREE_ROAD_CLEARANCE) as i32..=(SCREEN_WIDTH - TREE_MARGIN) as i32,
            )
        };
        Tree {
            pos: Vec2::new(x as f32, TREE_SPAWN_Y),
            speed: TREE_SPEED,
        }
    }
}

/// Scroll trees and drop the ones below the screen
pub fn advance_trees(trees: &mut Vec<Tree>, scroll: f32) {
    trees.retain_mut(|tree| {
        tree.pos.y += scroll;
        tree.pos.y <= SCREEN_HEIGHT
    });
}
