//! Movement domain: axis-separated collision resolution.
//!
//! Each axis moves then resolves against everything it now overlaps. The
//! order (horizontal first) avoids snagging on tile corners when walking
//! along a floor. Fast movers can still tunnel through thin solids.

use bevy::prelude::*;

use crate::movement::Player;
use crate::rooms::CollisionWorld;

impl Player {
    /// Moves along x by the current velocity and pushes out of solids.
    /// Every overlapping solid is applied; the last one wins.
    pub(crate) fn move_horizontal(&mut self, world: &(impl CollisionWorld + ?Sized)) {
        self.position.x += self.velocity.x;

        for solid in world.colliding_solids(&self.bounds()) {
            if self.velocity.x > 0.0 {
                self.position.x = solid.bounds.left() - self.size.x;
            } else if self.velocity.x < 0.0 {
                self.position.x = solid.bounds.right();
            }
        }
    }

    /// Moves along y by the current velocity, lands on or bonks against
    /// solids, and records the supporting platform.
    pub(crate) fn move_vertical(&mut self, world: &(impl CollisionWorld + ?Sized)) {
        let was_on_ground = self.on_ground;
        self.position.y += self.velocity.y;
        self.on_ground = false;

        let mut support = None;
        for solid in world.colliding_solids(&self.bounds()) {
            if self.velocity.y > 0.0 {
                self.position.y = solid.bounds.top() - self.size.y;
                self.velocity.y = 0.0;
                self.on_ground = true;
                self.jumping = false;
                support = solid.platform;
            } else if self.velocity.y < 0.0 {
                self.position.y = solid.bounds.bottom();
                self.velocity.y = 0.0;
            }
        }

        // The room carries riders once platforms have moved this tick.
        self.riding = support;
        if self.on_ground && !was_on_ground {
            match support {
                Some(index) => debug!("Landed on platform {:?}", index),
                None => debug!("Landed at y={}", self.position.y),
            }
        }
    }
}
