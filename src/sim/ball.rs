//! The ball: flight physics plus the dizzy spin animation
//!
//! The ball is either flying (`spin_angle == 0`) or spinning. A landed punch
//! kicks it back up and starts a spin; the spin winds up in `spin_step`
//! increments and snaps back to the unrotated sprite once it completes a full
//! turn. Rotation is always about the center of the box, so spinning never
//! moves the ball on its own.

use glam::IVec2;

use super::actor::{Actor, Flow, Frame};
use super::collision::{past_floor, wall_contact};
use super::rect::Rect;
use super::sprite::{Sprite, SpriteKind};
use crate::consts::{FULL_TURN, SPAWN_POINT};
use crate::tuning::{Launch, Rules};

/// Per-tick velocity, owned by the ball
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Velocity {
    /// 2D flight
    Fall(IVec2),
    /// Horizontal walk
    Walk(i32),
}

impl From<Launch> for Velocity {
    fn from(launch: Launch) -> Self {
        match launch {
            Launch::Fall(v) => Velocity::Fall(v),
            Launch::Walk(speed) => Velocity::Walk(speed),
        }
    }
}

/// Animation state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BallState {
    Falling,
    Spinning,
}

/// A ball entity
#[derive(Debug, Clone)]
pub struct Ball {
    rect: Rect,
    sprite: Sprite,
    /// Unrotated sprite captured when the current spin began
    base: Sprite,
    velocity: Velocity,
    spin_angle: i32,
    /// Set by a scoring hit, cleared by the next wall or ceiling bounce
    cooldown: bool,
    rules: Rules,
}

impl Ball {
    /// Spawn at `SPAWN_POINT` with the variant's launch velocity
    pub fn new(size: IVec2, rules: Rules) -> Self {
        let sprite = Sprite::new(SpriteKind::Ball, size);
        Self {
            rect: Rect::from_top_left(SPAWN_POINT, size),
            sprite,
            base: sprite,
            velocity: rules.launch.into(),
            spin_angle: 0,
            cooldown: false,
            rules,
        }
    }

    pub fn velocity(&self) -> Velocity {
        self.velocity
    }

    pub fn spin_angle(&self) -> i32 {
        self.spin_angle
    }

    pub fn base_sprite(&self) -> Sprite {
        self.base
    }

    pub fn in_cooldown(&self) -> bool {
        self.cooldown
    }

    pub fn state(&self) -> BallState {
        if self.spin_angle == 0 {
            BallState::Falling
        } else {
            BallState::Spinning
        }
    }

    /// Whether a landed punch would score right now
    pub fn is_available(&self) -> bool {
        !(self.rules.cooldown && self.cooldown)
    }

    /// React to a landed punch. Returns false when the hit was swallowed by
    /// the cooldown.
    pub fn punched(&mut self) -> bool {
        if !self.is_available() {
            return false;
        }
        if self.rules.cooldown {
            self.cooldown = true;
        }
        if let Velocity::Fall(ref mut v) = self.velocity {
            v.y = -v.y - self.rules.kick;
        }
        self.sprite.flip();
        if self.spin_angle == 0 {
            self.base = self.sprite;
            self.spin_angle = self.rules.spin_start;
        }
        true
    }

    /// One step of flight. Walls are judged on the current box and the new
    /// position is taken from the velocity after any reflection; the floor
    /// is judged on where the ball ends up.
    fn fly(&mut self, arena: &Rect) -> Flow {
        match self.velocity {
            Velocity::Fall(mut v) => {
                let contact = wall_contact(&self.rect, arena);
                if contact.sides {
                    v.x = -v.x;
                    self.bounce();
                }
                if contact.ceiling {
                    v.y = -v.y;
                    self.bounce();
                }
                self.velocity = Velocity::Fall(v);
                self.rect.translate(v);
                if let Some(edge) = self.rules.loss_edge {
                    if past_floor(&self.rect, arena, edge) {
                        log::debug!("Ball dropped out at {:?}", self.rect.top_left());
                        return Flow::EndOfMatch;
                    }
                }
            }
            Velocity::Walk(mut speed) => {
                if wall_contact(&self.rect, arena).sides {
                    speed = -speed;
                    self.sprite.flip();
                }
                self.velocity = Velocity::Walk(speed);
                self.rect.translate(IVec2::new(speed, 0));
            }
        }
        Flow::Continue
    }

    fn bounce(&mut self) {
        self.cooldown = false;
        self.sprite.flip();
    }

    /// One step of the spin animation, keeping the box centered
    fn spin(&mut self) {
        let center = self.rect.center();
        self.spin_angle += self.rules.spin_step;
        if self.spin_angle >= FULL_TURN {
            self.spin_angle = 0;
            self.sprite = self.base;
        } else {
            self.sprite = self.base.rotated(self.spin_angle);
        }
        self.rect = Rect::from_center(center, self.sprite.extent());
    }
}

impl Actor for Ball {
    fn update(&mut self, frame: &Frame) -> Flow {
        match self.state() {
            BallState::Falling => self.fly(&frame.arena),
            BallState::Spinning => {
                let flow = if self.rules.move_while_spinning {
                    self.fly(&frame.arena)
                } else {
                    Flow::Continue
                };
                self.spin();
                flow
            }
        }
    }

    fn visual(&self) -> Sprite {
        self.sprite
    }

    fn bounds(&self) -> Rect {
        self.rect
    }
}
