//! The physics world the game runs in, backed by rapier2d.
//!
//! Only the handful of capabilities the game needs are exposed: gravity,
//! static rectangles and circles with a label and a fill colour, velocity
//! access, the static flag, stepping and collision start notifications.
//! World coordinates match screen pixels with y growing downwards.

use log::warn;
use rapier2d::prelude::*;
use std::sync::Mutex;

use crate::errors::*;
use crate::scene::{BodySpec, Colour, Label, Shape};
use crate::utils::{self, FnvHashMap};

pub type BodyHandle = RigidBodyHandle;

#[derive(Copy, Clone, Debug)]
struct BodyInfo {
    label: Label,
    shape: Shape,
    colour: Colour,
}

/// Snapshot of one body for drawing.
#[derive(Copy, Clone, Debug)]
pub struct BodyView {
    pub handle: BodyHandle,
    pub label: Label,
    pub shape: Shape,
    pub colour: Colour,
    pub x: f32,
    pub y: f32,
    /// Rotation in radians.
    pub angle: f32,
}

impl BodyView {
    /// Corners of a rectangle, clockwise from the top left, turned with the
    /// body. `None` for circles.
    pub fn corners(&self) -> Option<[(f32, f32); 4]> {
        match self.shape {
            Shape::Rectangle { width, height } => {
                let (sin, cos) = self.angle.sin_cos();
                let (hw, hh) = (width / 2.0, height / 2.0);
                let corner = |dx: f32, dy: f32| {
                    (self.x + dx * cos - dy * sin, self.y + dx * sin + dy * cos)
                };
                Some([corner(-hw, -hh), corner(hw, -hh), corner(hw, hh), corner(-hw, hh)])
            }
            Shape::Circle { .. } => None,
        }
    }
}

/// Collects the collision start events reported during a step.
#[derive(Default)]
struct CollisionCollector {
    started: Mutex<Vec<(ColliderHandle, ColliderHandle)>>,
}

impl EventHandler for CollisionCollector {
    fn handle_collision_event(&self,
                              _bodies: &RigidBodySet,
                              _colliders: &ColliderSet,
                              event: CollisionEvent,
                              _contact_pair: Option<&ContactPair>) {
        if event.started() {
            let mut started = self.started.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
            started.push((event.collider1(), event.collider2()));
        }
    }

    fn handle_contact_force_event(&self,
                                  _dt: Real,
                                  _bodies: &RigidBodySet,
                                  _colliders: &ColliderSet,
                                  _contact_pair: &ContactPair,
                                  _total_force_magnitude: Real) {
    }
}

pub struct World {
    gravity: Vector<Real>,
    integration_parameters: IntegrationParameters,
    pipeline: PhysicsPipeline,
    island_manager: IslandManager,
    broad_phase: BroadPhase,
    narrow_phase: NarrowPhase,
    bodies: RigidBodySet,
    colliders: ColliderSet,
    impulse_joints: ImpulseJointSet,
    multibody_joints: MultibodyJointSet,
    ccd_solver: CCDSolver,
    collector: CollisionCollector,
    info: FnvHashMap<BodyHandle, BodyInfo>,
}

impl World {
    /// An empty world without gravity, advancing `step_seconds` per step.
    pub fn new(step_seconds: f32) -> World {
        World {
            gravity: vector![0.0, 0.0],
            integration_parameters: IntegrationParameters {
                dt: step_seconds,
                ..IntegrationParameters::default()
            },
            pipeline: PhysicsPipeline::new(),
            island_manager: IslandManager::new(),
            broad_phase: BroadPhase::new(),
            narrow_phase: NarrowPhase::new(),
            bodies: RigidBodySet::new(),
            colliders: ColliderSet::new(),
            impulse_joints: ImpulseJointSet::new(),
            multibody_joints: MultibodyJointSet::new(),
            ccd_solver: CCDSolver::new(),
            collector: CollisionCollector::default(),
            info: utils::fnv_hashmap(64),
        }
    }

    #[inline]
    pub fn gravity(&self) -> (f32, f32) {
        (self.gravity.x, self.gravity.y)
    }

    /// Sleeping dynamic bodies are woken so they feel the change.
    pub fn set_gravity(&mut self, x: f32, y: f32) {
        self.gravity = vector![x, y];
        let sleeping = self.bodies
            .iter()
            .filter(|(_, body)| body.is_dynamic() && body.is_sleeping())
            .map(|(handle, _)| handle)
            .collect::<Vec<_>>();
        for handle in sleeping {
            self.island_manager.wake_up(&mut self.bodies, handle, true);
        }
    }

    #[inline]
    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    pub fn add_body(&mut self, spec: &BodySpec) -> BodyHandle {
        let builder = if spec.is_static {
            RigidBodyBuilder::fixed()
        } else {
            // fast balls must not tunnel through three pixel walls
            RigidBodyBuilder::dynamic().ccd_enabled(true)
        };
        let body = builder.translation(vector![spec.x, spec.y]).build();

        let collider = match spec.shape {
            Shape::Rectangle { width, height } => ColliderBuilder::cuboid(width / 2.0, height / 2.0),
            Shape::Circle { radius } => ColliderBuilder::ball(radius),
        };
        let collider = collider
            .friction(0.0)
            .active_events(ActiveEvents::COLLISION_EVENTS)
            .build();

        let handle = self.bodies.insert(body);
        let _ = self.colliders.insert_with_parent(collider, handle, &mut self.bodies);
        let _ = self.info.insert(handle, BodyInfo {
            label: spec.label,
            shape: spec.shape,
            colour: spec.colour,
        });
        handle
    }

    #[inline]
    pub fn label(&self, handle: BodyHandle) -> Option<Label> {
        self.info.get(&handle).map(|info| info.label)
    }

    /// Handles of every body carrying `label`.
    pub fn bodies_labelled(&self, label: Label) -> Vec<BodyHandle> {
        self.bodies
            .iter()
            .map(|(handle, _)| handle)
            .filter(|handle| self.label(*handle) == Some(label))
            .collect()
    }

    pub fn velocity(&self, handle: BodyHandle) -> Result<(f32, f32)> {
        let body = self.bodies.get(handle).ok_or(ErrorKind::UnknownBody)?;
        let v = body.linvel();
        Ok((v.x, v.y))
    }

    pub fn set_velocity(&mut self, handle: BodyHandle, x: f32, y: f32) -> Result<()> {
        let body = self.bodies.get_mut(handle).ok_or(ErrorKind::UnknownBody)?;
        body.set_linvel(vector![x, y], true);
        Ok(())
    }

    pub fn position(&self, handle: BodyHandle) -> Result<(f32, f32)> {
        let body = self.bodies.get(handle).ok_or(ErrorKind::UnknownBody)?;
        let t = body.translation();
        Ok((t.x, t.y))
    }

    pub fn is_static(&self, handle: BodyHandle) -> Result<bool> {
        let body = self.bodies.get(handle).ok_or(ErrorKind::UnknownBody)?;
        Ok(body.is_fixed())
    }

    /// A static body is immovable and ignores gravity until released.
    pub fn set_static(&mut self, handle: BodyHandle, is_static: bool) -> Result<()> {
        let body = self.bodies.get_mut(handle).ok_or(ErrorKind::UnknownBody)?;
        let body_type = if is_static {
            RigidBodyType::Fixed
        } else {
            RigidBodyType::Dynamic
        };
        body.set_body_type(body_type, true);
        // A body turned dynamic while nothing was awake is not in any active island yet.
        if !is_static {
            self.island_manager.wake_up(&mut self.bodies, handle, true);
        }
        Ok(())
    }

    /// Advance the simulation one step and return the pairs of bodies that
    /// started touching during it.
    pub fn step(&mut self) -> Vec<(BodyHandle, BodyHandle)> {
        self.pipeline.step(&self.gravity,
                           &self.integration_parameters,
                           &mut self.island_manager,
                           &mut self.broad_phase,
                           &mut self.narrow_phase,
                           &mut self.bodies,
                           &mut self.colliders,
                           &mut self.impulse_joints,
                           &mut self.multibody_joints,
                           &mut self.ccd_solver,
                           None,
                           &(),
                           &self.collector);

        let started = {
            let mut started = self.collector.started.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
            started.drain(..).collect::<Vec<_>>()
        };

        started.into_iter()
            .filter_map(|(a, b)| match (self.parent(a), self.parent(b)) {
                (Some(a), Some(b)) => Some((a, b)),
                _ => {
                    warn!("collision between detached colliders {:?} and {:?}", a, b);
                    None
                }
            })
            .collect()
    }

    /// Every body with its current placement.
    pub fn iter_bodies(&self) -> impl Iterator<Item = BodyView> + '_ {
        self.bodies.iter().filter_map(move |(handle, body)| {
            self.info.get(&handle).map(|info| {
                let t = body.translation();
                BodyView {
                    handle,
                    label: info.label,
                    shape: info.shape,
                    colour: info.colour,
                    x: t.x,
                    y: t.y,
                    angle: body.rotation().angle(),
                }
            })
        })
    }

    fn parent(&self, collider: ColliderHandle) -> Option<BodyHandle> {
        self.colliders.get(collider).and_then(|c| c.parent())
    }
}
