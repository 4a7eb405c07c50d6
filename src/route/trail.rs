//! Paw-print trail bookkeeping

use std::collections::VecDeque;

use crate::core::Coordinate;
use crate::geometry::{distance, interpolate};
use crate::validation::GeometryError;

/// Movement-driven paw-print positions with a bounded history.
///
/// The first observed position always drops a print; afterwards a
/// print is dropped once the walker has moved at least `spacing_m`
/// since the previous one. The history is capped at `max_prints`,
/// evicting the oldest print first.
#[derive(Debug)]
pub struct PawTrail {
    spacing_m: f64,
    max_prints: usize,
    last_drop: Option<Coordinate>,
    prints: VecDeque<Coordinate>,
}

impl PawTrail {
    pub fn new(spacing_m: f64, max_prints: usize) -> Self {
        Self {
            spacing_m,
            max_prints,
            last_drop: None,
            prints: VecDeque::new(),
        }
    }

    /// Advance to `pos`, returning the freshly dropped print if the
    /// walker has moved far enough.
    pub fn advance(&mut self, pos: Coordinate) -> Option<Coordinate> {
        let should_drop = match self.last_drop {
            None => true,
            Some(last) => distance(last, pos) >= self.spacing_m,
        };
        if !should_drop {
            return None;
        }
        self.last_drop = Some(pos);
        self.prints.push_back(pos);
        if self.prints.len() > self.max_prints {
            self.prints.pop_front();
        }
        Some(pos)
    }

    /// Prints currently on the ground, oldest first.
    pub fn prints(&self) -> impl Iterator<Item = &Coordinate> {
        self.prints.iter()
    }

    pub fn len(&self) -> usize {
        self.prints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prints.is_empty()
    }

    /// Wipe the trail, e.g. when guidance ends.
    pub fn clear(&mut self) {
        self.prints.clear();
        self.last_drop = None;
    }

    /// Print positions along a proposed route, spaced like walked
    /// prints, with the duplicate points at segment boundaries removed.
    pub fn along_path(
        path: &[Coordinate],
        spacing_m: f64,
    ) -> Result<Vec<Coordinate>, GeometryError> {
        let mut points = interpolate(path, spacing_m)?;
        points.dedup();
        Ok(points)
    }
}
