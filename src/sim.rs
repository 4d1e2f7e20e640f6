use tracing::{debug, info, trace};

use crate::{Cell, Pos, World};

pub use engine::{neighbor_count, step};
mod engine;

/// simulation state: every computed generation, the displayed one, and the
/// seed kept aside for resets.
///
/// generations are computed lazily when stepping past the last one and are
/// never dropped by navigating backward.
#[derive(Debug, Clone)]
pub struct Sim<W>
where
    W: World,
{
    generations: Vec<W>,
    cursor: usize,
    original: W,
}

impl<W> Sim<W>
where
    W: World,
{
    pub fn new(seed: W) -> Self {
        Self {
            generations: vec![seed.clone()],
            cursor: 0,
            original: seed,
        }
    }

    /// replaces the whole history and the retained original with `seed`.
    pub fn initialize(&mut self, seed: W) {
        info!(cells = seed.len(), "simulation initialized");
        *self = Self::new(seed);
    }

    /// starts a fresh history from `seed`, the retained original is kept for
    /// `reset`.
    pub fn reseed(&mut self, seed: W) {
        debug!(cells = seed.len(), "history reseeded");
        self.generations = vec![seed];
        self.cursor = 0;
    }

    /// the displayed generation, `None` only between `clear` and `initialize`.
    pub fn current(&self) -> Option<&W> {
        self.generations.get(self.cursor)
    }

    pub fn original(&self) -> &W {
        &self.original
    }

    /// edits the displayed generation in place. later cached generations are
    /// left untouched.
    pub fn mutate_current(&mut self, pos: Pos, alive: bool) {
        if let Some(world) = self.generations.get_mut(self.cursor) {
            world.set(pos, Cell::from_alive(alive));
        }
    }

    pub fn step_forward(&mut self) {
        let Some(current) = self.current() else {
            return;
        };
        if self.cursor + 1 == self.generations.len() {
            let next = step(current);
            trace!(generation = self.generations.len(), cells = next.len(), "computed generation");
            self.generations.push(next);
        }
        self.cursor += 1;
    }

    pub fn step_backward(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn jump_to_latest(&mut self) {
        self.cursor = self.generations.len().saturating_sub(1);
    }

    pub fn jump_to_start(&mut self) {
        self.cursor = 0;
    }

    pub fn reset(&mut self) {
        self.generations = vec![self.original.clone()];
        self.cursor = 0;
        info!("simulation reset to original state");
    }

    /// drops every generation. `initialize` must follow before the state is
    /// usable again; until then navigation and edits do nothing.
    pub fn clear(&mut self) {
        self.generations.clear();
        self.cursor = 0;
        debug!("history cleared");
    }

    pub fn is_cleared(&self) -> bool {
        self.generations.is_empty()
    }

    /// index of the displayed generation.
    pub fn generation(&self) -> usize {
        self.cursor
    }

    pub fn generation_count(&self) -> usize {
        self.generations.len()
    }

    pub fn population(&self) -> usize {
        self.current().map_or(0, |world| world.len())
    }
}

impl<W> Default for Sim<W>
where
    W: World,
{
    fn default() -> Self {
        Self::new(W::default())
    }
}
