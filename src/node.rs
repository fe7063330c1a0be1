use crate::chain::Travel;
use crate::config::Config;
use crate::draw;
use crate::foundation::core::Canvas;
use crate::state::{NodeState, Step};

/// One palette entry in the chain.
///
/// Nodes live in the chain's `Vec`; neighbor links are indices, established
/// once at construction. A node owns only its animation state.
#[derive(Debug)]
pub(crate) struct Node {
    index: usize,
    state: NodeState,
    prev: Option<usize>,
    next: Option<usize>,
}

impl Node {
    pub(crate) fn new(index: usize, len: usize, increment: f64) -> Self {
        Self {
            index,
            state: NodeState::new(increment),
            prev: index.checked_sub(1),
            next: if index + 1 < len { Some(index + 1) } else { None },
        }
    }

    pub(crate) fn draw(&self, ctx: &mut vello_cpu::RenderContext, canvas: Canvas, cfg: &Config) {
        draw::node(ctx, canvas, cfg, self.index, self.state.scale());
    }

    pub(crate) fn start(&mut self) -> bool {
        self.state.start()
    }

    pub(crate) fn update(&mut self) -> Step {
        self.state.update()
    }

    /// Neighbor index in the travel direction; `None` at either chain end.
    pub(crate) fn neighbor(&self, travel: Travel) -> Option<usize> {
        match travel {
            Travel::Forward => self.next,
            Travel::Backward => self.prev,
        }
    }

    pub(crate) fn state(&self) -> &NodeState {
        &self.state
    }
}
