use crate::config::Config;
use crate::foundation::core::Canvas;
use crate::foundation::error::ArclineResult;
use crate::node::Node;
use crate::state::{NodeState, Step};

/// Traversal direction across the palette chain.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Travel {
    Forward,
    Backward,
}

impl Travel {
    pub fn flipped(self) -> Self {
        match self {
            Self::Forward => Self::Backward,
            Self::Backward => Self::Forward,
        }
    }
}

/// The fixed chain of palette nodes with one active node and a travel
/// direction.
///
/// A single active node animates a full pass before handoff; the travel
/// direction flips only at the two chain ends, producing an oscillating
/// sweep across the palette (0 → 1 → … → last → … → 1 → 0 → …).
#[derive(Debug)]
pub struct Chain {
    nodes: Vec<Node>,
    active: usize,
    travel: Travel,
}

impl Chain {
    /// Build one node per palette entry; starts at node 0 traveling forward.
    pub fn new(cfg: &Config) -> ArclineResult<Self> {
        cfg.validate()?;
        let len = cfg.palette.len();
        let nodes = (0..len)
            .map(|i| Node::new(i, len, cfg.scale_increment))
            .collect();
        Ok(Self {
            nodes,
            active: 0,
            travel: Travel::Forward,
        })
    }

    /// Draw the active node.
    pub fn draw(&self, ctx: &mut vello_cpu::RenderContext, canvas: Canvas, cfg: &Config) {
        self.nodes[self.active].draw(ctx, canvas, cfg);
    }

    /// Begin a pass on the active node. `false` while one is in flight.
    pub fn start_updating(&mut self) -> bool {
        self.nodes[self.active].start()
    }

    /// Advance the active node by one tick; on settle, hand off to the
    /// neighbor in the travel direction before surfacing [`Step::Settled`].
    pub fn update(&mut self) -> Step {
        let step = self.nodes[self.active].update();
        if step == Step::Settled {
            self.handoff();
        }
        step
    }

    fn handoff(&mut self) {
        match self.nodes[self.active].neighbor(self.travel) {
            Some(next) => {
                tracing::debug!(from = self.active, to = next, "handoff");
                self.active = next;
            }
            None => {
                // Bounce: stay put, reverse the sweep.
                self.travel = self.travel.flipped();
                tracing::debug!(at = self.active, travel = ?self.travel, "reversed at chain end");
            }
        }
    }

    /// Index of the currently active node.
    pub fn active_index(&self) -> usize {
        self.active
    }

    /// Current traversal direction.
    pub fn travel(&self) -> Travel {
        self.travel
    }

    /// Animation state of the active node.
    pub fn active_state(&self) -> &NodeState {
        self.nodes[self.active].state()
    }

    /// Number of nodes (palette entries).
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::core::Rgba8;

    fn chain() -> Chain {
        Chain::new(&Config::default()).unwrap()
    }

    fn run_burst(chain: &mut Chain) {
        assert!(chain.start_updating());
        let mut ticks = 0;
        loop {
            ticks += 1;
            assert!(ticks < 10_000, "burst did not settle");
            if chain.update() == Step::Settled {
                return;
            }
        }
    }

    #[test]
    fn empty_palette_is_rejected() {
        let mut cfg = Config::default();
        cfg.palette.clear();
        assert!(Chain::new(&cfg).is_err());
    }

    #[test]
    fn starts_at_node_zero_going_forward() {
        let c = chain();
        assert_eq!(c.len(), 5);
        assert_eq!(c.active_index(), 0);
        assert_eq!(c.travel(), Travel::Forward);
    }

    #[test]
    fn bursts_walk_the_chain_and_flip_only_from_the_last_node() {
        let mut c = chain();
        for expected in 1..=4 {
            run_burst(&mut c);
            assert_eq!(c.active_index(), expected);
        }
        // Four bursts in: at the last node, not yet flipped.
        assert_eq!(c.travel(), Travel::Forward);

        // The fifth burst settles the last node; its handoff attempt runs
        // off the end, so the chain stays put and reverses.
        run_burst(&mut c);
        assert_eq!(c.active_index(), 4);
        assert_eq!(c.travel(), Travel::Backward);

        // Now the sweep walks back down.
        run_burst(&mut c);
        assert_eq!(c.active_index(), 3);
    }

    #[test]
    fn full_oscillation_returns_to_node_zero() {
        let mut c = chain();
        // 5 bursts up (4 moves + bounce), 4 back down to node 0.
        for _ in 0..9 {
            run_burst(&mut c);
        }
        assert_eq!(c.active_index(), 0);
        assert_eq!(c.travel(), Travel::Backward);
    }

    #[test]
    fn single_entry_palette_bounces_at_both_ends() {
        let mut cfg = Config::default();
        cfg.palette = vec![Rgba8::rgb(10, 20, 30)];
        let mut c = Chain::new(&cfg).unwrap();

        run_burst(&mut c);
        assert_eq!(c.active_index(), 0);
        assert_eq!(c.travel(), Travel::Backward);
        assert_eq!(c.active_state().committed(), 1.0);

        // Second burst animates the same node back toward 0.
        run_burst(&mut c);
        assert_eq!(c.active_index(), 0);
        assert_eq!(c.travel(), Travel::Forward);
        assert_eq!(c.active_state().committed(), 0.0);
    }

    #[test]
    fn update_without_a_trigger_is_idle() {
        let mut c = chain();
        assert_eq!(c.update(), Step::Idle);
        assert_eq!(c.active_index(), 0);
    }
}
