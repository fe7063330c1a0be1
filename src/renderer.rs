use crate::animator::{Animator, Timer};
use crate::chain::Chain;
use crate::config::Config;
use crate::foundation::core::Canvas;
use crate::foundation::error::ArclineResult;
use crate::state::Step;

/// Composes the palette chain with an animator into a render / tap / tick
/// contract.
///
/// One tap begins one continuous burst; ticks advance it; the animator stops
/// automatically when the active node's pass settles. Taps during a burst
/// are ignored.
#[derive(Debug)]
pub struct Renderer<T: Timer> {
    chain: Chain,
    animator: Animator<T>,
    cfg: Config,
}

impl<T: Timer> Renderer<T> {
    pub fn new(cfg: Config, timer: T) -> ArclineResult<Self> {
        let chain = Chain::new(&cfg)?;
        let animator = Animator::new(timer, cfg.tick_interval());
        Ok(Self {
            chain,
            animator,
            cfg,
        })
    }

    /// Draw the active node onto `ctx`.
    pub fn render(&self, ctx: &mut vello_cpu::RenderContext, canvas: Canvas) {
        self.chain.draw(ctx, canvas, &self.cfg);
    }

    /// One discrete trigger. Returns `true` when a burst began.
    pub fn handle_tap(&mut self) -> bool {
        if !self.chain.start_updating() {
            tracing::debug!("tap ignored, burst in flight");
            return false;
        }
        self.animator.start();
        true
    }

    /// Advance one timer tick; stops the animator when the pass settles.
    pub fn tick(&mut self) -> Step {
        let step = self.chain.update();
        if step == Step::Settled {
            self.animator.stop();
        }
        step
    }

    pub fn is_animating(&self) -> bool {
        self.animator.is_running()
    }

    pub fn chain(&self) -> &Chain {
        &self.chain
    }

    pub fn config(&self) -> &Config {
        &self.cfg
    }
}
