/// Direction of one animation pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    fn signum(self) -> f64 {
        match self {
            Self::Forward => 1.0,
            Self::Backward => -1.0,
        }
    }
}

/// Outcome of advancing a state by one tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    /// The state is at rest; nothing changed.
    Idle,
    /// The pass is still in flight.
    Advancing,
    /// The pass just covered a full unit of progress and settled. Surfaced
    /// exactly once per pass, synchronously within the tick that crossed.
    Settled,
}

/// One node's animation progress: a single forward-or-backward pass that
/// self-terminates after covering one full unit.
///
/// The resting value (`committed`) is always exactly 0 or 1; a pass always
/// animates away from whichever extreme was settled at last.
#[derive(Clone, Copy, Debug)]
pub struct NodeState {
    scale: f64,
    committed: f64,
    phase: Phase,
    increment: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    Idle,
    Advancing(Direction),
}

impl NodeState {
    pub fn new(increment: f64) -> Self {
        Self {
            scale: 0.0,
            committed: 0.0,
            phase: Phase::Idle,
            increment,
        }
    }

    /// Current scale, nominally in `[0, 1]`.
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Last settled resting value (0 or 1).
    pub fn committed(&self) -> f64 {
        self.committed
    }

    pub fn is_idle(&self) -> bool {
        self.phase == Phase::Idle
    }

    /// Begin a pass away from the last settled extreme.
    ///
    /// Returns `true` exactly when a pass began; a no-op (`false`) while one
    /// is already in flight.
    pub fn start(&mut self) -> bool {
        if self.phase != Phase::Idle {
            return false;
        }
        debug_assert!(
            self.committed == 0.0 || self.committed == 1.0,
            "committed scale must rest at an extreme, got {}",
            self.committed
        );
        let dir = if self.committed < 0.5 {
            Direction::Forward
        } else {
            Direction::Backward
        };
        self.phase = Phase::Advancing(dir);
        true
    }

    /// Advance one tick. Silent no-op unless a pass is in flight.
    pub fn update(&mut self) -> Step {
        let Phase::Advancing(dir) = self.phase else {
            return Step::Idle;
        };
        self.scale += dir.signum() * self.increment;
        if (self.scale - self.committed).abs() > 1.0 {
            self.scale = self.committed + dir.signum();
            self.committed = self.scale;
            self.phase = Phase::Idle;
            return Step::Settled;
        }
        Step::Advancing
    }
}
