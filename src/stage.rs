use crate::animator::ManualTimer;
use crate::config::Config;
use crate::foundation::core::{Canvas, Rgba8};
use crate::foundation::error::{ArclineError, ArclineResult};
use crate::renderer::Renderer;
use crate::state::Step;

/// Owns the drawing surface lifecycle and drives the render/tick loop.
///
/// The raster context and pixmap are created once at the startup dimensions
/// and never resized. Tick delivery is the stage's serialized loop; the
/// renderer's animator carries the armed/running contract.
pub struct Stage {
    canvas: Canvas,
    ctx: vello_cpu::RenderContext,
    pixmap: vello_cpu::Pixmap,
    renderer: Renderer<ManualTimer>,
    back_color: Rgba8,
}

impl Stage {
    pub fn new(canvas: Canvas, cfg: Config) -> ArclineResult<Self> {
        cfg.validate()?;
        let (w, h) = raster_dims(canvas)?;
        let back_color = cfg.back_color;
        Ok(Self {
            canvas,
            ctx: vello_cpu::RenderContext::new(w, h),
            pixmap: vello_cpu::Pixmap::new(w, h),
            renderer: Renderer::new(cfg, ManualTimer::default())?,
            back_color,
        })
    }

    /// Repaint: clear to the background color, draw the active node,
    /// rasterize. Returns the finished frame.
    pub fn frame(&mut self) -> &vello_cpu::Pixmap {
        clear_pixmap(&mut self.pixmap, self.back_color.to_array());
        self.ctx.reset();
        self.renderer.render(&mut self.ctx, self.canvas);
        self.ctx.flush();
        self.ctx.render_to_pixmap(&mut self.pixmap);
        &self.pixmap
    }

    /// The discrete trigger. Returns `true` when a burst began.
    pub fn tap(&mut self) -> bool {
        self.renderer.handle_tap()
    }

    /// Advance one animation tick.
    pub fn tick(&mut self) -> Step {
        self.renderer.tick()
    }

    pub fn is_animating(&self) -> bool {
        self.renderer.is_animating()
    }

    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    pub fn renderer(&self) -> &Renderer<ManualTimer> {
        &self.renderer
    }

    /// Run one full trigger-to-settle burst synchronously.
    ///
    /// Repaints once immediately, then after every tick (the settling tick
    /// included), handing each finished frame to `on_frame`. Pacing, if any,
    /// is `on_frame`'s business. Returns the tick count, 0 when the tap was
    /// ignored because a burst was already in flight.
    #[tracing::instrument(skip(self, on_frame))]
    pub fn run_burst(
        &mut self,
        mut on_frame: impl FnMut(&vello_cpu::Pixmap) -> ArclineResult<()>,
    ) -> ArclineResult<u32> {
        if !self.tap() {
            return Ok(0);
        }
        on_frame(self.frame())?;
        let mut ticks = 0u32;
        while self.is_animating() {
            self.tick();
            ticks += 1;
            on_frame(self.frame())?;
        }
        tracing::debug!(ticks, active = self.renderer.chain().active_index(), "burst settled");
        Ok(ticks)
    }
}

impl std::fmt::Debug for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Stage")
            .field("canvas", &self.canvas)
            .field("animating", &self.is_animating())
            .finish_non_exhaustive()
    }
}

fn raster_dims(canvas: Canvas) -> ArclineResult<(u16, u16)> {
    let w = u16::try_from(canvas.width)
        .map_err(|_| ArclineError::validation("canvas width exceeds the raster target limit"))?;
    let h = u16::try_from(canvas.height)
        .map_err(|_| ArclineError::validation("canvas height exceeds the raster target limit"))?;
    if w == 0 || h == 0 {
        return Err(ArclineError::validation("canvas dimensions must be > 0"));
    }
    Ok((w, h))
}

fn clear_pixmap(pixmap: &mut vello_cpu::Pixmap, rgba: [u8; 4]) {
    for px in pixmap.data_as_u8_slice_mut().chunks_exact_mut(4) {
        px.copy_from_slice(&rgba);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn oversized_canvas_is_rejected() {
        let canvas = Canvas {
            width: 100_000,
            height: 100,
        };
        assert!(Stage::new(canvas, Config::default()).is_err());
    }

    #[test]
    fn resting_frame_is_background_plus_nothing() {
        // At scale 0 the figure collapses: sinify(0) = 0, so every sub-scale
        // is 0 and only the zero-length line's round cap could mark pixels.
        let canvas = Canvas::new(64, 64).unwrap();
        let mut stage = Stage::new(canvas, Config::default()).unwrap();
        let back = Config::default().back_color.to_array();
        let frame = stage.frame();
        let background = frame
            .data_as_u8_slice()
            .chunks_exact(4)
            .filter(|p| *p == back)
            .count();
        // Most of the surface stays background-colored.
        assert!(background > 64 * 64 / 2);
    }

    #[test]
    fn tap_then_ticks_change_the_frame() {
        let canvas = Canvas::new(64, 64).unwrap();
        let mut stage = Stage::new(canvas, Config::default()).unwrap();
        let resting = stage.frame().data_as_u8_slice().to_vec();

        assert!(stage.tap());
        for _ in 0..40 {
            stage.tick();
        }
        let mid = stage.frame().data_as_u8_slice().to_vec();
        assert_ne!(resting, mid);
    }

    #[test]
    fn run_burst_reports_ticks_and_stops() {
        let canvas = Canvas::new(32, 32).unwrap();
        let mut cfg = Config::default();
        cfg.scale_increment = 0.25;
        let mut stage = Stage::new(canvas, cfg).unwrap();

        let mut frames = 0u32;
        let ticks = stage
            .run_burst(|_| {
                frames += 1;
                Ok(())
            })
            .unwrap();
        // 4 advancing ticks to reach 1.0, a 5th to cross and settle.
        assert_eq!(ticks, 5);
        assert_eq!(frames, ticks + 1);
        assert!(!stage.is_animating());
    }
}
