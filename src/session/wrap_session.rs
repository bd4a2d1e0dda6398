use std::sync::mpsc;
use std::time::Instant;

use crate::dimension::catalog::ProductSize;
use crate::dimension::model::DimensionSpec;
use crate::effects::mode::{EffectMode, EffectParams, OverlayPlan, RenderTarget, composite};
use crate::export::pipeline::render_export;
use crate::foundation::color::Color;
use crate::foundation::core::{Raster, Rect};
use crate::foundation::error::{WrapError, WrapResult};
use crate::overlay::layers::{OverlayKind, OverlayLayers};
use crate::schedule::debounce::Debouncer;
use crate::schedule::suppress::SuppressionFlag;
use crate::session::config::SessionConfig;
use crate::surface::design::{ChangeEvent, DesignSurface};
use crate::surface::element::{DesignElement, ElementAttrs, ElementId, ElementPatch};
use crate::transform::rescale::rescale_surface;

/// Name of the element created by [`WrapSession::upload_image`].
pub const BACKGROUND_ELEMENT: &str = "background";

/// Counters describing what the session has done so far.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SessionStats {
    /// Change notifications observed outside internal mutation scopes.
    pub notifications: u64,
    /// Preview compositor invocations, from mode switches and regenerations alike.
    pub compositor_runs: u64,
    /// Regenerations whose result was written to the surface.
    pub regenerations: u64,
    /// Regenerations dropped because a newer one had started.
    pub stale_discarded: u64,
    /// Snapshots that failed; the prior overlay was kept each time.
    pub snapshot_failures: u64,
}

/// Handle for a regeneration started with [`WrapSession::begin_regeneration`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct RegenerationTicket(u64);

/// Wrap compositor state bound to one design surface.
///
/// The session owns the surface, the four overlay layers installed on it, the active effect
/// and the regeneration scheduler. It is single-threaded: change notifications are buffered
/// by the surface listener and consumed by [`WrapSession::pump`], which the host calls from
/// its event loop.
pub struct WrapSession<S: DesignSurface> {
    surface: S,
    config: SessionConfig,
    dims: DimensionSpec,
    mode: EffectMode,
    params: EffectParams,
    layers: OverlayLayers,
    suppression: SuppressionFlag,
    events: mpsc::Receiver<ChangeEvent>,
    debouncer: Debouncer,
    generation: u64,
    stats: SessionStats,
}

impl<S: DesignSurface> WrapSession<S> {
    /// Size the page for the configured product, attach the overlay layers and start
    /// listening for edits.
    #[tracing::instrument(skip(surface))]
    pub fn new(mut surface: S, config: SessionConfig) -> WrapResult<Self> {
        config.validate()?;
        let dims = DimensionSpec::new(
            config.product_size,
            config.border_width_in,
            config.preview_dpi,
        )?;
        let total = dims.total();
        surface.set_page_size(total.width, total.height);
        let layers = OverlayLayers::install(&mut surface, total.width, total.height);

        let suppression = SuppressionFlag::new();
        let (tx, events) = mpsc::channel();
        let flag = suppression.clone();
        surface.on_change(Box::new(move |event: &ChangeEvent| {
            if !flag.is_suppressed() {
                // Fails only once the session has been dropped.
                let _ = tx.send(*event);
            }
        }));

        let mut session = Self {
            surface,
            params: EffectParams {
                border_color: config.border_color,
            },
            debouncer: Debouncer::new(config.debounce()),
            config,
            dims,
            mode: EffectMode::None,
            layers,
            suppression,
            events,
            generation: 0,
            stats: SessionStats::default(),
        };
        session.warm_mirror()?;
        tracing::info!(
            product = %dims.product(),
            width = total.width,
            height = total.height,
            "wrap session ready"
        );
        Ok(session)
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Mutable access for user edits; they are observed at the next [`Self::pump`].
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn dimensions(&self) -> &DimensionSpec {
        &self.dims
    }

    pub fn effect_mode(&self) -> EffectMode {
        self.mode
    }

    pub fn effect_params(&self) -> &EffectParams {
        &self.params
    }

    pub fn overlay_layers(&self) -> &OverlayLayers {
        &self.layers
    }

    pub fn stats(&self) -> SessionStats {
        self.stats
    }

    /// When the pending regeneration is due, if one is armed.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.debouncer.deadline()
    }

    /// Activate `mode`, showing exactly its overlays and hiding all others.
    ///
    /// The overlay rasters are computed before anything on the surface changes. A failing
    /// snapshot is logged and the layers keep their previous rasters; a missing layer aborts
    /// with [`WrapError::OverlayUninitialized`] and leaves the session untouched.
    ///
    /// Change notifications buffered before the switch are consumed without scheduling a
    /// regeneration.
    #[tracing::instrument(skip(self, params), fields(from = %self.mode))]
    pub fn set_effect_mode(&mut self, mode: EffectMode, params: EffectParams) -> WrapResult<()> {
        self.layers.ensure_attached(&self.surface)?;
        let plan = match self.content_for(mode) {
            Ok(snapshot) => Some(self.run_compositor(mode, &params, &snapshot)?),
            Err(WrapError::Snapshot(msg)) => {
                self.stats.snapshot_failures += 1;
                tracing::warn!(%mode, error = %msg, "snapshot failed, keeping previous overlay");
                None
            }
            Err(err) => return Err(err),
        };

        let plan_written = plan.is_some();
        {
            let _scope = self.suppression.enter();
            for kind in OverlayKind::ALL {
                if !mode.overlays().contains(&kind) {
                    self.layers.set_visible(&mut self.surface, kind, false)?;
                }
            }
            match plan {
                Some(plan) => self.write_plan(plan, Some(true))?,
                None => {
                    for kind in mode.overlays() {
                        self.layers.set_visible(&mut self.surface, *kind, true)?;
                    }
                }
            }
        }

        self.mode = mode;
        self.params = params;
        self.generation += 1;
        // Edits made before the switch never schedule a regeneration.
        self.discard_pending_events();
        if plan_written {
            self.debouncer.cancel();
        }
        tracing::debug!(generation = self.generation, "effect mode applied");
        Ok(())
    }

    /// Change the solid border color, redrawing the border if it is showing.
    pub fn set_border_color(&mut self, color: Color) -> WrapResult<()> {
        let params = EffectParams {
            border_color: color,
        };
        if self.mode == EffectMode::Border {
            return self.set_effect_mode(EffectMode::Border, params);
        }
        self.params = params;
        Ok(())
    }

    /// Change the wrap band width. The total canvas grows or shrinks, so the surface is
    /// rescaled and the active mode re-applied.
    ///
    /// An error from re-applying the mode is returned after the resize has been committed.
    #[tracing::instrument(skip(self))]
    pub fn set_border_width(&mut self, inches: f64) -> WrapResult<()> {
        if !inches.is_finite() || inches <= 0.0 {
            tracing::error!(inches, "rejected border width");
            return Err(WrapError::validation(format!(
                "border width must be finite and > 0 inches, got {inches}"
            )));
        }
        let dims = self.dims.with_border_width(inches)?;
        self.resize_to(dims)
    }

    /// Switch to another catalog product size. Unknown keys abort with a configuration error
    /// and change nothing.
    #[tracing::instrument(skip(self))]
    pub fn set_product_size(&mut self, key: &str) -> WrapResult<()> {
        let product = key.parse::<ProductSize>().inspect_err(|err| {
            tracing::error!(%err, "rejected product size");
        })?;
        if product == self.dims.product() {
            return Ok(());
        }
        let dims = self.dims.with_product(product)?;
        self.resize_to(dims)
    }

    /// Place `image` as the bottom-most element covering the whole canvas, replacing an
    /// earlier upload.
    ///
    /// This is a user edit: it is not suppressed and schedules a regeneration like any other.
    #[tracing::instrument(skip(self, image), fields(width = image.width, height = image.height))]
    pub fn upload_image(&mut self, image: Raster) -> WrapResult<ElementId> {
        let total = self.dims.total();
        let geometry = Rect::new(0.0, 0.0, total.width, total.height);
        let layers = self.layers;
        let existing = self.surface.find(&|e: &DesignElement| {
            !layers.contains(e.id) && e.attrs.name.as_deref() == Some(BACKGROUND_ELEMENT)
        });
        let id = match existing.first() {
            Some(id) => {
                self.surface.update_element(
                    *id,
                    ElementPatch::geometry(geometry).with_source(image),
                )?;
                *id
            }
            None => self
                .surface
                .add_element(ElementAttrs::image(image, geometry).named(BACKGROUND_ELEMENT)),
        };
        self.surface.move_to_bottom(id)?;
        Ok(id)
    }

    /// Render the final artifact for `size_key` at the export DPI.
    ///
    /// The snapshot is taken with every overlay hidden; the active mode is recomputed at export
    /// dimensions without guides. When `size_key` differs from the current product the design
    /// is stretched per axis onto the requested canvas.
    #[tracing::instrument(skip(self))]
    pub fn export_high_res(&mut self, size_key: &str) -> WrapResult<Raster> {
        let product = size_key.parse::<ProductSize>().inspect_err(|err| {
            tracing::error!(%err, "rejected export size");
        })?;
        let export_dims =
            DimensionSpec::new(product, self.dims.border_width_in(), self.config.export_dpi)?;
        self.layers.ensure_attached(&self.surface)?;
        let snapshot = self.capture_content()?;
        let out = render_export(
            &snapshot,
            self.mode,
            &self.params,
            &export_dims,
            &self.config.effect_style(),
        )?;
        tracing::info!(
            mode = %self.mode,
            width = out.width,
            height = out.height,
            dpi = export_dims.dpi(),
            "export rendered"
        );
        Ok(out)
    }

    /// Drive the scheduler: consume buffered change notifications and regenerate the active
    /// overlays once the debounce window has elapsed.
    ///
    /// Returns whether a regeneration was written. Snapshot failures are logged and skipped.
    pub fn pump(&mut self, now: Instant) -> WrapResult<bool> {
        let observed = self.events.try_iter().count() as u64;
        if observed > 0 {
            self.stats.notifications += observed;
            if self.mode.tracks_content() && self.debouncer.request(now) {
                tracing::debug!(observed, "regeneration scheduled");
            }
        }
        if !self.debouncer.poll(now) {
            return Ok(false);
        }

        let ticket = self.begin_regeneration();
        match self.capture_content() {
            Ok(snapshot) => self.finish_regeneration(ticket, snapshot),
            Err(WrapError::Snapshot(msg)) => {
                self.stats.snapshot_failures += 1;
                tracing::warn!(error = %msg, "snapshot failed, regeneration skipped");
                Ok(false)
            }
            Err(err) => Err(err),
        }
    }

    /// Start a regeneration whose snapshot the host resolves itself.
    ///
    /// Any ticket issued earlier becomes stale, as do tickets that predate a mode switch or a
    /// resize.
    pub fn begin_regeneration(&mut self) -> RegenerationTicket {
        self.generation += 1;
        RegenerationTicket(self.generation)
    }

    /// Composite `snapshot` for the active mode and write it, unless `ticket` is stale.
    ///
    /// Returns whether the result was written.
    pub fn finish_regeneration(
        &mut self,
        ticket: RegenerationTicket,
        snapshot: Raster,
    ) -> WrapResult<bool> {
        if ticket.0 < self.generation {
            self.stats.stale_discarded += 1;
            tracing::debug!(
                ticket = ticket.0,
                newest = self.generation,
                "stale regeneration discarded"
            );
            return Ok(false);
        }
        if !self.mode.tracks_content() {
            return Ok(false);
        }
        self.layers.ensure_attached(&self.surface)?;
        let params = self.params;
        let plan = self.run_compositor(self.mode, &params, &snapshot)?;
        {
            let _scope = self.suppression.enter();
            self.write_plan(plan, None)?;
        }
        self.stats.regenerations += 1;
        tracing::debug!(mode = %self.mode, "overlays regenerated");
        Ok(true)
    }

    /// Snapshot the design with every overlay hidden, restoring visibility afterwards.
    pub fn capture_content(&mut self) -> WrapResult<Raster> {
        let _scope = self.suppression.enter();
        let visible = self.layers.visible_kinds(&self.surface);
        for kind in &visible {
            self.layers.set_visible(&mut self.surface, *kind, false)?;
        }
        let snapshot = self.surface.render_snapshot();
        for kind in &visible {
            self.layers.set_visible(&mut self.surface, *kind, true)?;
        }
        snapshot
    }

    fn content_for(&mut self, mode: EffectMode) -> WrapResult<Raster> {
        if mode.tracks_content() {
            self.capture_content()
        } else {
            Raster::new(0, 0)
        }
    }

    fn run_compositor(
        &mut self,
        mode: EffectMode,
        params: &EffectParams,
        snapshot: &Raster,
    ) -> WrapResult<OverlayPlan> {
        self.stats.compositor_runs += 1;
        composite(
            mode,
            snapshot,
            &self.dims,
            params,
            &self.config.effect_style(),
            RenderTarget::Preview,
        )
    }

    fn write_plan(&mut self, plan: OverlayPlan, visible: Option<bool>) -> WrapResult<()> {
        for (kind, raster) in plan.layers {
            self.layers.write(&mut self.surface, kind, raster, visible)?;
        }
        Ok(())
    }

    fn resize_to(&mut self, dims: DimensionSpec) -> WrapResult<()> {
        let (old, new) = (self.dims.total(), dims.total());
        {
            let _scope = self.suppression.enter();
            rescale_surface(&mut self.surface, &self.layers, old, new)?;
        }
        self.dims = dims;
        self.generation += 1;
        tracing::info!(
            product = %dims.product(),
            border_in = dims.border_width_in(),
            width = new.width,
            height = new.height,
            "canvas resized"
        );

        self.discard_pending_events();
        if self.mode == EffectMode::None {
            return Ok(());
        }
        let params = self.params;
        self.set_effect_mode(self.mode, params).inspect_err(|err| {
            tracing::error!(%err, mode = %self.mode, "re-applying effect after resize failed");
        })
    }

    fn discard_pending_events(&mut self) {
        let observed = self.events.try_iter().count() as u64;
        if observed > 0 {
            self.stats.notifications += observed;
            tracing::trace!(observed, "pending notifications absorbed");
        }
    }

    /// Prepare a hidden mirror wrap so the first switch to Mirror has content to show.
    fn warm_mirror(&mut self) -> WrapResult<()> {
        let snapshot = match self.capture_content() {
            Ok(snapshot) => snapshot,
            Err(WrapError::Snapshot(msg)) => {
                self.stats.snapshot_failures += 1;
                tracing::warn!(error = %msg, "initial mirror wrap skipped");
                return Ok(());
            }
            Err(err) => return Err(err),
        };
        let params = self.params;
        let plan = self.run_compositor(EffectMode::Mirror, &params, &snapshot)?;
        let _scope = self.suppression.enter();
        self.write_plan(plan, Some(false))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/wrap_session.rs"]
mod tests;
