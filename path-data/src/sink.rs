//! The interface that receives parsed path commands.

use crate::PathState;

/// Interface for accepting a sequence of path data commands.
///
/// There is one method for each command letter. Implementors provide the
/// absolute commands; the relative commands have default implementations
/// that resolve their arguments against the current point and forward to
/// the absolute form.
///
/// Implementations own a [`PathState`] and must update it in every handler
/// through the matching [`PathState`] method so that relative and smooth
/// commands resolve correctly.
pub trait PathSink {
    /// Prepares the sink for a new path.
    ///
    /// Resets the tracked points to the origin and discards any output
    /// from a previous parse.
    fn init(&mut self);

    /// Returns the tracked points.
    fn state(&self) -> &PathState;

    /// `M x y`
    fn move_to(&mut self, x: f64, y: f64);

    /// `L x y`
    fn line_to(&mut self, x: f64, y: f64);

    /// `H x`
    fn hline_to(&mut self, x: f64);

    /// `V y`
    fn vline_to(&mut self, y: f64);

    /// `C x1 y1 x2 y2 x y`
    fn curve_to(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, x: f64, y: f64);

    /// `S x2 y2 x y`
    fn smooth_curve_to(&mut self, x2: f64, y2: f64, x: f64, y: f64);

    /// `Q x1 y1 x y`
    fn quad_to(&mut self, x1: f64, y1: f64, x: f64, y: f64);

    /// `T x y`
    fn smooth_quad_to(&mut self, x: f64, y: f64);

    /// `A rx ry rotation large_arc sweep x y`
    ///
    /// The rotation is in degrees.
    #[allow(clippy::too_many_arguments)]
    fn arc_to(
        &mut self,
        rx: f64,
        ry: f64,
        rotation: f64,
        large_arc: bool,
        sweep: bool,
        x: f64,
        y: f64,
    );

    /// `Z`
    fn close(&mut self);

    /// `m dx dy`
    fn rel_move_to(&mut self, dx: f64, dy: f64) {
        let p = self.state().current();
        self.move_to(p.x + dx, p.y + dy);
    }

    /// `l dx dy`
    fn rel_line_to(&mut self, dx: f64, dy: f64) {
        let p = self.state().current();
        self.line_to(p.x + dx, p.y + dy);
    }

    /// `h dx`
    fn rel_hline_to(&mut self, dx: f64) {
        let p = self.state().current();
        self.hline_to(p.x + dx);
    }

    /// `v dy`
    fn rel_vline_to(&mut self, dy: f64) {
        let p = self.state().current();
        self.vline_to(p.y + dy);
    }

    /// `c dx1 dy1 dx2 dy2 dx dy`
    fn rel_curve_to(&mut self, dx1: f64, dy1: f64, dx2: f64, dy2: f64, dx: f64, dy: f64) {
        let p = self.state().current();
        self.curve_to(
            p.x + dx1,
            p.y + dy1,
            p.x + dx2,
            p.y + dy2,
            p.x + dx,
            p.y + dy,
        );
    }

    /// `s dx2 dy2 dx dy`
    fn rel_smooth_curve_to(&mut self, dx2: f64, dy2: f64, dx: f64, dy: f64) {
        let p = self.state().current();
        self.smooth_curve_to(p.x + dx2, p.y + dy2, p.x + dx, p.y + dy);
    }

    /// `q dx1 dy1 dx dy`
    fn rel_quad_to(&mut self, dx1: f64, dy1: f64, dx: f64, dy: f64) {
        let p = self.state().current();
        self.quad_to(p.x + dx1, p.y + dy1, p.x + dx, p.y + dy);
    }

    /// `t dx dy`
    fn rel_smooth_quad_to(&mut self, dx: f64, dy: f64) {
        let p = self.state().current();
        self.smooth_quad_to(p.x + dx, p.y + dy);
    }

    /// `a rx ry rotation large_arc sweep dx dy`
    #[allow(clippy::too_many_arguments)]
    fn rel_arc_to(
        &mut self,
        rx: f64,
        ry: f64,
        rotation: f64,
        large_arc: bool,
        sweep: bool,
        dx: f64,
        dy: f64,
    ) {
        let p = self.state().current();
        self.arc_to(rx, ry, rotation, large_arc, sweep, p.x + dx, p.y + dy);
    }

    /// `z`
    fn rel_close(&mut self) {
        self.close();
    }
}

