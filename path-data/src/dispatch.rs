//! Routing of command arguments to sink handlers.

use crate::{ArityError, Command, PathSink};

/// Invokes the handler for `command` on `sink` once for each complete group
/// of arguments.
///
/// Argument groups beyond the first are processed with the command's
/// [repeat](Command::repeat) command, so a move followed by extra coordinate
/// pairs produces implicit line commands. Close commands take no arguments
/// and are invoked exactly once; any accompanying numbers are ignored.
///
/// If the arguments end with an incomplete group (including the case where
/// there are no arguments at all for a command that requires some), the
/// complete groups before it are still dispatched and an [`ArityError`]
/// describing the incomplete group is returned.
pub fn dispatch<S>(sink: &mut S, command: Command, args: &[f64]) -> Result<(), ArityError>
where
    S: PathSink + ?Sized,
{
    let arity = command.arity();
    if arity == 0 {
        apply(sink, command, &[]);
        return Ok(());
    }
    if args.is_empty() {
        return Err(ArityError::new(command, args));
    }
    let mut command = command;
    for group in args.chunks(arity) {
        if group.len() < arity {
            return Err(ArityError::new(command, group));
        }
        apply(sink, command, group);
        if let Some(repeat) = command.repeat() {
            command = repeat;
        }
    }
    Ok(())
}

/// Same as [`dispatch`] but takes the command as a letter.
///
/// Letters outside the command alphabet are ignored.
pub fn dispatch_letter<S>(sink: &mut S, letter: char, args: &[f64]) -> Result<(), ArityError>
where
    S: PathSink + ?Sized,
{
    match Command::from_letter(letter) {
        Some(command) => dispatch(sink, command, args),
        None => {
            log::debug!("skipping unknown path command '{letter}'");
            Ok(())
        }
    }
}

/// Calls the handler for a single command. `args` must contain exactly
/// `command.arity()` values.
fn apply<S>(sink: &mut S, command: Command, args: &[f64])
where
    S: PathSink + ?Sized,
{
    use Command::*;
    log::trace!("{} {args:?}", command.letter());
    let a = args;
    match command {
        MoveTo => sink.move_to(a[0], a[1]),
        RelMoveTo => sink.rel_move_to(a[0], a[1]),
        LineTo => sink.line_to(a[0], a[1]),
        RelLineTo => sink.rel_line_to(a[0], a[1]),
        HLineTo => sink.hline_to(a[0]),
        RelHLineTo => sink.rel_hline_to(a[0]),
        VLineTo => sink.vline_to(a[0]),
        RelVLineTo => sink.rel_vline_to(a[0]),
        CurveTo => sink.curve_to(a[0], a[1], a[2], a[3], a[4], a[5]),
        RelCurveTo => sink.rel_curve_to(a[0], a[1], a[2], a[3], a[4], a[5]),
        SmoothCurveTo => sink.smooth_curve_to(a[0], a[1], a[2], a[3]),
        RelSmoothCurveTo => sink.rel_smooth_curve_to(a[0], a[1], a[2], a[3]),
        QuadTo => sink.quad_to(a[0], a[1], a[2], a[3]),
        RelQuadTo => sink.rel_quad_to(a[0], a[1], a[2], a[3]),
        SmoothQuadTo => sink.smooth_quad_to(a[0], a[1]),
        RelSmoothQuadTo => sink.rel_smooth_quad_to(a[0], a[1]),
        ArcTo => sink.arc_to(a[0], a[1], a[2], a[3] != 0.0, a[4] != 0.0, a[5], a[6]),
        RelArcTo => sink.rel_arc_to(a[0], a[1], a[2], a[3] != 0.0, a[4] != 0.0, a[5], a[6]),
        ClosePath => sink.close(),
        RelClosePath => sink.rel_close(),
    }
}
