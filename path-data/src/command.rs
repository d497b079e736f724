//! Path data command letters.

/// A path data command.
///
/// Each command corresponds to a single letter in path data. Uppercase
/// letters take absolute coordinates and lowercase letters take coordinates
/// relative to the current point.
///
/// See <https://www.w3.org/TR/SVG11/paths.html#PathData>
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Command {
    /// `M`: begin a new subpath.
    MoveTo,
    /// `m`
    RelMoveTo,
    /// `L`: straight line.
    LineTo,
    /// `l`
    RelLineTo,
    /// `H`: horizontal line.
    HLineTo,
    /// `h`
    RelHLineTo,
    /// `V`: vertical line.
    VLineTo,
    /// `v`
    RelVLineTo,
    /// `C`: cubic bezier.
    CurveTo,
    /// `c`
    RelCurveTo,
    /// `S`: cubic bezier with a reflected first control point.
    SmoothCurveTo,
    /// `s`
    RelSmoothCurveTo,
    /// `Q`: quadratic bezier.
    QuadTo,
    /// `q`
    RelQuadTo,
    /// `T`: quadratic bezier with a reflected control point.
    SmoothQuadTo,
    /// `t`
    RelSmoothQuadTo,
    /// `A`: elliptical arc.
    ArcTo,
    /// `a`
    RelArcTo,
    /// `Z`: close the current subpath.
    ClosePath,
    /// `z`
    RelClosePath,
}

impl Command {
    /// Every command, in letter order with each absolute command followed
    /// by its relative counterpart.
    pub const ALL: [Command; 20] = [
        Command::ArcTo,
        Command::RelArcTo,
        Command::CurveTo,
        Command::RelCurveTo,
        Command::HLineTo,
        Command::RelHLineTo,
        Command::LineTo,
        Command::RelLineTo,
        Command::MoveTo,
        Command::RelMoveTo,
        Command::QuadTo,
        Command::RelQuadTo,
        Command::SmoothCurveTo,
        Command::RelSmoothCurveTo,
        Command::SmoothQuadTo,
        Command::RelSmoothQuadTo,
        Command::VLineTo,
        Command::RelVLineTo,
        Command::ClosePath,
        Command::RelClosePath,
    ];

    /// Returns the command for the given letter.
    ///
    /// Letters are case sensitive. Returns `None` for anything outside the
    /// command alphabet.
    pub fn from_letter(letter: char) -> Option<Self> {
        use Command::*;
        Some(match letter {
            'A' => ArcTo,
            'a' => RelArcTo,
            'C' => CurveTo,
            'c' => RelCurveTo,
            'H' => HLineTo,
            'h' => RelHLineTo,
            'L' => LineTo,
            'l' => RelLineTo,
            'M' => MoveTo,
            'm' => RelMoveTo,
            'Q' => QuadTo,
            'q' => RelQuadTo,
            'S' => SmoothCurveTo,
            's' => RelSmoothCurveTo,
            'T' => SmoothQuadTo,
            't' => RelSmoothQuadTo,
            'V' => VLineTo,
            'v' => RelVLineTo,
            'Z' => ClosePath,
            'z' => RelClosePath,
            _ => return None,
        })
    }

    /// Returns the letter that encodes this command.
    pub fn letter(self) -> char {
        use Command::*;
        match self {
            ArcTo => 'A',
            RelArcTo => 'a',
            CurveTo => 'C',
            RelCurveTo => 'c',
            HLineTo => 'H',
            RelHLineTo => 'h',
            LineTo => 'L',
            RelLineTo => 'l',
            MoveTo => 'M',
            RelMoveTo => 'm',
            QuadTo => 'Q',
            RelQuadTo => 'q',
            SmoothCurveTo => 'S',
            RelSmoothCurveTo => 's',
            SmoothQuadTo => 'T',
            RelSmoothQuadTo => 't',
            VLineTo => 'V',
            RelVLineTo => 'v',
            ClosePath => 'Z',
            RelClosePath => 'z',
        }
    }

    /// Returns the number of arguments consumed by a single instance of
    /// this command.
    pub fn arity(self) -> usize {
        match self.to_absolute() {
            Command::ArcTo => 7,
            Command::CurveTo => 6,
            Command::QuadTo | Command::SmoothCurveTo => 4,
            Command::LineTo | Command::MoveTo | Command::SmoothQuadTo => 2,
            Command::HLineTo | Command::VLineTo => 1,
            _ => 0,
        }
    }

    /// Returns the command implied by additional argument groups following
    /// this one.
    ///
    /// Extra coordinate pairs after a move are implicit line commands. Close
    /// takes no arguments and so has no repeat command.
    pub fn repeat(self) -> Option<Self> {
        match self {
            Command::MoveTo => Some(Command::LineTo),
            Command::RelMoveTo => Some(Command::RelLineTo),
            Command::ClosePath | Command::RelClosePath => None,
            _ => Some(self),
        }
    }

    /// Returns true if the arguments of this command are relative to the
    /// current point.
    pub fn is_relative(self) -> bool {
        self.letter().is_ascii_lowercase()
    }

    /// Returns the absolute form of this command.
    pub fn to_absolute(self) -> Self {
        use Command::*;
        match self {
            RelArcTo => ArcTo,
            RelCurveTo => CurveTo,
            RelHLineTo => HLineTo,
            RelLineTo => LineTo,
            RelMoveTo => MoveTo,
            RelQuadTo => QuadTo,
            RelSmoothCurveTo => SmoothCurveTo,
            RelSmoothQuadTo => SmoothQuadTo,
            RelVLineTo => VLineTo,
            RelClosePath => ClosePath,
            _ => self,
        }
    }
}
