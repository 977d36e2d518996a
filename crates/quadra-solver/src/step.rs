//! The step/conclusion output model.

use std::{
    cmp::Ordering,
    fmt::{self, Display},
};

use quadra_core::{CellSet, Digit, DigitSet, House, Position};

/// A single proven deduction: one candidate removed from, or one digit
/// assigned to, a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Conclusion {
    /// Remove `digit` from the candidates of `pos`.
    Elimination {
        /// The cell losing the candidate.
        pos: Position,
        /// The candidate being removed.
        digit: Digit,
    },
    /// Assign `digit` to `pos`.
    Assignment {
        /// The cell receiving the digit.
        pos: Position,
        /// The digit being assigned.
        digit: Digit,
    },
}

impl Display for Conclusion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Conclusion::Elimination { pos, digit } => write!(f, "{pos} <> {digit}"),
            Conclusion::Assignment { pos, digit } => write!(f, "{pos} = {digit}"),
        }
    }
}

/// A strong link used as evidence: within `house`, the only two cells
/// that can hold `digit` are `cells.0` and `cells.1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ConjugatePair {
    /// The house the link lives in.
    pub house: House,
    /// The linked digit.
    pub digit: Digit,
    /// The two cells, in ascending position order.
    pub cells: (Position, Position),
}

impl ConjugatePair {
    pub(crate) fn new(house: House, digit: Digit, a: Position, b: Position) -> Self {
        let cells = if a <= b { (a, b) } else { (b, a) };
        Self { house, digit, cells }
    }
}

impl Display for ConjugatePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}=={} on {} in {}",
            self.cells.0, self.cells.1, self.digit, self.house
        )
    }
}

/// The technique variant that proved a step, with the variant-specific
/// evidence carried as fields.
///
/// This is a closed union: the variant set is fixed, so per-variant data
/// lives here rather than in a type hierarchy.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RectangleKind {
    /// Three corners hold exactly the digit pair; the fourth loses both.
    Type1 {
        /// The corner with extra candidates.
        corner: Position,
    },
    /// All corners reduce to the pair plus one shared extra digit.
    Type2 {
        /// The shared extra digit.
        extra: Digit,
        /// The corners carrying the extra digit.
        carriers: CellSet,
    },
    /// The roof extras form a naked subset with house mates.
    Type3 {
        /// The house the subset lives in.
        house: House,
        /// The digits of the subset.
        subset_digits: DigitSet,
        /// The subset cells outside the rectangle.
        subset_cells: CellSet,
    },
    /// The roof corners are conjugate on one pair digit.
    Type4 {
        /// The conjugate link between the roof corners.
        link: ConjugatePair,
    },
    /// Both diagonal corners are conjugate with their line partners on
    /// one pair digit.
    Type6 {
        /// The two line links, row pair first.
        links: [ConjugatePair; 2],
    },
    /// Row and column links through the corner opposite a bivalue corner.
    Hidden {
        /// The row and column links through the target corner.
        links: [ConjugatePair; 2],
        /// The corner losing the other pair digit.
        corner: Position,
    },
    /// Diagonal roofs with distinct extras and one external bivalue cell.
    TwoD {
        /// The external cell holding both extra digits.
        external: Position,
    },
    /// One strong link from a roof to an external cell.
    TwoB1Sl {
        /// The strong link used.
        link: ConjugatePair,
    },
    /// A two-link chain from a roof through two external cells.
    ThreeX2Sl {
        /// The chain links, roof end first.
        links: [ConjugatePair; 2],
    },
    /// A three-link chain connecting both roofs through two external cells.
    FourC3Sl {
        /// The chain links, first roof to second roof.
        links: [ConjugatePair; 3],
    },
    /// Two bivalue pincers covering the roof extras.
    XyWing {
        /// The pincer cells.
        pincers: CellSet,
        /// The shared elimination digit.
        extra: Digit,
    },
    /// Three bivalue pincers covering the roof extras.
    XyzWing {
        /// The pincer cells.
        pincers: CellSet,
        /// The shared elimination digit.
        extra: Digit,
    },
    /// Four bivalue pincers covering the roof extras.
    WxyzWing {
        /// The pincer cells.
        pincers: CellSet,
        /// The shared elimination digit.
        extra: Digit,
    },
}

impl RectangleKind {
    /// Returns the priority rank of the variant; lower ranks are simpler
    /// techniques and sort first.
    #[must_use]
    pub const fn rank(&self) -> u8 {
        match self {
            RectangleKind::Type1 { .. } => 0,
            RectangleKind::Type2 { .. } => 1,
            RectangleKind::Type3 { .. } => 2,
            RectangleKind::Type4 { .. } => 3,
            RectangleKind::Type6 { .. } => 4,
            RectangleKind::Hidden { .. } => 5,
            RectangleKind::TwoD { .. } => 6,
            RectangleKind::TwoB1Sl { .. } => 7,
            RectangleKind::ThreeX2Sl { .. } => 8,
            RectangleKind::FourC3Sl { .. } => 9,
            RectangleKind::XyWing { .. } => 10,
            RectangleKind::XyzWing { .. } => 11,
            RectangleKind::WxyzWing { .. } => 12,
        }
    }

    const fn base_name(&self) -> &'static str {
        match self {
            RectangleKind::Type1 { .. } => "Type 1",
            RectangleKind::Type2 { .. } => "Type 2",
            RectangleKind::Type3 { .. } => "Type 3",
            RectangleKind::Type4 { .. } => "Type 4",
            RectangleKind::Type6 { .. } => "Type 6",
            RectangleKind::Hidden { .. } => "Hidden",
            RectangleKind::TwoB1Sl { .. } => "+2B/1SL",
            RectangleKind::TwoD { .. } => "+2D",
            RectangleKind::ThreeX2Sl { .. } => "+3X/2SL",
            RectangleKind::FourC3Sl { .. } => "+4C/3SL",
            RectangleKind::XyWing { .. } => "XY-Wing",
            RectangleKind::XyzWing { .. } => "XYZ-Wing",
            RectangleKind::WxyzWing { .. } => "WXYZ-Wing",
        }
    }

    /// Returns the conjugate pairs used as evidence, in chain order.
    #[must_use]
    pub fn conjugate_pairs(&self) -> &[ConjugatePair] {
        match self {
            RectangleKind::Type4 { link } | RectangleKind::TwoB1Sl { link } => {
                std::slice::from_ref(link)
            }
            RectangleKind::Type6 { links }
            | RectangleKind::Hidden { links, .. }
            | RectangleKind::ThreeX2Sl { links } => links,
            RectangleKind::FourC3Sl { links } => links,
            _ => &[],
        }
    }
}

/// One proven rectangle deduction: the technique variant, the pattern it
/// was found on, and a non-empty ordered list of conclusions.
///
/// Steps are immutable once produced and ordered for reporting: simpler
/// variants first, ties broken by the rectangle cells, then the digit
/// pair, then the conclusions. Two steps with identical conclusion lists
/// are redundant regardless of evidence.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RectangleStep {
    kind: RectangleKind,
    digits: (Digit, Digit),
    cells: [Position; 4],
    avoidable: bool,
    conclusions: Vec<Conclusion>,
}

impl RectangleStep {
    pub(crate) fn new(
        kind: RectangleKind,
        digits: (Digit, Digit),
        cells: [Position; 4],
        avoidable: bool,
        conclusions: Vec<Conclusion>,
    ) -> Self {
        debug_assert!(!conclusions.is_empty());
        debug_assert!(digits.0 < digits.1);
        Self { kind, digits, cells, avoidable, conclusions }
    }

    /// Returns the technique variant and its evidence.
    #[must_use]
    pub fn kind(&self) -> &RectangleKind {
        &self.kind
    }

    /// Returns the digit pair defining the rectangle, ascending.
    #[must_use]
    pub fn digit_pair(&self) -> (Digit, Digit) {
        self.digits
    }

    /// Returns the four rectangle cells in row-major order.
    #[must_use]
    pub fn cells(&self) -> [Position; 4] {
        self.cells
    }

    /// Returns `true` if the step was found in avoidable-rectangle mode
    /// (some corners already held assigned digits).
    #[must_use]
    pub fn is_avoidable(&self) -> bool {
        self.avoidable
    }

    /// Returns the ordered conclusions of the step.
    #[must_use]
    pub fn conclusions(&self) -> &[Conclusion] {
        &self.conclusions
    }

    /// Returns an iterator over the eliminations of the step.
    pub fn eliminations(&self) -> impl Iterator<Item = (Position, Digit)> + '_ {
        self.conclusions.iter().filter_map(|c| match c {
            Conclusion::Elimination { pos, digit } => Some((*pos, *digit)),
            Conclusion::Assignment { .. } => None,
        })
    }

    /// Returns the human-readable technique name.
    #[must_use]
    pub fn name(&self) -> String {
        let family = if self.avoidable {
            "Avoidable Rectangle"
        } else {
            "Unique Rectangle"
        };
        format!("{family} {}", self.kind.base_name())
    }
}

impl PartialOrd for RectangleStep {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for RectangleStep {
    fn cmp(&self, other: &Self) -> Ordering {
        self.kind
            .rank()
            .cmp(&other.kind.rank())
            .then_with(|| self.cells.cmp(&other.cells))
            .then_with(|| self.digits.cmp(&other.digits))
            .then_with(|| self.conclusions.cmp(&other.conclusions))
            .then_with(|| self.avoidable.cmp(&other.avoidable))
            .then_with(|| self.kind.cmp(&other.kind))
    }
}

impl Display for RectangleStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}/{} in {} {} {} {}):",
            self.name(),
            self.digits.0,
            self.digits.1,
            self.cells[0],
            self.cells[1],
            self.cells[2],
            self.cells[3],
        )?;
        for (i, conclusion) in self.conclusions.iter().enumerate() {
            let sep = if i == 0 { " " } else { ", " };
            write!(f, "{sep}{conclusion}")?;
        }
        Ok(())
    }
}
