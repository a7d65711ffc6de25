//! The experiment axes.
//!
//! Every tick is described by three independent choices: how a missile reaches its
//! target's position ([`LayoutStrategy`]), how the update walks the population
//! ([`LoopStrategy`]) and when a missile commits its new state ([`WriteOrdering`]).
//! All of them are plain runtime values resolved before a run starts.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use thiserror::Error;

/// How a missile obtains the position of the plane it is homing on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LayoutStrategy {
    /// The missile keeps a copy of the target position taken at creation.
    EmbeddedValue,
    /// The missile keeps a reference to the target body and reads it every tick.
    EmbeddedPointer,
    /// Missiles keep no target; a parallel array of references is walked alongside.
    DecoupledPointerArray,
}

impl LayoutStrategy {
    pub const ALL: [LayoutStrategy; 3] = [
        LayoutStrategy::EmbeddedValue,
        LayoutStrategy::EmbeddedPointer,
        LayoutStrategy::DecoupledPointerArray,
    ];

    pub fn name(self) -> &'static str {
        match self {
            LayoutStrategy::EmbeddedValue => "embedded-value",
            LayoutStrategy::EmbeddedPointer => "embedded-pointer",
            LayoutStrategy::DecoupledPointerArray => "decoupled-pointer-array",
        }
    }
}

/// How one tick walks the missile population.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LoopStrategy {
    /// One pass computing velocity then position per missile.
    Fused,
    /// A velocity pass over every missile followed by a position pass.
    Split,
}

impl LoopStrategy {
    pub const ALL: [LoopStrategy; 2] = [LoopStrategy::Fused, LoopStrategy::Split];

    pub fn name(self) -> &'static str {
        match self {
            LoopStrategy::Fused => "fused",
            LoopStrategy::Split => "split",
        }
    }
}

/// When a missile writes its freshly computed velocity back to its body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WriteOrdering {
    /// Store the velocity first, then advance the position from the stored value.
    Immediate,
    /// Compute into locals and commit position and velocity together.
    WriteAtEnd,
}

impl WriteOrdering {
    pub const ALL: [WriteOrdering; 2] = [WriteOrdering::Immediate, WriteOrdering::WriteAtEnd];

    pub fn name(self) -> &'static str {
        match self {
            WriteOrdering::Immediate => "immediate",
            WriteOrdering::WriteAtEnd => "write-at-end",
        }
    }
}

/// Loop structure and write ordering for a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TickPlan {
    pub loop_strategy: LoopStrategy,
    pub write_ordering: WriteOrdering,
}

impl TickPlan {
    pub fn new(loop_strategy: LoopStrategy, write_ordering: WriteOrdering) -> Self {
        Self {
            loop_strategy,
            write_ordering,
        }
    }

    /// Every loop/ordering combination, fused first.
    pub fn all() -> impl Iterator<Item = TickPlan> {
        LoopStrategy::ALL.into_iter().flat_map(|loop_strategy| {
            WriteOrdering::ALL
                .into_iter()
                .map(move |write_ordering| TickPlan::new(loop_strategy, write_ordering))
        })
    }
}

impl fmt::Display for TickPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.loop_strategy, self.write_ordering)
    }
}

/// Returned when a strategy name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} `{value}` (expected one of: {expected})")]
pub struct ParseStrategyError {
    kind: &'static str,
    value: String,
    expected: String,
}

macro_rules! impl_strategy_text {
    ($ty:ident, $kind:literal) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.name())
            }
        }

        impl FromStr for $ty {
            type Err = ParseStrategyError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                $ty::ALL
                    .into_iter()
                    .find(|candidate| candidate.name().eq_ignore_ascii_case(s.trim()))
                    .ok_or_else(|| ParseStrategyError {
                        kind: $kind,
                        value: s.to_string(),
                        expected: $ty::ALL.map($ty::name).join(", "),
                    })
            }
        }
    };
}

impl_strategy_text!(LayoutStrategy, "layout strategy");
impl_strategy_text!(LoopStrategy, "loop strategy");
impl_strategy_text!(WriteOrdering, "write ordering");
