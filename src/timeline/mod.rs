//! Fixed sequencing of scenes with transitions between neighbours.
//!
//! A [`TransitionSeries`](series::TransitionSeries) plays sequences back to back; every
//! transition makes its two neighbours overlap for the transition's length, so the series is
//! shorter than the sum of its sequences.

pub(crate) mod series;
pub(crate) mod transition;
