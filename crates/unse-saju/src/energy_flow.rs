//! Day-master rootedness (통근) and exposure (투출).
//!
//! Both checks only ever adjust scores; neither filters a day out.

use serde::{Deserialize, Serialize};

use unse_core::element::Element;
use unse_core::ganzhi::{Pillar, Stem};
use unse_core::models::SajuPillars;

use crate::hidden_stems::hidden_stems;

const ROOTED_BONUS: f64 = 3.0;
const EXPOSED_BONUS: f64 = 2.0;
const UNSUPPORTED_PENALTY: f64 = -3.0;
/// Extra weight when the scored day itself roots the day master.
const DAILY_ROOT_BONUS: f64 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PillarPosition {
    Year,
    Month,
    Day,
    Time,
    /// The pillar of the day being scored, not a natal pillar.
    Daily,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EvidenceKind {
    /// The branch's own element matches the day master.
    BranchElement,
    /// A hidden stem of the branch matches the day master.
    HiddenStem,
    /// A visible stem matches the day master.
    VisibleStem,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlowEvidence {
    pub position: PillarPosition,
    pub kind: EvidenceKind,
    pub pillar: Pillar,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EnergyFlowReport {
    pub tonggeun: bool,
    pub tuechul: bool,
    pub tonggeun_evidence: Vec<FlowEvidence>,
    pub tuechul_evidence: Vec<FlowEvidence>,
}

impl EnergyFlowReport {
    /// Signed score modifier in points.
    pub fn modifier(&self) -> f64 {
        let mut m = 0.0;
        if self.tonggeun {
            m += ROOTED_BONUS;
        }
        if self.tuechul {
            m += EXPOSED_BONUS;
        }
        if !self.tonggeun && !self.tuechul {
            m += UNSUPPORTED_PENALTY;
        }
        if self
            .tonggeun_evidence
            .iter()
            .any(|e| e.position == PillarPosition::Daily)
        {
            m += DAILY_ROOT_BONUS;
        }
        m
    }

    /// Rooted and exposed: the day master stands strong.
    pub fn is_strong(&self) -> bool {
        self.tonggeun && self.tuechul
    }
}

fn positioned(pillars: &SajuPillars) -> impl Iterator<Item = (PillarPosition, Pillar)> + '_ {
    [
        (PillarPosition::Year, Some(pillars.year)),
        (PillarPosition::Month, Some(pillars.month)),
        (PillarPosition::Day, Some(pillars.day)),
        (PillarPosition::Time, pillars.time),
    ]
    .into_iter()
    .filter_map(|(pos, p)| p.map(|p| (pos, p)))
}

fn root_evidence(element: Element, position: PillarPosition, pillar: Pillar) -> Option<FlowEvidence> {
    let kind = if pillar.branch_element() == element {
        EvidenceKind::BranchElement
    } else if hidden_stems(pillar.branch()).iter().any(|s| s.element() == element) {
        EvidenceKind::HiddenStem
    } else {
        return None;
    };
    Some(FlowEvidence { position, kind, pillar })
}

#[derive(Debug, Clone, Copy, Default)]
pub struct EnergyFlowAnalyzer;

impl EnergyFlowAnalyzer {
    /// Is the day master rooted in any natal branch?
    pub fn tonggeun(day_master: Stem, pillars: &SajuPillars) -> (bool, Vec<FlowEvidence>) {
        let element = day_master.element();
        let evidence: Vec<_> = positioned(pillars)
            .filter_map(|(pos, p)| root_evidence(element, pos, p))
            .collect();
        (!evidence.is_empty(), evidence)
    }

    /// Is the day master's element visible among the other pillars' stems?
    pub fn tuechul(day_master: Stem, pillars: &SajuPillars) -> (bool, Vec<FlowEvidence>) {
        let element = day_master.element();
        let evidence: Vec<_> = positioned(pillars)
            .filter(|(pos, p)| *pos != PillarPosition::Day && p.stem_element() == element)
            .map(|(position, pillar)| FlowEvidence {
                position,
                kind: EvidenceKind::VisibleStem,
                pillar,
            })
            .collect();
        (!evidence.is_empty(), evidence)
    }

    /// Natal analysis.
    pub fn analyze(pillars: &SajuPillars) -> EnergyFlowReport {
        let dm = pillars.day.stem();
        let (tonggeun, tonggeun_evidence) = Self::tonggeun(dm, pillars);
        let (tuechul, tuechul_evidence) = Self::tuechul(dm, pillars);
        EnergyFlowReport {
            tonggeun,
            tuechul,
            tonggeun_evidence,
            tuechul_evidence,
        }
    }

    /// Natal analysis with the scored day's pillar counted as a fifth pillar.
    pub fn analyze_day(pillars: &SajuPillars, day: Pillar) -> EnergyFlowReport {
        let mut report = Self::analyze(pillars);
        let element = pillars.day.stem_element();
        if let Some(ev) = root_evidence(element, PillarPosition::Daily, day) {
            report.tonggeun = true;
            report.tonggeun_evidence.push(ev);
        }
        if day.stem_element() == element {
            report.tuechul = true;
            report.tuechul_evidence.push(FlowEvidence {
                position: PillarPosition::Daily,
                kind: EvidenceKind::VisibleStem,
                pillar: day,
            });
        }
        report
    }
}
