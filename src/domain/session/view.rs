//! Navigation views and their transition graph.

use serde::Serialize;
use std::fmt;

use crate::domain::clinic::ConsultationKind;
use crate::domain::foundation::StateMachine;

/// Where a report came from; dismissing it with "revise" returns there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportOrigin {
    Consultation(ConsultationKind),
    Checkup,
}

impl ReportOrigin {
    /// The input view that produced the report.
    pub fn view(&self) -> View {
        match self {
            ReportOrigin::Consultation(kind) => View::SymptomPicker(*kind),
            ReportOrigin::Checkup => View::Checkup,
        }
    }
}

/// The screen currently presented to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Default)]
#[serde(tag = "view", content = "detail", rename_all = "snake_case")]
pub enum View {
    #[default]
    Home,
    /// The decoy-gate puzzle guarding the physical picker.
    GateChallenge,
    SymptomPicker(ConsultationKind),
    /// Entry to the checkup service; resolves immediately.
    CheckupGate,
    PaymentPrompt,
    Checkup,
    ResultDisplay(ReportOrigin),
}

impl View {
    /// Returns the consultation kind if this is a symptom picker.
    pub fn picker_kind(&self) -> Option<ConsultationKind> {
        match self {
            View::SymptomPicker(kind) => Some(*kind),
            _ => None,
        }
    }

    /// Every view, for exhaustive checks.
    pub fn all() -> Vec<View> {
        vec![
            View::Home,
            View::GateChallenge,
            View::SymptomPicker(ConsultationKind::Physical),
            View::SymptomPicker(ConsultationKind::Mental),
            View::CheckupGate,
            View::PaymentPrompt,
            View::Checkup,
            View::ResultDisplay(ReportOrigin::Consultation(ConsultationKind::Physical)),
            View::ResultDisplay(ReportOrigin::Consultation(ConsultationKind::Mental)),
            View::ResultDisplay(ReportOrigin::Checkup),
        ]
    }
}

impl StateMachine for View {
    /// Valid transitions:
    /// - any view except Home -> Home (reset)
    /// - Home -> GateChallenge | SymptomPicker(Mental) | CheckupGate
    /// - GateChallenge -> SymptomPicker(Physical) (correct gate or quick pass)
    /// - CheckupGate -> Checkup | PaymentPrompt
    /// - PaymentPrompt -> Checkup
    /// - SymptomPicker(k) -> ResultDisplay(Consultation(k))
    /// - Checkup -> ResultDisplay(Checkup)
    /// - ResultDisplay(origin) -> origin view (revise)
    fn can_transition_to(&self, target: &Self) -> bool {
        use ConsultationKind::*;
        use View::*;
        match (self, target) {
            (Home, Home) => false,
            (_, Home) => true,
            (ResultDisplay(origin), to) => origin.view() == *to,
            (GateChallenge, SymptomPicker(Physical)) => true,
            (Home, GateChallenge | SymptomPicker(Mental) | CheckupGate) => true,
            (CheckupGate, Checkup | PaymentPrompt) => true,
            (PaymentPrompt, Checkup) => true,
            (SymptomPicker(kind), ResultDisplay(ReportOrigin::Consultation(done))) => kind == done,
            (Checkup, ResultDisplay(ReportOrigin::Checkup)) => true,
            _ => false,
        }
    }

    fn valid_transitions(&self) -> Vec<Self> {
        View::all()
            .into_iter()
            .filter(|target| self.can_transition_to(target))
            .collect()
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            View::Home => write!(f, "home"),
            View::GateChallenge => write!(f, "gate challenge"),
            View::SymptomPicker(kind) => write!(f, "{} symptom picker", kind),
            View::CheckupGate => write!(f, "checkup gate"),
            View::PaymentPrompt => write!(f, "payment prompt"),
            View::Checkup => write!(f, "checkup"),
            View::ResultDisplay(ReportOrigin::Consultation(kind)) => {
                write!(f, "{} consultation report", kind)
            }
            View::ResultDisplay(ReportOrigin::Checkup) => write!(f, "checkup report"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ConsultationKind::*;

    #[test]
    fn home_reaches_the_three_services() {
        assert!(View::Home.can_transition_to(&View::GateChallenge));
        assert!(View::Home.can_transition_to(&View::SymptomPicker(Mental)));
        assert!(View::Home.can_transition_to(&View::CheckupGate));
        assert!(!View::Home.can_transition_to(&View::Checkup));
    }

    #[test]
    fn gate_challenge_leads_only_to_physical_picker_or_home() {
        assert_eq!(
            View::GateChallenge.valid_transitions(),
            vec![View::Home, View::SymptomPicker(Physical)]
        );
    }

    #[test]
    fn every_view_except_home_can_reset() {
        for view in View::all() {
            assert_eq!(view.can_transition_to(&View::Home), view != View::Home, "{:?}", view);
        }
    }

    #[test]
    fn only_the_gate_challenge_leads_to_the_physical_picker() {
        let physical = View::SymptomPicker(Physical);
        for view in View::all() {
            let expected = matches!(
                view,
                View::GateChallenge | View::ResultDisplay(ReportOrigin::Consultation(Physical))
            );
            assert_eq!(view.can_transition_to(&physical), expected, "{:?}", view);
        }
    }

    #[test]
    fn pickers_only_report_their_own_kind() {
        let physical_report = View::ResultDisplay(ReportOrigin::Consultation(Physical));
        assert!(View::SymptomPicker(Physical).can_transition_to(&physical_report));
        assert!(!View::SymptomPicker(Mental).can_transition_to(&physical_report));
    }

    #[test]
    fn result_display_returns_to_origin() {
        let report = View::ResultDisplay(ReportOrigin::Checkup);
        assert!(report.can_transition_to(&View::Checkup));
        assert!(!report.can_transition_to(&View::SymptomPicker(Physical)));
    }

    #[test]
    fn no_view_is_terminal() {
        for view in View::all() {
            assert!(!view.is_terminal(), "{:?}", view);
        }
    }

    #[test]
    fn serializes_with_tag_and_detail() {
        let json = serde_json::to_value(View::SymptomPicker(Mental)).unwrap();
        assert_eq!(json, serde_json::json!({"view": "symptom_picker", "detail": "mental"}));
        let json = serde_json::to_value(View::Home).unwrap();
        assert_eq!(json, serde_json::json!({"view": "home"}));
    }
}
