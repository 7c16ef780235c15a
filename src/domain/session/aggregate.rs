//! Session aggregate entity.
//!
//! A session lives for one run of the application. It owns the navigation
//! state, the symptom selection, the merit balance and the latest report.
//!
//! # Paid requests
//!
//! Consultations and checkups are two-phase: `begin_*` checks every
//! precondition and marks the session pending, the caller talks to the
//! analysis gateway, then either [`Session::complete_pending`] charges the
//! fee and stores the report or [`Session::abandon_pending`] releases the
//! session untouched.

use crate::domain::clinic::{AnalysisResult, ConsultationKind, GateIndex, HealthMetrics};
use crate::domain::foundation::{Merit, SessionId, StateMachine, ValidationError};

use super::tariff::{CHECKUP_FEE, CHECKUP_UNLOCK_FEE, CONSULTATION_FEE, QUICK_PASS_FEE};
use super::{ReportOrigin, SessionError, View};

/// A paid request awaiting the analysis gateway.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PendingRequest {
    Consultation {
        kind: ConsultationKind,
        symptoms: Vec<String>,
    },
    Checkup {
        metrics: HealthMetrics,
    },
}

impl PendingRequest {
    /// Merit charged once the gateway delivers a report.
    pub fn fee(&self) -> Merit {
        match self {
            PendingRequest::Consultation { .. } => CONSULTATION_FEE,
            PendingRequest::Checkup { .. } => CHECKUP_FEE,
        }
    }

    /// The view the report will be attributed to.
    pub fn origin(&self) -> ReportOrigin {
        match self {
            PendingRequest::Consultation { kind, .. } => ReportOrigin::Consultation(*kind),
            PendingRequest::Checkup { .. } => ReportOrigin::Checkup,
        }
    }
}

/// Outcome of [`Session::unlock_checkup`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnlockOutcome {
    /// The fee was charged and the checkup view opened.
    Unlocked,
    /// The service was already unlocked; nothing changed.
    AlreadyUnlocked,
}

/// Session aggregate - the clinic's single source of truth.
///
/// # Invariants
///
/// - the merit balance never goes below zero
/// - `correct_gate` never changes after construction
/// - `selected` holds no duplicates
/// - while `pending` is set, every mutation is rejected
#[derive(Debug, Clone)]
pub struct Session {
    id: SessionId,
    view: View,
    selected: Vec<String>,
    merit: Merit,
    checkup_unlocked: bool,
    correct_gate: GateIndex,
    metrics: HealthMetrics,
    result: Option<AnalysisResult>,
    pending: Option<PendingRequest>,
}

impl Session {
    /// Create a session with a known correct gate.
    pub fn new(correct_gate: GateIndex, merit: Merit) -> Self {
        Self {
            id: SessionId::new(),
            view: View::Home,
            selected: Vec::new(),
            merit,
            checkup_unlocked: false,
            correct_gate,
            metrics: HealthMetrics::default(),
            result: None,
            pending: None,
        }
    }

    /// Create a session whose correct gate is drawn at random.
    pub fn start(merit: Merit) -> Self {
        Self::new(GateIndex::random(), merit)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> &SessionId {
        &self.id
    }

    pub fn view(&self) -> View {
        self.view
    }

    /// Selected symptom labels, in the order they were picked.
    pub fn selected_symptoms(&self) -> &[String] {
        &self.selected
    }

    pub fn is_selected(&self, label: &str) -> bool {
        self.selected.iter().any(|s| s == label)
    }

    pub fn merit(&self) -> Merit {
        self.merit
    }

    pub fn checkup_unlocked(&self) -> bool {
        self.checkup_unlocked
    }

    pub fn correct_gate(&self) -> GateIndex {
        self.correct_gate
    }

    pub fn metrics(&self) -> &HealthMetrics {
        &self.metrics
    }

    pub fn result(&self) -> Option<&AnalysisResult> {
        self.result.as_ref()
    }

    pub fn pending(&self) -> Option<&PendingRequest> {
        self.pending.as_ref()
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────────────────────

    /// Home -> GateChallenge.
    pub fn open_gate_challenge(&mut self) -> Result<(), SessionError> {
        self.navigate("open the gate challenge", View::GateChallenge)
    }

    /// Home -> SymptomPicker(Mental). Free of charge.
    pub fn open_mental_picker(&mut self) -> Result<(), SessionError> {
        self.navigate(
            "open the mental picker",
            View::SymptomPicker(ConsultationKind::Mental),
        )
    }

    /// Home -> CheckupGate, resolved at once to Checkup or PaymentPrompt.
    pub fn open_checkup(&mut self) -> Result<View, SessionError> {
        self.navigate("open the checkup", View::CheckupGate)?;
        let target = if self.checkup_unlocked {
            View::Checkup
        } else {
            View::PaymentPrompt
        };
        self.navigate("open the checkup", target)?;
        Ok(self.view)
    }

    /// PaymentPrompt -> Home without paying.
    pub fn dismiss_payment_prompt(&mut self) -> Result<(), SessionError> {
        self.ensure_idle()?;
        if self.view != View::PaymentPrompt {
            return Err(SessionError::not_available("dismiss the payment prompt", self.view));
        }
        self.view = View::Home;
        Ok(())
    }

    /// Clears the selection and any report, and returns Home.
    ///
    /// Merit and the checkup unlock are kept.
    pub fn reset(&mut self) -> Result<(), SessionError> {
        self.ensure_idle()?;
        self.selected.clear();
        self.result = None;
        self.view = View::Home;
        Ok(())
    }

    /// Dismisses the report and goes back to the view that produced it,
    /// with an empty selection.
    pub fn revise_report(&mut self) -> Result<View, SessionError> {
        self.ensure_idle()?;
        let View::ResultDisplay(origin) = self.view else {
            return Err(SessionError::not_available("revise the report", self.view));
        };
        self.view = origin.view();
        self.selected.clear();
        self.result = None;
        Ok(self.view)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Gate puzzle and quick pass
    // ─────────────────────────────────────────────────────────────────────────

    /// Guess a gate. Only the correct one opens the physical picker.
    ///
    /// # Errors
    ///
    /// - `OperationPending` while a request is in flight
    /// - `NotAvailableHere` outside the gate challenge
    /// - `WrongGate` for any decoy; the view is unchanged
    pub fn select_gate(&mut self, index: usize) -> Result<(), SessionError> {
        self.ensure_idle()?;
        if self.view != View::GateChallenge {
            return Err(SessionError::not_available("select a gate", self.view));
        }
        if index != self.correct_gate.value() {
            return Err(SessionError::wrong_gate(index));
        }
        self.view = View::SymptomPicker(ConsultationKind::Physical);
        Ok(())
    }

    /// Pay to skip the gate puzzle. Returns the remaining merit.
    ///
    /// # Errors
    ///
    /// - `NotAvailableHere` outside the gate challenge
    /// - `InsufficientMerit` below the quick pass fee
    pub fn quick_pass(&mut self) -> Result<Merit, SessionError> {
        self.ensure_idle()?;
        if self.view != View::GateChallenge {
            return Err(SessionError::not_available("use a quick pass", self.view));
        }
        self.merit = self.debit(QUICK_PASS_FEE)?;
        self.view = View::SymptomPicker(ConsultationKind::Physical);
        Ok(self.merit)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Symptom selection
    // ─────────────────────────────────────────────────────────────────────────

    /// Adds the label if absent, removes it if present. Labels are stored
    /// exactly as given.
    ///
    /// Returns true if the label is selected afterwards.
    ///
    /// # Errors
    ///
    /// - `NotAvailableHere` outside a symptom picker
    /// - `InvalidInput` for a blank label
    pub fn toggle_symptom(&mut self, label: &str) -> Result<bool, SessionError> {
        self.ensure_idle()?;
        if self.view.picker_kind().is_none() {
            return Err(SessionError::not_available("select a symptom", self.view));
        }
        if label.trim().is_empty() {
            return Err(ValidationError::empty_field("symptom").into());
        }
        if let Some(pos) = self.selected.iter().position(|s| s == label) {
            self.selected.remove(pos);
            Ok(false)
        } else {
            self.selected.push(label.to_string());
            Ok(true)
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Checkup service
    // ─────────────────────────────────────────────────────────────────────────

    /// Pay once to unlock the checkup and open it.
    ///
    /// Calling again after a successful unlock changes nothing and charges
    /// nothing.
    ///
    /// # Errors
    ///
    /// - `NotAvailableHere` unless on the checkup gate or payment prompt
    /// - `InsufficientMerit` below the unlock fee
    pub fn unlock_checkup(&mut self) -> Result<UnlockOutcome, SessionError> {
        self.ensure_idle()?;
        if self.checkup_unlocked {
            return Ok(UnlockOutcome::AlreadyUnlocked);
        }
        if !self.view.can_transition_to(&View::Checkup) {
            return Err(SessionError::not_available("unlock the checkup", self.view));
        }
        self.merit = self.debit(CHECKUP_UNLOCK_FEE)?;
        self.checkup_unlocked = true;
        self.view = View::Checkup;
        Ok(UnlockOutcome::Unlocked)
    }

    /// Replace the stored metrics while on the checkup form.
    pub fn update_metrics(&mut self, metrics: HealthMetrics) -> Result<(), SessionError> {
        self.ensure_idle()?;
        if self.view != View::Checkup {
            return Err(SessionError::not_available("edit health metrics", self.view));
        }
        metrics.validate()?;
        self.metrics = metrics;
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Paid requests
    // ─────────────────────────────────────────────────────────────────────────

    /// Start a symptom consultation from the current picker.
    ///
    /// # Errors
    ///
    /// - `OperationPending` while a request is in flight
    /// - `NotAvailableHere` outside a symptom picker
    /// - `EmptySelection` with nothing selected
    /// - `InsufficientMerit` below the consultation fee
    pub fn begin_consultation(&mut self) -> Result<PendingRequest, SessionError> {
        self.ensure_idle()?;
        let Some(kind) = self.view.picker_kind() else {
            return Err(SessionError::not_available("request an analysis", self.view));
        };
        if self.selected.is_empty() {
            return Err(SessionError::EmptySelection);
        }
        self.ensure_covers(CONSULTATION_FEE)?;

        let request = PendingRequest::Consultation {
            kind,
            symptoms: self.selected.clone(),
        };
        self.pending = Some(request.clone());
        Ok(request)
    }

    /// Start a metrics checkup.
    ///
    /// # Errors
    ///
    /// - `OperationPending` while a request is in flight
    /// - `CheckupLocked` before the unlock fee is paid
    /// - `NotAvailableHere` outside the checkup view
    /// - `InvalidInput` for implausible metrics
    /// - `InsufficientMerit` below the checkup fee
    pub fn begin_checkup(&mut self, metrics: HealthMetrics) -> Result<PendingRequest, SessionError> {
        self.ensure_idle()?;
        if !self.checkup_unlocked {
            return Err(SessionError::CheckupLocked);
        }
        if self.view != View::Checkup {
            return Err(SessionError::not_available("submit a checkup", self.view));
        }
        metrics.validate()?;
        self.ensure_covers(CHECKUP_FEE)?;

        self.metrics = metrics;
        let request = PendingRequest::Checkup { metrics };
        self.pending = Some(request.clone());
        Ok(request)
    }

    /// Charge for the pending request and show its report.
    ///
    /// Returns the remaining merit.
    pub fn complete_pending(&mut self, result: AnalysisResult) -> Result<Merit, SessionError> {
        let Some((origin, fee)) = self.pending.as_ref().map(|r| (r.origin(), r.fee())) else {
            return Err(SessionError::not_available("deliver a report", self.view));
        };
        let target = View::ResultDisplay(origin);
        if !self.view.can_transition_to(&target) {
            return Err(SessionError::not_available("deliver a report", self.view));
        }
        self.merit = self.debit(fee)?;
        self.pending = None;
        self.result = Some(result);
        self.view = target;
        Ok(self.merit)
    }

    /// Release the pending flag after a gateway failure. Nothing is charged.
    pub fn abandon_pending(&mut self) -> Option<PendingRequest> {
        self.pending.take()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Private helpers
    // ─────────────────────────────────────────────────────────────────────────

    fn navigate(&mut self, operation: &'static str, target: View) -> Result<(), SessionError> {
        self.ensure_idle()?;
        self.view = self
            .view
            .transition_to(target)
            .map_err(|_| SessionError::not_available(operation, self.view))?;
        Ok(())
    }

    fn ensure_idle(&self) -> Result<(), SessionError> {
        if self.pending.is_some() {
            Err(SessionError::OperationPending)
        } else {
            Ok(())
        }
    }

    fn ensure_covers(&self, cost: Merit) -> Result<(), SessionError> {
        if self.merit.covers(cost) {
            Ok(())
        } else {
            Err(SessionError::insufficient_merit(cost, self.merit))
        }
    }

    fn debit(&self, cost: Merit) -> Result<Merit, SessionError> {
        self.merit
            .checked_debit(cost)
            .ok_or_else(|| SessionError::insufficient_merit(cost, self.merit))
    }
}
