//! Symptom reference data.

use serde::Serialize;

use super::ConsultationKind;

/// A selectable symptom. Static reference data, never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Symptom {
    pub id: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
}

impl Symptom {
    const fn new(id: &'static str, label: &'static str, icon: &'static str) -> Self {
        Self { id, label, icon }
    }
}

/// Bodily complaints offered behind the gate puzzle.
pub static PHYSICAL_SYMPTOMS: [Symptom; 6] = [
    Symptom::new("headache_hoop", "紧箍咒头痛", "👑"),
    Symptom::new("muscle_pain", "挑担腰酸背痛", "🎒"),
    Symptom::new("eye_strain", "火眼金睛干涩", "👁️"),
    Symptom::new("fatigue", "长途跋涉劳累", "🏃"),
    Symptom::new("stomach_ache", "误食不明野果", "🍎"),
    Symptom::new("cold", "深夜受凉风寒", "❄️"),
];

/// Troubles of the heart, reachable directly from home.
pub static MENTAL_SYMPTOMS: [Symptom; 6] = [
    Symptom::new("demon_anxiety", "见妖怪即焦虑", "👿"),
    Symptom::new("home_sick", "思乡情切", "🏠"),
    Symptom::new("anger_management", "动不动想抡棒子", "🥖"),
    Symptom::new("laziness", "贪吃好色懒惰", "🐷"),
    Symptom::new("compassion_fatigue", "慈悲过度抑郁", "🙏"),
    Symptom::new("ego_clash", "师徒矛盾不和", "🗣️"),
];

/// Returns the symptom table shown for a consultation kind.
pub fn symptoms_for(kind: ConsultationKind) -> &'static [Symptom] {
    match kind {
        ConsultationKind::Physical => &PHYSICAL_SYMPTOMS,
        ConsultationKind::Mental => &MENTAL_SYMPTOMS,
    }
}

/// Looks up a symptom by id across both tables.
pub fn find_symptom(id: &str) -> Option<&'static Symptom> {
    PHYSICAL_SYMPTOMS
        .iter()
        .chain(MENTAL_SYMPTOMS.iter())
        .find(|s| s.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn ids_are_unique_across_tables() {
        let ids: HashSet<_> = PHYSICAL_SYMPTOMS
            .iter()
            .chain(MENTAL_SYMPTOMS.iter())
            .map(|s| s.id)
            .collect();
        assert_eq!(ids.len(), PHYSICAL_SYMPTOMS.len() + MENTAL_SYMPTOMS.len());
    }

    #[test]
    fn symptoms_for_selects_table() {
        assert_eq!(symptoms_for(ConsultationKind::Physical)[0].id, "headache_hoop");
        assert_eq!(symptoms_for(ConsultationKind::Mental)[0].id, "demon_anxiety");
    }

    #[test]
    fn find_symptom_returns_label() {
        assert_eq!(find_symptom("home_sick").map(|s| s.label), Some("思乡情切"));
        assert!(find_symptom("unknown").is_none());
    }
}
