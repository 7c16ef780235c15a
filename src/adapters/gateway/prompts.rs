//! Prompt construction.
//!
//! Output depends only on the inputs: same symptoms in the same order, or
//! the same metrics, always yield the same text.

use crate::domain::clinic::{ConsultationKind, HealthMetrics};
use crate::ports::ResponseSchema;

/// Persona shared by both consultations and checkups.
pub const SYSTEM_PROMPT: &str = "你是一位专门为《西游记》师徒四人设计的“仙界健康管家”，\
用专业但带有一点神话色彩的口吻回答，并且只返回JSON。";

fn kind_label(kind: ConsultationKind) -> &'static str {
    match kind {
        ConsultationKind::Physical => "身体",
        ConsultationKind::Mental => "心理",
    }
}

/// User message for a symptom consultation.
pub fn consultation_prompt(kind: ConsultationKind, symptoms: &[String]) -> String {
    format!(
        "用户当前选择了以下{}不适症状：{}。\n\
         请根据《西游记》的背景分析：\n\
         1. 病情总结（condition）\n\
         2. 可能病因（cause，需结合取经背景，如：紧箍咒、妖怪偷袭、师傅念咒、长途跋涉等）\n\
         3. 处理建议（treatment，如：仙丹、经文、特定休息方式等）\n\
         请以JSON格式返回。",
        kind_label(kind),
        symptoms.join(", ")
    )
}

/// User message for a metrics checkup.
pub fn checkup_prompt(metrics: &HealthMetrics) -> String {
    format!(
        "请针对这位西行取经者的健康监测指标进行分析：\n\
         心率：{} bpm\n\
         血压：{}/{} mmHg\n\
         体重：{} kg\n\
         灵力(Qi)水平：{}%\n\
         请给出：\n\
         1. 总体健康报告（condition）\n\
         2. 潜在隐患（cause）\n\
         3. 仙界调理建议（treatment）\n\
         4. 中药用药建议（tcmAdvice）\n\
         请以JSON格式返回。",
        metrics.heart_rate,
        metrics.systolic_pressure,
        metrics.diastolic_pressure,
        metrics.weight,
        metrics.energy_level
    )
}

/// Reply shape for consultations.
pub fn consultation_schema() -> ResponseSchema {
    ResponseSchema::object("consultation_report")
        .required("condition", "病情总结")
        .required("cause", "可能病因")
        .required("treatment", "处理建议")
}

/// Reply shape for checkups; herbal advice is mandatory here.
pub fn checkup_schema() -> ResponseSchema {
    ResponseSchema::object("checkup_report")
        .required("condition", "总体健康报告")
        .required("cause", "潜在隐患")
        .required("treatment", "仙界调理建议")
        .required("tcmAdvice", "中药用药建议")
}
