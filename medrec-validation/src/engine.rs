//! ValidationEngine: walks payload fields in submission order and
//! stops at the first failure.

use medrec_core::errors::ValidationError;
use medrec_core::models::{ReportField, ReportPayload, ValidatedReport};
use medrec_core::traits::IReportValidator;

use crate::fields::{choice, flags, numeric, presence};

/// Field-order payload validation.
///
/// The check order is fixed: age, gender, hypertension, ever_married,
/// work_type, residence_type, avg_glucose_level, bmi, smoking_status,
/// stroke, heart_disease. A payload with several bad fields reports
/// only the earliest one.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidationEngine;

impl ValidationEngine {
    pub fn new() -> Self {
        Self
    }

    pub fn validate_payload(
        &self,
        payload: &ReportPayload,
    ) -> Result<ValidatedReport, ValidationError> {
        let age = numeric::validate_age(presence(payload.age.as_deref()))?;
        let gender = choice::validate_gender(presence(payload.gender.as_deref()))?;
        let hypertension = flags::validate_flag(
            ReportField::Hypertension,
            presence(payload.hypertension.as_deref()),
        )?;
        let ever_married = choice::validate_marital(presence(payload.ever_married.as_deref()))?;
        let work_type = choice::validate_work_type(presence(payload.work_type.as_deref()))?;
        let residence_type =
            choice::validate_residence(presence(payload.residence_type.as_deref()))?;
        let avg_glucose_level =
            numeric::validate_glucose(presence(payload.avg_glucose_level.as_deref()))?;
        let bmi = numeric::validate_bmi(presence(payload.bmi.as_deref()))?;
        let smoking_status = choice::normalize_smoking(presence(payload.smoking_status.as_deref()));
        let stroke = flags::validate_flag(ReportField::Stroke, presence(payload.stroke.as_deref()))?;
        let heart_disease = flags::validate_flag(
            ReportField::HeartDisease,
            presence(payload.heart_disease.as_deref()),
        )?;

        Ok(ValidatedReport {
            age,
            gender,
            hypertension,
            heart_disease,
            ever_married,
            work_type,
            residence_type,
            avg_glucose_level,
            bmi,
            smoking_status,
            stroke,
        })
    }
}

impl IReportValidator for ValidationEngine {
    fn validate(&self, payload: &ReportPayload) -> Result<ValidatedReport, ValidationError> {
        self.validate_payload(payload)
    }
}
