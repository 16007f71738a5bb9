use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Row produced by the LEFT JOIN of Vacantes and CondicionesGenerales.
/// Condition columns are null when the vacancy has no conditions record.
#[derive(Debug, Clone, FromRow)]
pub struct VacancyConditionsRow {
    pub nombre: String,
    pub estado: Option<String>,
    pub sueldo: Option<Decimal>,
    pub bono: Option<Decimal>,
    pub horarios: Option<String>,
    pub beneficios: Option<String>,
    pub requisitos: Option<String>,
    pub documentacion: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConditions {
    pub sueldo: f64,
    pub bono: f64,
    pub horarios: Option<String>,
    pub beneficios: Option<String>,
    pub requisitos: Option<String>,
    pub documentacion: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Faq {
    pub pregunta: String,
    pub respuesta: String,
    pub palabras_clave: String,
}

/// Aggregate consumed by the conversational agent. Field names follow the
/// JSON contract of the downstream consumer, so they stay in Spanish.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VacancyKnowledge {
    pub nombre: String,
    pub estado: Option<String>,
    pub condiciones: GeneralConditions,
    pub faqs: Vec<Faq>,
}

impl VacancyKnowledge {
    /// Builds the aggregate from the join row and the FAQ rows, in the
    /// order the database returned them. Null salary and bonus collapse
    /// to 0 so the output never carries a null amount.
    pub fn from_rows(row: VacancyConditionsRow, faqs: Vec<Faq>) -> Self {
        Self {
            nombre: row.nombre,
            estado: row.estado,
            condiciones: GeneralConditions {
                sueldo: money_to_f64(row.sueldo),
                bono: money_to_f64(row.bono),
                horarios: row.horarios,
                beneficios: row.beneficios,
                requisitos: row.requisitos,
                documentacion: row.documentacion,
            },
            faqs,
        }
    }
}

fn money_to_f64(value: Option<Decimal>) -> f64 {
    value.and_then(|d| d.to_f64()).unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn bare_row() -> VacancyConditionsRow {
        VacancyConditionsRow {
            nombre: "Warehouse Associate".to_string(),
            estado: Some("Open".to_string()),
            sueldo: None,
            bono: None,
            horarios: None,
            beneficios: None,
            requisitos: None,
            documentacion: None,
        }
    }

    #[test]
    fn null_amounts_coerce_to_zero() {
        let knowledge = VacancyKnowledge::from_rows(bare_row(), vec![]);
        assert_eq!(knowledge.condiciones.sueldo, 0.0);
        assert_eq!(knowledge.condiciones.bono, 0.0);
        assert!(knowledge.condiciones.horarios.is_none());
        assert!(knowledge.faqs.is_empty());
    }

    #[test]
    fn stored_amounts_map_to_floats() {
        let mut row = bare_row();
        row.sueldo = Some(Decimal::from_str("1500.50").unwrap());
        let knowledge = VacancyKnowledge::from_rows(row, vec![]);
        assert_eq!(knowledge.condiciones.sueldo, 1500.5);
        assert_eq!(knowledge.condiciones.bono, 0.0);
    }

    #[test]
    fn faqs_keep_database_order() {
        let faqs = vec![
            Faq {
                pregunta: "¿Cuál es el horario?".to_string(),
                respuesta: "Lunes a viernes".to_string(),
                palabras_clave: "horario".to_string(),
            },
            Faq {
                pregunta: "¿Hay bono?".to_string(),
                respuesta: "No".to_string(),
                palabras_clave: "bono, pago".to_string(),
            },
        ];
        let knowledge = VacancyKnowledge::from_rows(bare_row(), faqs);
        assert_eq!(knowledge.faqs.len(), 2);
        assert_eq!(knowledge.faqs[0].palabras_clave, "horario");
        assert_eq!(knowledge.faqs[1].pregunta, "¿Hay bono?");
    }

    #[test]
    fn serializes_with_contract_keys() {
        let mut row = bare_row();
        row.sueldo = Some(Decimal::from_str("1500.50").unwrap());
        let knowledge = VacancyKnowledge::from_rows(row, vec![]);
        let value = serde_json::to_value(&knowledge).unwrap();
        assert_eq!(value["nombre"], "Warehouse Associate");
        assert_eq!(value["estado"], "Open");
        assert_eq!(value["condiciones"]["sueldo"], 1500.5);
        assert_eq!(value["condiciones"]["bono"], 0.0);
        assert!(value["condiciones"]["horarios"].is_null());
        assert!(value["faqs"].as_array().unwrap().is_empty());
    }
}
