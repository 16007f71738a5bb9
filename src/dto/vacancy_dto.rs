use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateVacancyPayload {
    #[validate(length(min = 1))]
    pub nombre: String,
    pub estado: Option<String>,
    pub sueldo: Option<Decimal>,
    pub bono: Option<Decimal>,
    pub horarios: Option<String>,
    pub beneficios: Option<String>,
    pub requisitos: Option<String>,
    pub documentacion: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct FaqEntryPayload {
    #[validate(length(min = 1))]
    pub pregunta: String,
    #[validate(length(min = 1))]
    pub respuesta: String,
    #[serde(default)]
    pub palabras_clave: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ReplaceFaqsPayload {
    #[validate(nested)]
    pub faqs: Vec<FaqEntryPayload>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateVacancyResponse {
    pub vacante_id: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReplaceFaqsResponse {
    pub updated: usize,
}
