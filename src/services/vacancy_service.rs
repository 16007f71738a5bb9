use crate::database::connection::Database;
use crate::dto::vacancy_dto::{CreateVacancyPayload, FaqEntryPayload};
use crate::error::{Error, Result};
use rust_decimal::Decimal;
use sqlx::Connection;

#[derive(Clone)]
pub struct VacancyService {
    db: Database,
}

impl VacancyService {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// Creates the vacancy and its general conditions in one transaction
    /// and returns the new vacancy id. Missing salary or bonus is stored
    /// as 0, matching what the knowledge output reports for them.
    pub async fn create(&self, payload: CreateVacancyPayload) -> Result<i32> {
        let mut conn = self.db.connect().await?;
        let mut tx = conn.begin().await?;

        let vacante_id: i32 = sqlx::query_scalar(
            "INSERT INTO Vacantes (nombre, estado) VALUES ($1, $2) RETURNING id",
        )
        .bind(&payload.nombre)
        .bind(&payload.estado)
        .fetch_one(&mut *tx)
        .await?;

        sqlx::query(
            r#"
            INSERT INTO CondicionesGenerales
                (vacante_id, sueldo, bono, horarios, beneficios, requisitos, documentacion)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(vacante_id)
        .bind(payload.sueldo.unwrap_or(Decimal::ZERO))
        .bind(payload.bono.unwrap_or(Decimal::ZERO))
        .bind(&payload.horarios)
        .bind(&payload.beneficios)
        .bind(&payload.requisitos)
        .bind(&payload.documentacion)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        conn.close().await?;

        Ok(vacante_id)
    }

    /// Replaces the whole FAQ list of a vacancy: delete everything, insert
    /// the submitted entries. Returns how many entries were written.
    pub async fn replace_faqs(
        &self,
        vacante_id: i32,
        faqs: Vec<FaqEntryPayload>,
    ) -> Result<usize> {
        let mut conn = self.db.connect().await?;

        let exists: Option<i32> = sqlx::query_scalar("SELECT id FROM Vacantes WHERE id = $1")
            .bind(vacante_id)
            .fetch_optional(&mut conn)
            .await?;
        if exists.is_none() {
            conn.close().await?;
            return Err(Error::NotFound("Vacancy not found".to_string()));
        }

        let mut tx = conn.begin().await?;

        sqlx::query("DELETE FROM FAQ_Dinamico WHERE vacante_id = $1")
            .bind(vacante_id)
            .execute(&mut *tx)
            .await?;

        for faq in &faqs {
            sqlx::query(
                r#"
                INSERT INTO FAQ_Dinamico (vacante_id, pregunta, respuesta, palabras_clave)
                VALUES ($1, $2, $3, $4)
                "#,
            )
            .bind(vacante_id)
            .bind(&faq.pregunta)
            .bind(&faq.respuesta)
            .bind(&faq.palabras_clave)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        conn.close().await?;

        Ok(faqs.len())
    }
}
