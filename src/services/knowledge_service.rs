use crate::database::connection::Database;
use crate::error::Result;
use crate::models::vacancy::{Faq, VacancyConditionsRow, VacancyKnowledge};
use sqlx::Connection;

/// Assembles everything the conversational agent needs to answer questions
/// about one vacancy: the vacancy itself, its general conditions and the
/// FAQ list, in two sequential reads over one dedicated connection.
#[derive(Clone)]
pub struct KnowledgeService {
    db: Database,
}

impl KnowledgeService {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// Fetches the knowledge aggregate, distinguishing "no such vacancy"
    /// (`Ok(None)`) from a database failure (`Err`).
    ///
    /// The two reads are not wrapped in a transaction; a concurrent write
    /// between them can yield a torn view.
    pub async fn fetch(&self, vacante_id: i32) -> Result<Option<VacancyKnowledge>> {
        let mut conn = self.db.connect().await?;

        let row = sqlx::query_as::<_, VacancyConditionsRow>(
            r#"
            SELECT
                v.nombre, v.estado,
                c.sueldo, c.bono, c.horarios, c.beneficios, c.requisitos, c.documentacion
            FROM Vacantes v
            LEFT JOIN CondicionesGenerales c ON v.id = c.vacante_id
            WHERE v.id = $1
            "#,
        )
        .bind(vacante_id)
        .fetch_optional(&mut conn)
        .await?;

        let Some(row) = row else {
            conn.close().await?;
            return Ok(None);
        };

        let faqs = sqlx::query_as::<_, Faq>(
            "SELECT pregunta, respuesta, palabras_clave FROM FAQ_Dinamico WHERE vacante_id = $1",
        )
        .bind(vacante_id)
        .fetch_all(&mut conn)
        .await?;

        conn.close().await?;

        Ok(Some(VacancyKnowledge::from_rows(row, faqs)))
    }

    /// Contract of the standalone consumer: any failure is logged and
    /// collapsed into the same absence as "not found", so the caller sees
    /// `None` whether the vacancy is missing or the database unreachable.
    pub async fn get_vacancy_knowledge(&self, vacante_id: i32) -> Option<VacancyKnowledge> {
        match self.fetch(vacante_id).await {
            Ok(knowledge) => knowledge,
            Err(err) => {
                tracing::error!(error = ?err, vacante_id, "vacancy knowledge lookup failed");
                None
            }
        }
    }
}
