//! Standalone knowledge consumer: fetches everything the virtual agent
//! needs for one vacancy and prints it as a JSON document.

use vacancy_backend::config::{get_config, init_config};
use vacancy_backend::database::connection::Database;
use vacancy_backend::services::knowledge_service::KnowledgeService;
use vacancy_backend::utils::json::to_pretty_json;

const EXAMPLE_VACANTE_ID: i32 = 1;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    init_config()?;

    let db = Database::new(get_config());
    let service = KnowledgeService::new(db);

    match service.get_vacancy_knowledge(EXAMPLE_VACANTE_ID).await {
        Some(knowledge) => {
            println!(
                "--- Conocimiento para la Vacante: {} ---",
                knowledge.nombre
            );
            println!("{}", to_pretty_json(&knowledge)?);
        }
        None => println!("Vacante no encontrada o error en la consulta."),
    }

    Ok(())
}
