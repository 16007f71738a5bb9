pub mod config;
pub mod database;
pub mod dto;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;
pub mod utils;

use crate::config::Config;
use crate::database::connection::Database;
use crate::services::{
    knowledge_service::KnowledgeService, vacancy_service::VacancyService,
};

#[derive(Clone)]
pub struct AppState {
    pub vacancy_service: VacancyService,
    pub knowledge_service: KnowledgeService,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        let db = Database::new(config);
        let vacancy_service = VacancyService::new(db.clone());
        let knowledge_service = KnowledgeService::new(db);

        Self {
            vacancy_service,
            knowledge_service,
        }
    }
}
