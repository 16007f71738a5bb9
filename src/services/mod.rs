pub mod knowledge_service;
pub mod vacancy_service;
