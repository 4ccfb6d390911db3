use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use tracing::{debug, warn};
use uuid::Uuid;

use crate::database::PortalStore;
use crate::models::question::Question;
use crate::models::vacancy::Vacancy;

#[derive(Debug, Default)]
struct QuestionCache {
    entries: HashMap<Uuid, Arc<Vec<Question>>>,
    /// Bumped by every invalidation. A load that started under an older
    /// generation is served but not cached.
    generation: u64,
}

/// Loads what an application form needs: the ordered questions of a vacancy
/// and the vacancies an applicant may pick from.
///
/// Every read degrades to an empty result when the store fails; the failure
/// is logged and never reaches the applicant. Question sets are cached per
/// vacancy until [`FormSchemaService::invalidate`] is called for it. An empty
/// set is cached only when the vacancy exists.
#[derive(Clone)]
pub struct FormSchemaService {
    store: Arc<dyn PortalStore>,
    cache: Arc<RwLock<QuestionCache>>,
}

impl FormSchemaService {
    pub fn new(store: Arc<dyn PortalStore>) -> Self {
        Self {
            store,
            cache: Arc::new(RwLock::new(QuestionCache::default())),
        }
    }

    pub async fn resolve(&self, vacancy_id: Option<Uuid>) -> Vec<Question> {
        let Some(vacancy_id) = vacancy_id else {
            return Vec::new();
        };

        let lookup = self
            .cache
            .read()
            .ok()
            .map(|cache| (cache.entries.get(&vacancy_id).cloned(), cache.generation));
        let generation = match lookup {
            Some((Some(cached), _)) => {
                debug!(%vacancy_id, "question set served from cache");
                return cached.as_ref().clone();
            }
            Some((None, generation)) => Some(generation),
            None => None,
        };

        let Some(mut questions) = self.load(vacancy_id).await else {
            return Vec::new();
        };
        sort_for_display(&mut questions);

        if questions.is_empty() && self.vacancy(vacancy_id).await.is_none() {
            return questions;
        }

        if let Ok(mut cache) = self.cache.write() {
            if generation == Some(cache.generation) {
                cache.entries.insert(vacancy_id, Arc::new(questions.clone()));
            } else {
                debug!(%vacancy_id, "question set changed while loading; not cached");
            }
        }
        questions
    }

    /// Drops the cached question set of one vacancy.
    pub fn invalidate(&self, vacancy_id: Uuid) {
        if let Ok(mut cache) = self.cache.write() {
            cache.generation = cache.generation.wrapping_add(1);
            if cache.entries.remove(&vacancy_id).is_some() {
                debug!(%vacancy_id, "question cache invalidated");
            }
        }
    }

    async fn load(&self, vacancy_id: Uuid) -> Option<Vec<Question>> {
        match self.store.list_questions(vacancy_id).await {
            Ok(questions) => Some(questions),
            Err(err) => {
                warn!(%vacancy_id, error = %err, "could not load questions; rendering fixed fields only");
                None
            }
        }
    }

    pub async fn active_vacancies(&self) -> Vec<Vacancy> {
        match self.store.list_vacancies(true).await {
            Ok(vacancies) => vacancies,
            Err(err) => {
                warn!(error = %err, "could not load active vacancies");
                Vec::new()
            }
        }
    }

    pub async fn vacancy(&self, id: Uuid) -> Option<Vacancy> {
        match self.store.get_vacancy(id).await {
            Ok(vacancy) => vacancy,
            Err(err) => {
                warn!(vacancy_id = %id, error = %err, "could not load vacancy");
                None
            }
        }
    }

    #[cfg(test)]
    fn cached_len(&self) -> usize {
        self.cache.read().map(|cache| cache.entries.len()).unwrap_or(0)
    }
}

/// Stable ascending sort on `order`; equal orders keep store order.
pub fn sort_for_display(questions: &mut [Question]) {
    questions.sort_by_key(|q| q.order);
}
