use super::models::{MatchSummary, Player, PlayerStatsRecord, SummaryStats, Team};
use super::resources;
use super::source::DataSource;
use crate::cache::SessionCache;
use crate::error::AppError;
use log::debug;
use serde::de::DeserializeOwned;
use serde::Deserialize;

/// Typed access to the tournament datasets of one session.
pub struct Dataset {
    source: Box<dyn DataSource>,
    cache: SessionCache,
}

impl Dataset {
    pub fn new(source: Box<dyn DataSource>) -> Self {
        Dataset {
            source,
            cache: SessionCache::new(),
        }
    }

    pub fn describe(&self) -> String {
        self.source.describe()
    }

    pub fn cache(&self) -> &SessionCache {
        &self.cache
    }

    /// Make sure `resource` is in the session cache without decoding it.
    pub fn preload(&mut self, resource: &str) -> Result<(), AppError> {
        self.raw(resource).map(|_| ())
    }

    fn raw(&mut self, resource: &str) -> Result<&serde_json::Value, AppError> {
        let source = &self.source;
        self.cache.get_or_try_insert_with(resource, || {
            let body = source.fetch(resource)?;
            debug!("loaded {} ({} bytes)", resource, body.len());
            serde_json::from_str(&body).map_err(|e| AppError::json(resource, e))
        })
    }

    pub fn load<T: DeserializeOwned>(&mut self, resource: &str) -> Result<T, AppError> {
        let value = self.raw(resource)?;
        T::deserialize(value).map_err(|e| AppError::json(resource, e))
    }

    pub fn matches(&mut self) -> Result<Vec<MatchSummary>, AppError> {
        self.load(resources::MATCH_SUMMARIES)
    }

    pub fn players(&mut self) -> Result<Vec<Player>, AppError> {
        self.load(resources::PLAYERS)
    }

    pub fn teams(&mut self) -> Result<Vec<Team>, AppError> {
        self.load(resources::TEAMS)
    }

    pub fn player_stats(&mut self) -> Result<Vec<PlayerStatsRecord>, AppError> {
        self.load(resources::PLAYER_STATS)
    }

    pub fn summary(&mut self) -> Result<SummaryStats, AppError> {
        self.load(resources::SUMMARY_STATS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::rc::Rc;

    struct CountingSource {
        bodies: HashMap<&'static str, &'static str>,
        calls: Rc<RefCell<Vec<String>>>,
    }

    impl DataSource for CountingSource {
        fn describe(&self) -> String {
            "memory".to_string()
        }

        fn fetch(&self, resource: &str) -> Result<String, AppError> {
            self.calls.borrow_mut().push(resource.to_string());
            self.bodies
                .get(resource)
                .map(|body| body.to_string())
                .ok_or_else(|| AppError::HttpError(format!("no such resource {}", resource)))
        }
    }

    fn dataset(bodies: HashMap<&'static str, &'static str>) -> (Dataset, Rc<RefCell<Vec<String>>>) {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let source = CountingSource {
            bodies,
            calls: Rc::clone(&calls),
        };
        (Dataset::new(Box::new(source)), calls)
    }

    #[test]
    fn repeated_loads_hit_the_source_once() {
        let (mut data, calls) = dataset(HashMap::from([(
            resources::TEAMS,
            r#"[{"uuid": "t1", "name": "Falcons"}]"#,
        )]));

        assert_eq!(data.teams().unwrap()[0].name, "Falcons");
        assert_eq!(data.teams().unwrap().len(), 1);
        assert_eq!(calls.borrow().as_slice(), ["teams.json"]);
    }

    #[test]
    fn failed_fetch_propagates_and_is_retried_next_time() {
        let (mut data, calls) = dataset(HashMap::new());

        assert!(data.players().is_err());
        assert!(data.players().is_err());
        assert_eq!(calls.borrow().len(), 2);
        assert!(data.cache().is_empty());
    }

    #[test]
    fn malformed_json_names_the_resource() {
        let (mut data, _) = dataset(HashMap::from([(resources::SUMMARY_STATS, "{oops")]));

        let err = data.summary().unwrap_err();
        assert!(err.to_string().contains("summary_stats.json"));
    }
}
