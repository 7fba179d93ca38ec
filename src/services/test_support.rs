//! In-memory gateway used by the service unit tests

use async_trait::async_trait;
use serde_json::Value;
use std::sync::Mutex;

use crate::domain::{DomainError, EntityGateway, EntityId, FilterOp, ListQuery, Page};

/// Stores rows of every entity in one list and records each call made.
pub struct RecordingGateway {
    id_field: &'static str,
    rows: Mutex<Vec<(String, Value)>>,
    calls: Mutex<Vec<String>>,
    queries: Mutex<Vec<ListQuery>>,
}

impl RecordingGateway {
    pub fn new(id_field: &'static str) -> Self {
        Self {
            id_field,
            rows: Mutex::new(Vec::new()),
            calls: Mutex::new(Vec::new()),
            queries: Mutex::new(Vec::new()),
        }
    }

    pub fn with_rows(self, entity_name: &str, rows: Vec<Value>) -> Self {
        self.rows
            .lock()
            .unwrap()
            .extend(rows.into_iter().map(|row| (entity_name.to_string(), row)));
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn queries(&self) -> Vec<ListQuery> {
        self.queries.lock().unwrap().clone()
    }

    pub fn rows(&self, entity_name: &str) -> Vec<Value> {
        self.rows
            .lock()
            .unwrap()
            .iter()
            .filter(|(name, _)| name == entity_name)
            .map(|(_, row)| row.clone())
            .collect()
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }
}

fn field_text(row: &Value, field: &str) -> String {
    match row.get(field) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Null) | None => String::new(),
        Some(other) => other.to_string(),
    }
}

fn id_json(id: &EntityId) -> Value {
    match id {
        EntityId::Int(n) => Value::from(*n),
        EntityId::Text(s) => Value::from(s.clone()),
    }
}

#[async_trait]
impl EntityGateway for RecordingGateway {
    async fn list(&self, query: &ListQuery) -> Result<Page<Value>, DomainError> {
        self.record(format!("list {}", query.entity_name));
        self.queries.lock().unwrap().push(query.clone());

        let matching: Vec<Value> = self
            .rows(&query.entity_name)
            .into_iter()
            .filter(|row| {
                query.filters.iter().all(|f| {
                    let actual = field_text(row, &f.field);
                    match f.op {
                        FilterOp::Eq => actual == f.value,
                        FilterOp::Contains => actual.contains(&f.value),
                    }
                })
            })
            .collect();

        let total_items = matching.len() as u64;
        let start = ((query.page - 1) * query.page_size) as usize;
        let items = matching
            .into_iter()
            .skip(start)
            .take(query.page_size as usize)
            .collect();

        Ok(Page { items, total_items })
    }

    async fn create(&self, entity_name: &str, body: &Value) -> Result<Option<Value>, DomainError> {
        self.record(format!("create {}", entity_name));

        let next_id = self.rows(entity_name).len() as i64 + 1;
        let mut row = body.clone();
        if let Value::Object(map) = &mut row {
            map.insert(self.id_field.to_string(), Value::from(next_id));
        }
        self.rows
            .lock()
            .unwrap()
            .push((entity_name.to_string(), row.clone()));
        Ok(Some(row))
    }

    async fn update(
        &self,
        entity_name: &str,
        id: &EntityId,
        body: &Value,
    ) -> Result<(), DomainError> {
        self.record(format!("update {} {}", entity_name, id));

        let key = id_json(id);
        let mut rows = self.rows.lock().unwrap();
        let slot = rows
            .iter_mut()
            .find(|(name, row)| name == entity_name && row.get(self.id_field) == Some(&key))
            .ok_or(DomainError::Upstream {
                status: 404,
                body: String::new(),
            })?;
        slot.1 = body.clone();
        Ok(())
    }

    async fn delete(&self, entity_name: &str, id: &EntityId) -> Result<(), DomainError> {
        self.record(format!("delete {} {}", entity_name, id));

        let key = id_json(id);
        self.rows
            .lock()
            .unwrap()
            .retain(|(name, row)| !(name == entity_name && row.get(self.id_field) == Some(&key)));
        Ok(())
    }
}
