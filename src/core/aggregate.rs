use serde::{Serialize, Serializer, ser::SerializeMap};

use crate::models::Project;

/// An ordered `label -> value` mapping. Buckets keep first-occurrence order.
#[derive(Debug, Clone, PartialEq)]
pub struct Buckets<V> {
    entries: Vec<(String, V)>,
}

impl<V> Default for Buckets<V> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<V: Serialize> Serialize for Buckets<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (label, value) in &self.entries {
            map.serialize_entry(label, value)?;
        }
        map.end()
    }
}

impl<V: Copy + Default + std::ops::AddAssign> Buckets<V> {
    fn add(&mut self, label: &str, amount: V) {
        match self.entries.iter_mut().find(|(key, _)| key == label) {
            Some((_, value)) => *value += amount,
            None => {
                let mut value = V::default();
                value += amount;
                self.entries.push((label.to_string(), value));
            }
        }
    }

    pub fn get(&self, label: &str) -> Option<V> {
        self.entries
            .iter()
            .find(|(key, _)| key == label)
            .map(|(_, value)| *value)
    }
}

impl<V> Buckets<V> {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }

    pub fn labels(&self) -> Vec<String> {
        self.entries.iter().map(|(key, _)| key.clone()).collect()
    }
}

impl<V: Copy> Buckets<V> {
    pub fn values(&self) -> Vec<V> {
        self.entries.iter().map(|(_, value)| *value).collect()
    }
}

/// Whole-dataset summaries backing the three charts.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Aggregates {
    /// Total investment per region, in billions USD.
    pub by_region: Buckets<f64>,
    pub by_type: Buckets<u64>,
    pub by_status: Buckets<u64>,
}

pub fn aggregate(projects: &[Project]) -> Aggregates {
    let mut aggregates = Aggregates::default();
    for project in projects {
        aggregates
            .by_region
            .add(&project.region, project.cost() / 1000.0);
        aggregates.by_type.add(&project.project_type, 1);
        aggregates.by_status.add(&project.status, 1);
    }
    aggregates
}
