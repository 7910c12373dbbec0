use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use super::model::{TagCount, normalize_tag};

/// In-process tag usage counter shared across requests.
#[derive(Debug, Clone, Default)]
pub struct TagStore {
    counts: Arc<RwLock<HashMap<String, i64>>>,
}

impl TagStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts one use of every tag in `tags`. Returns how many uses were added.
    pub async fn record<I, T>(&self, tags: I) -> usize
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let mut counts = self.counts.write().await;
        let mut recorded = 0;

        for tag in tags {
            let name = normalize_tag(tag.as_ref());
            if name.is_empty() {
                continue;
            }
            *counts.entry(name).or_insert(0) += 1;
            recorded += 1;
        }

        recorded
    }

    /// All tags, most used first; ties ordered by name.
    pub async fn ranked(&self) -> Vec<TagCount> {
        let counts = self.counts.read().await;

        let mut ranked: Vec<TagCount> = counts
            .iter()
            .map(|(name, uses)| TagCount {
                name: name.clone(),
                uses: *uses,
            })
            .collect();

        ranked.sort_by(|a, b| b.uses.cmp(&a.uses).then_with(|| a.name.cmp(&b.name)));
        ranked
    }

    pub async fn len(&self) -> usize {
        self.counts.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.counts.read().await.is_empty()
    }
}
