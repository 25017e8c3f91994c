use std::collections::{HashMap, HashSet};
use crate::structs::app_overview::AppOverview;

/// Apps grouped by category, keeping the order in which categories were
/// first seen.
#[derive(Debug, Clone, Default)]
pub struct CategoryGroups {
    counts: HashMap<String, usize>,
    order: Vec<String>,
}

impl CategoryGroups {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_apps(apps: &[AppOverview]) -> Self {
        let mut groups = Self::new();
        for app in apps {
            groups.add(app);
        }
        groups
    }

    /// Counts the app once under each distinct category it declares.
    pub fn add(&mut self, app: &AppOverview) {
        let mut seen = HashSet::new();
        for category in &app.categories {
            if !seen.insert(category.as_str()) {
                continue;
            }
            match self.counts.get_mut(category) {
                Some(count) => *count += 1,
                None => {
                    self.order.push(category.clone());
                    self.counts.insert(category.clone(), 1);
                }
            }
        }
    }

    pub fn count(&self, category: &str) -> usize {
        self.counts.get(category).copied().unwrap_or(0)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
