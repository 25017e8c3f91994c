use std::sync::Arc;
use once_cell::sync::Lazy;
use crate::config::constants::{STUB_CATEGORY_COUNT, STUB_CATEGORY_PREFIX};
use crate::structs::app_overview::AppOverview;
use crate::structs::category_facet::CategoryFacet;
use crate::structs::category_groups::CategoryGroups;

/// Names shown while real categories are loading: `Bridge0` .. `Bridge8`.
pub static CATEGORIES_STUB: Lazy<Arc<Vec<String>>> = Lazy::new(|| {
    Arc::new(
        (0..STUB_CATEGORY_COUNT)
            .map(|i| format!("{STUB_CATEGORY_PREFIX}{i}"))
            .collect(),
    )
});

#[derive(Debug, Clone, Copy, Default)]
pub struct FacetInputs<'a> {
    pub apps: Option<&'a [AppOverview]>,
    pub is_apps_placeholder: bool,
    pub remote_categories: Option<&'a [String]>,
    pub is_remote_placeholder: bool,
    pub is_experiment: bool,
}

pub fn placeholder_facets() -> Vec<CategoryFacet> {
    CATEGORIES_STUB
        .iter()
        .map(|name| CategoryFacet::new(name.as_str(), 0))
        .collect()
}

/// Turns apps and the remote category list into facets.
///
/// While either source is placeholder data the nine stub facets come back
/// with zero counts. Otherwise the candidate names are the remote list (only
/// when it is real, non-empty and the experiment is on) or the categories
/// seen in the apps, and candidates without apps are dropped.
pub fn derive_category_facets(inputs: &FacetInputs<'_>) -> Vec<CategoryFacet> {
    if inputs.is_apps_placeholder || inputs.is_remote_placeholder {
        return placeholder_facets();
    }

    let groups = CategoryGroups::from_apps(inputs.apps.unwrap_or_default());

    let facets: Vec<CategoryFacet> = match inputs.remote_categories {
        Some(remote) if !remote.is_empty() && inputs.is_experiment => remote
            .iter()
            .map(|name| CategoryFacet::new(name.as_str(), groups.count(name)))
            .collect(),
        _ => groups
            .keys()
            .map(|name| CategoryFacet::new(name, groups.count(name)))
            .collect(),
    };

    facets.into_iter().filter(|facet| facet.count > 0).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn apps(categories: &[&[&str]]) -> Vec<AppOverview> {
        categories
            .iter()
            .enumerate()
            .map(|(i, c)| AppOverview::new(&i.to_string(), c))
            .collect()
    }

    fn names(values: &[&str]) -> Vec<String> {
        values.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn stub_has_nine_bridges() {
        let facets = placeholder_facets();
        assert_eq!(facets.len(), 9);
        assert_eq!(facets[0], CategoryFacet::new("Bridge0", 0));
        assert_eq!(facets[8], CategoryFacet::new("Bridge8", 0));
    }

    #[test]
    fn placeholder_apps_yield_stub_facets() {
        let apps = apps(&[&["A"]]);
        let facets = derive_category_facets(&FacetInputs {
            apps: Some(&apps),
            is_apps_placeholder: true,
            ..FacetInputs::default()
        });
        assert_eq!(facets, placeholder_facets());
    }

    #[test]
    fn placeholder_remote_yields_stub_facets() {
        let facets = derive_category_facets(&FacetInputs {
            is_remote_placeholder: true,
            is_experiment: true,
            ..FacetInputs::default()
        });
        assert_eq!(facets, placeholder_facets());
    }

    #[test]
    fn groups_apps_in_first_seen_order() {
        let apps = apps(&[&["A"], &["A"], &["B"]]);
        let facets = derive_category_facets(&FacetInputs {
            apps: Some(&apps),
            ..FacetInputs::default()
        });
        assert_eq!(facets, vec![CategoryFacet::new("A", 2), CategoryFacet::new("B", 1)]);
    }

    #[test]
    fn experiment_uses_remote_universe_and_drops_empty() {
        let apps = apps(&[&["A"], &["A"]]);
        let remote = names(&["A", "B", "C"]);
        let facets = derive_category_facets(&FacetInputs {
            apps: Some(&apps),
            remote_categories: Some(&remote),
            is_experiment: true,
            ..FacetInputs::default()
        });
        assert_eq!(facets, vec![CategoryFacet::new("A", 2)]);
    }

    #[test]
    fn experiment_follows_remote_order_not_app_order() {
        let apps = apps(&[&["B"], &["A"], &["Z"]]);
        let remote = names(&["A", "B"]);
        let facets = derive_category_facets(&FacetInputs {
            apps: Some(&apps),
            remote_categories: Some(&remote),
            is_experiment: true,
            ..FacetInputs::default()
        });
        assert_eq!(facets, vec![CategoryFacet::new("A", 1), CategoryFacet::new("B", 1)]);
    }

    #[test]
    fn remote_list_is_ignored_without_experiment() {
        let apps = apps(&[&["B"], &["A"]]);
        let remote = names(&["A", "C"]);
        let facets = derive_category_facets(&FacetInputs {
            apps: Some(&apps),
            remote_categories: Some(&remote),
            ..FacetInputs::default()
        });
        assert_eq!(facets, vec![CategoryFacet::new("B", 1), CategoryFacet::new("A", 1)]);
    }

    #[test]
    fn empty_remote_list_falls_back_to_app_categories() {
        let apps = apps(&[&["A"]]);
        let facets = derive_category_facets(&FacetInputs {
            apps: Some(&apps),
            remote_categories: Some(&[]),
            is_experiment: true,
            ..FacetInputs::default()
        });
        assert_eq!(facets, vec![CategoryFacet::new("A", 1)]);
    }

    #[test]
    fn missing_apps_give_no_facets() {
        assert!(derive_category_facets(&FacetInputs::default()).is_empty());
    }

    proptest! {
        #[test]
        fn resolved_facets_never_have_zero_counts(
            app_categories in prop::collection::vec(prop::collection::vec("[A-E]", 0..4), 0..20),
            remote in prop::collection::vec("[A-H]", 0..8),
            is_experiment in any::<bool>(),
        ) {
            let apps: Vec<AppOverview> = app_categories
                .iter()
                .enumerate()
                .map(|(i, c)| AppOverview {
                    categories: c.clone(),
                    ..AppOverview::new(&i.to_string(), &[])
                })
                .collect();

            let facets = derive_category_facets(&FacetInputs {
                apps: Some(&apps),
                remote_categories: Some(&remote),
                is_experiment,
                ..FacetInputs::default()
            });

            prop_assert!(facets.iter().all(|facet| facet.count > 0));
            prop_assert!(facets.iter().all(|facet| facet.count <= apps.len()));
        }
    }
}
