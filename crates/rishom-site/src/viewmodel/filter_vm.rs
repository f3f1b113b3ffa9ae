//! Filter ViewModel
//!
//! Holds the selected entity filter. Grids never write it; they re-derive
//! their visible items from `active_filter` on every render.

use rishom_core::domain::{Entity, FilterOption};
use rishom_shared::constants::FILTER_ALL_ID;
use tracing::warn;

/// Grid items that belong to one or more entities (by slug).
pub trait Tagged {
    fn entity_slugs(&self) -> &[String];
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterViewModel {
    active_filter: String,
}

impl Default for FilterViewModel {
    fn default() -> Self {
        Self::new()
    }
}

impl FilterViewModel {
    pub fn new() -> Self {
        Self {
            active_filter: FILTER_ALL_ID.to_string(),
        }
    }

    pub fn active_filter(&self) -> &str {
        &self.active_filter
    }

    pub fn is_unfiltered(&self) -> bool {
        self.active_filter == FILTER_ALL_ID
    }

    /// The only transition. The id is taken as given.
    pub fn select(&mut self, option_id: &str) {
        self.active_filter = option_id.to_string();
    }

    /// "all" first, then one option per filterable entity in fetch order.
    /// An entity whose slug collides with the sentinel gets no option.
    pub fn options(&self, entities: &[Entity]) -> Vec<FilterOption> {
        let per_entity = entities.iter().filter(|e| !e.is_group()).filter_map(|e| {
            let option = FilterOption::for_entity(e);
            if option.is_all() {
                warn!(code = %e.code, "Entity slug collides with the unfiltered option, skipping it");
                return None;
            }
            Some(option)
        });

        std::iter::once(FilterOption::all()).chain(per_entity).collect()
    }

    pub fn is_visible<T: Tagged + ?Sized>(&self, item: &T) -> bool {
        self.is_unfiltered() || item.entity_slugs().iter().any(|s| *s == self.active_filter)
    }

    pub fn visible<'a, T: Tagged>(&self, items: &'a [T]) -> Vec<&'a T> {
        items.iter().filter(|item| self.is_visible(*item)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Project {
        slugs: Vec<String>,
    }

    impl Tagged for Project {
        fn entity_slugs(&self) -> &[String] {
            &self.slugs
        }
    }

    fn project(slugs: &[&str]) -> Project {
        Project { slugs: slugs.iter().map(|s| s.to_string()).collect() }
    }

    fn entity(code: &str, short_name: &str) -> Entity {
        Entity::new(code.to_string(), short_name.to_string()).unwrap()
    }

    #[test]
    fn test_starts_unfiltered() {
        let vm = FilterViewModel::new();
        assert_eq!(vm.active_filter(), "all");
        assert!(vm.is_unfiltered());
    }

    #[test]
    fn test_example_option_list() {
        let vm = FilterViewModel::new();
        let options = vm.options(&[entity("RBF", "BTP"), entity("GROUPE", "Groupe")]);

        let ids: Vec<&str> = options.iter().map(|o| o.id.as_str()).collect();
        let labels: Vec<&str> = options.iter().map(|o| o.label.as_str()).collect();
        assert_eq!(ids, vec!["all", "rbf"]);
        assert_eq!(labels, vec!["Tous les projets", "BTP"]);
    }

    #[test]
    fn test_one_option_per_entity() {
        let vm = FilterViewModel::new();
        let entities = vec![entity("RBF", "BTP"), entity("REV'I", "Immobilier"), entity("RIC", "Ingénierie"), entity("RBA", "Agro")];
        let options = vm.options(&entities);

        assert_eq!(options.len(), entities.len() + 1);
        for e in &entities {
            let slug = e.code.to_lowercase();
            assert_eq!(options.iter().filter(|o| o.id == slug).count(), 1);
        }
    }

    #[test]
    fn test_entity_named_all_gets_no_option() {
        let vm = FilterViewModel::new();
        let options = vm.options(&[entity("ALL", "Alliance"), entity("RBF", "BTP")]);

        let ids: Vec<&str> = options.iter().map(|o| o.id.as_str()).collect();
        assert_eq!(ids, vec!["all", "rbf"]);
        assert_eq!(options[0].label, "Tous les projets");
    }

    #[test]
    fn test_option_color_defaults() {
        let vm = FilterViewModel::new();
        let options = vm.options(&[entity("RBF", "BTP").with_color("#E30613"), entity("RIC", "Ingénierie")]);

        assert_eq!(options[1].color, "#E30613");
        assert_eq!(options[2].color, rishom_shared::constants::DEFAULT_BRAND_COLOR);
    }

    #[test]
    fn test_empty_directory_gives_sentinel_only() {
        let vm = FilterViewModel::new();
        let options = vm.options(&[]);

        assert_eq!(options.len(), 1);
        assert!(options[0].is_all());
    }

    #[test]
    fn test_select_changes_only_active_filter() {
        let mut vm = FilterViewModel::new();
        let mut expected = vm.clone();

        vm.select("rbf");
        expected.active_filter = "rbf".to_string();

        assert_eq!(vm, expected);
        assert_eq!(vm.active_filter(), "rbf");
    }

    #[test]
    fn test_visibility_by_membership() {
        let mut vm = FilterViewModel::new();
        let items = vec![project(&["rbf"]), project(&["ric", "rbf"]), project(&["rba"])];

        assert_eq!(vm.visible(&items).len(), 3);

        vm.select("rbf");
        assert_eq!(vm.visible(&items).len(), 2);

        vm.select("unknown");
        assert!(vm.visible(&items).is_empty());

        vm.select("all");
        assert_eq!(vm.visible(&items).len(), 3);
    }
}
