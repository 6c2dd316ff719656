// Builds each instructor's course portfolio
//
// A title goes in the independent list when the record lists that instructor
// alone, and in the co-developed list when the record lists others too. The
// decision is per record, so one title can end up in both lists.

use crate::dataset::{Catalog, InstructorPortfolio};
use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;
use tracing::debug;

pub struct Portfolios {
    catalog: Arc<Catalog>,
}

#[derive(Default)]
struct TitleSets<'a> {
    independent: BTreeSet<&'a str>,
    co_developed: BTreeSet<&'a str>,
}

impl Portfolios {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    // Every instructor name found in the catalog, mapped to both title lists
    pub fn by_instructor(&self) -> BTreeMap<String, InstructorPortfolio> {
        let portfolios: BTreeMap<String, InstructorPortfolio> = self
            .group_titles(None)
            .into_iter()
            .map(|(name, sets)| (name.to_string(), sets.into_portfolio()))
            .collect();

        debug!(instructors = portfolios.len(), "built instructor portfolios");
        portfolios
    }

    // Portfolio for one exact instructor name, if they appear anywhere
    pub fn for_instructor(&self, name: &str) -> Option<InstructorPortfolio> {
        self.group_titles(Some(name))
            .remove(name)
            .map(TitleSets::into_portfolio)
    }

    // BTreeSet keeps titles sorted and unique as they go in.
    // With `only` set, every other name is skipped.
    fn group_titles(&self, only: Option<&str>) -> BTreeMap<&str, TitleSets<'_>> {
        let mut grouped: BTreeMap<&str, TitleSets<'_>> = BTreeMap::new();

        for course in self.catalog.courses() {
            let names = course.instructor_names();
            let sole = names.len() == 1;

            for name in names {
                if only.is_some_and(|wanted| wanted != name) {
                    continue;
                }

                let sets = grouped.entry(name).or_default();
                if sole {
                    sets.independent.insert(course.title.as_str());
                } else {
                    sets.co_developed.insert(course.title.as_str());
                }
            }
        }

        grouped
    }
}

impl TitleSets<'_> {
    fn into_portfolio(self) -> InstructorPortfolio {
        InstructorPortfolio {
            independent: self.independent.into_iter().map(String::from).collect(),
            co_developed: self.co_developed.into_iter().map(String::from).collect(),
        }
    }
}
