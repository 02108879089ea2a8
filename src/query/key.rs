use std::fmt::{Display, Formatter};

use crate::domain::entity::EntityKind;
use crate::domain::listing::ListingQueryState;
use crate::domain::types::EntityId;

/// Which shape of result a key caches.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum QueryScope {
    List,
    Detail,
}

/// Composite cache identifier: entity kind, scope and the canonical
/// request parameters.
///
/// Built only through the constructors below so that logically identical
/// queries always produce equal keys.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct QueryKey {
    entity: EntityKind,
    scope: QueryScope,
    params: Vec<(String, String)>,
}

impl QueryKey {
    pub fn listing(entity: EntityKind, state: &ListingQueryState) -> Self {
        Self {
            entity,
            scope: QueryScope::List,
            params: state.query_pairs(),
        }
    }

    pub fn detail(entity: EntityKind, id: &EntityId) -> Self {
        Self {
            entity,
            scope: QueryScope::Detail,
            params: vec![("id".to_string(), id.to_string())],
        }
    }

    pub fn entity(&self) -> EntityKind {
        self.entity
    }

    pub fn scope(&self) -> QueryScope {
        self.scope
    }
}

impl Display for QueryKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let scope = match self.scope {
            QueryScope::List => "list",
            QueryScope::Detail => "detail",
        };
        write!(f, "{}:{scope}", self.entity)?;
        for (i, (name, value)) in self.params.iter().enumerate() {
            let sep = if i == 0 { '?' } else { '&' };
            write!(f, "{sep}{name}={value}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::listing::{PageLimit, SortOrder};

    #[test]
    fn identical_states_share_a_key() {
        let a = ListingQueryState::new(2, PageLimit::Ten, SortOrder::Asc)
            .with_filter("status", "pending")
            .with_filter("brand", "b1");
        let b = ListingQueryState::new(2, PageLimit::Ten, SortOrder::Asc)
            .with_filter("brand", "b1")
            .with_filter("status", "pending");

        assert_eq!(
            QueryKey::listing(EntityKind::Vehicle, &a),
            QueryKey::listing(EntityKind::Vehicle, &b)
        );
    }

    #[test]
    fn different_queries_never_collide() {
        let state = ListingQueryState::default();
        assert_ne!(
            QueryKey::listing(EntityKind::Brand, &state),
            QueryKey::listing(EntityKind::Series, &state)
        );
        assert_ne!(
            QueryKey::listing(EntityKind::Brand, &state),
            QueryKey::listing(EntityKind::Brand, &state.clone().with_page(2))
        );
        assert_ne!(
            QueryKey::listing(EntityKind::Brand, &state),
            QueryKey::listing(EntityKind::Brand, &state.clone().with_search_term("tata"))
        );

        let id = EntityId::new("1").unwrap();
        assert_ne!(
            QueryKey::detail(EntityKind::Brand, &id),
            QueryKey::detail(EntityKind::Category, &id)
        );
    }

    #[test]
    fn display_is_readable() {
        let key = QueryKey::listing(EntityKind::Blog, &ListingQueryState::default());
        assert_eq!(key.to_string(), "blogs:list?page=1&limit=10&sortOrder=DESC");
    }
}
