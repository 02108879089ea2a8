//! Page heading shown in the top bar, derived from the request path.

use crate::domain::entity::EntityKind;

/// Heading for `path`, or `None` when no page lives there.
pub fn heading_for_path(path: &str) -> Option<String> {
    let path = path.split('?').next().unwrap_or_default();
    let segments: Vec<&str> = path
        .trim_matches('/')
        .split('/')
        .filter(|segment| !segment.is_empty())
        .collect();

    let Some((first, rest)) = segments.split_first() else {
        return Some("Dashboard".to_string());
    };
    let kind = EntityKind::from_route(first).ok()?;

    match rest {
        [] => Some(kind.plural().to_string()),
        ["new"] => Some(format!("New {}", kind.singular())),
        ["edit", _] => Some(format!("Edit {}", kind.singular())),
        _ => None,
    }
}
