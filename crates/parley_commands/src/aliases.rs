//! Full alias composition.

use parley_core::CommandServiceConfig;

/// Joins every parent alias with every own alias, parent-major.
///
/// An empty alias on either side yields the other side unchanged. Case is kept.
pub(crate) fn compose(parents: Option<&[String]>, own: &[String], separator: char) -> Vec<String> {
    match parents {
        None => own.to_vec(),
        Some(parents) => parents
            .iter()
            .flat_map(|first| own.iter().map(move |second| (first, second)))
            .map(|(first, second)| {
                if first.is_empty() {
                    second.clone()
                } else if second.is_empty() {
                    first.clone()
                } else {
                    format!("{}{}{}", first, separator, second)
                }
            })
            .collect(),
    }
}

/// Lower-cases command aliases unless the service is case-sensitive.
pub(crate) fn fold_case(aliases: Vec<String>, config: &CommandServiceConfig) -> Vec<String> {
    if config.case_sensitive {
        aliases
    } else {
        aliases.into_iter().map(|alias| alias.to_lowercase()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn top_level_keeps_own_aliases() {
        assert_eq!(
            compose(None, &strings(&["Admin", "mod"]), ' '),
            strings(&["Admin", "mod"])
        );
    }

    #[test]
    fn nested_aliases_are_parent_major() {
        let parents = strings(&["admin", "a"]);
        assert_eq!(
            compose(Some(&parents), &strings(&["ban", "b"]), ' '),
            strings(&["admin ban", "admin b", "a ban", "a b"])
        );
    }

    #[test]
    fn empty_side_passes_through() {
        let parents = strings(&["", "admin"]);
        assert_eq!(
            compose(Some(&parents), &strings(&["ban", ""]), ' '),
            strings(&["ban", "", "admin ban", "admin"])
        );
    }

    #[test]
    fn composition_keeps_case() {
        let parents = strings(&["Admin"]);
        assert_eq!(
            compose(Some(&parents), &strings(&["Ban"]), '.'),
            strings(&["Admin.Ban"])
        );
    }

    #[test]
    fn fold_case_follows_service_setting() {
        let insensitive = CommandServiceConfig::default();
        assert_eq!(
            fold_case(strings(&["Admin Ban"]), &insensitive),
            strings(&["admin ban"])
        );

        let sensitive = CommandServiceConfig {
            case_sensitive: true,
            ..CommandServiceConfig::default()
        };
        assert_eq!(
            fold_case(strings(&["Admin Ban"]), &sensitive),
            strings(&["Admin Ban"])
        );
    }
}
