//! Sensitivity resolution.

use hush_core::config::SensitivityConfig;

/// Resolve the strictness level for one fragment.
///
/// Pure function of the configuration and the fragment's domain
/// classification; recomputed per fragment because domain varies per
/// fragment even within one document. Defaults are backfilled by the
/// config accessors, so the result is always defined.
pub fn resolve_strictness(sensitivity: &SensitivityConfig, is_news: bool) -> u8 {
    if is_news {
        sensitivity.effective_news()
    } else {
        sensitivity.effective_social()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn news_fragments_use_news_strictness() {
        let sensitivity = SensitivityConfig {
            news: Some(1),
            social: Some(5),
        };
        assert_eq!(resolve_strictness(&sensitivity, true), 1);
        assert_eq!(resolve_strictness(&sensitivity, false), 5);
    }

    #[test]
    fn defaults_apply_when_fields_are_absent() {
        let sensitivity = SensitivityConfig::default();
        assert_eq!(resolve_strictness(&sensitivity, true), 3);
        assert_eq!(resolve_strictness(&sensitivity, false), 4);
    }
}
