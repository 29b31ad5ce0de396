/// Feature flags controlling which optional bundles run.
///
/// An explicit value with no hidden global state; chosen by the caller per
/// invocation and threaded through every generator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FeatureFlags {
    /// JWT security bundle: user entity, token service, auth endpoints.
    pub security: bool,
    /// JPA auditing bundle: base audited entity and auditing config.
    pub auditing: bool,
    /// Pagination bundle: page wrapper, sort enum, paginated operations.
    pub pagination: bool,
    /// API documentation bundle: OpenAPI config, guides, properties merge.
    pub docs: bool,
}

impl FeatureFlags {
    /// All bundles enabled.
    pub fn all() -> Self {
        Self {
            security: true,
            auditing: true,
            pagination: true,
            docs: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_disables_every_bundle() {
        let flags = FeatureFlags::default();
        assert!(!flags.security && !flags.auditing && !flags.pagination && !flags.docs);
    }

    #[test]
    fn test_all_enables_every_bundle() {
        let flags = FeatureFlags::all();
        assert!(flags.security && flags.auditing && flags.pagination && flags.docs);
    }
}
