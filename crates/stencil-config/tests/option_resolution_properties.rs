//! Property-based tests for option resolution
//!
//! Property: an explicit non-empty flag always wins; otherwise the configured
//! value is returned; with neither, nothing is returned.

use proptest::prelude::*;
use stencil_config::{config_key, ConfigSnapshot, OptionResolver};

fn setting_name_strategy() -> impl Strategy<Value = String> {
    "[a-z][a-z_]{0,20}".prop_map(|s| s.to_string())
}

fn value_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9/._-]{1,30}".prop_map(|s| s.to_string())
}

proptest! {
    #[test]
    fn prop_flag_wins(
        name in setting_name_strategy(),
        flag in value_strategy(),
        configured in prop::option::of(value_strategy()),
    ) {
        let config = match &configured {
            Some(v) => ConfigSnapshot::from_pairs([(config_key(&name), v.clone())]),
            None => ConfigSnapshot::new(),
        };

        let resolved = OptionResolver::new(&config).resolve(Some(flag.as_str()), &name);

        prop_assert_eq!(resolved, Some(flag));
    }

    #[test]
    fn prop_config_fallback(
        name in setting_name_strategy(),
        configured in prop::option::of(value_strategy()),
        empty_flag in any::<bool>(),
    ) {
        let config = match &configured {
            Some(v) => ConfigSnapshot::from_pairs([(config_key(&name), v.clone())]),
            None => ConfigSnapshot::new(),
        };
        let flag = if empty_flag { Some("") } else { None };

        let resolved = OptionResolver::new(&config).resolve(flag, &name);

        prop_assert_eq!(resolved, configured);
    }

    #[test]
    fn prop_resolution_ignores_other_keys(
        name in setting_name_strategy(),
        other in setting_name_strategy(),
        value in value_strategy(),
    ) {
        prop_assume!(name != other);
        let config = ConfigSnapshot::from_pairs([(config_key(&other), value)]);

        prop_assert_eq!(OptionResolver::new(&config).resolve(None, &name), None);
    }
}
