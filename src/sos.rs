//! SOS mode and its allow-list.
//!
//! While SOS is enabled the focus warning is suppressed. The allow-list is
//! informational: it records which apps the user declared they need, it does
//! not grant or block anything.

use std::collections::BTreeSet;

/// SOS flag plus the apps exempted while it is on.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SosAccessList {
    enabled: bool,
    allowed_apps: BTreeSet<String>,
}

impl SosAccessList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Flips SOS mode and returns the new state.
    ///
    /// Always clears the allow-list, so exemptions never outlive a toggle.
    pub fn toggle_mode(&mut self) -> bool {
        self.enabled = !self.enabled;
        self.allowed_apps.clear();
        self.enabled
    }

    /// Adds `name` if absent, removes it if present. Returns whether it is
    /// now allowed.
    pub fn toggle_app(&mut self, name: &str) -> bool {
        if self.allowed_apps.remove(name) {
            false
        } else {
            self.allowed_apps.insert(name.to_string());
            true
        }
    }

    pub fn is_allowed(&self, name: &str) -> bool {
        self.allowed_apps.contains(name)
    }

    /// Allowed app names in sorted order.
    pub fn allowed_apps(&self) -> impl Iterator<Item = &str> {
        self.allowed_apps.iter().map(String::as_str)
    }

    pub fn allowed_count(&self) -> usize {
        self.allowed_apps.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_starts_disabled_and_empty() {
        let sos = SosAccessList::new();
        assert!(!sos.is_enabled());
        assert_eq!(sos.allowed_count(), 0);
    }

    #[test]
    fn test_toggle_app_adds_then_removes() {
        let mut sos = SosAccessList::new();
        sos.toggle_mode();

        assert!(sos.toggle_app("Gmail"));
        assert!(sos.is_allowed("Gmail"));
        assert!(!sos.toggle_app("Gmail"));
        assert!(!sos.is_allowed("Gmail"));
    }

    #[test]
    fn test_toggle_app_works_when_disabled() {
        let mut sos = SosAccessList::new();
        assert!(sos.toggle_app("Chrome"));
        assert!(sos.is_allowed("Chrome"));
    }

    #[test]
    fn test_toggle_mode_clears_allowed_apps() {
        let mut sos = SosAccessList::new();
        assert!(sos.toggle_mode());
        sos.toggle_app("WhatsApp");
        sos.toggle_app("Chrome");

        assert!(!sos.toggle_mode());
        assert_eq!(sos.allowed_count(), 0);

        // And again on the way back in
        sos.toggle_app("Gmail");
        assert!(sos.toggle_mode());
        assert_eq!(sos.allowed_count(), 0);
    }

    #[test]
    fn test_allowed_apps_are_sorted() {
        let mut sos = SosAccessList::new();
        sos.toggle_app("WhatsApp");
        sos.toggle_app("Chrome");
        sos.toggle_app("Gmail");
        let apps: Vec<&str> = sos.allowed_apps().collect();
        assert_eq!(apps, vec!["Chrome", "Gmail", "WhatsApp"]);
    }

    proptest! {
        #[test]
        fn prop_toggle_app_is_self_inverse(
            initial in proptest::collection::vec("[A-Za-z]{1,8}", 0..6),
            name in "[A-Za-z]{1,8}",
        ) {
            let mut sos = SosAccessList::new();
            for app in &initial {
                if !sos.is_allowed(app) {
                    sos.toggle_app(app);
                }
            }
            let before = sos.clone();

            sos.toggle_app(&name);
            sos.toggle_app(&name);
            prop_assert_eq!(sos, before);
        }

        #[test]
        fn prop_toggle_mode_always_empties(
            apps in proptest::collection::vec("[A-Za-z]{1,8}", 0..6),
            enabled in any::<bool>(),
        ) {
            let mut sos = SosAccessList::new();
            if enabled {
                sos.toggle_mode();
            }
            for app in &apps {
                sos.toggle_app(app);
            }

            sos.toggle_mode();
            prop_assert_eq!(sos.allowed_count(), 0);
            prop_assert_eq!(sos.is_enabled(), !enabled);
        }
    }
}
