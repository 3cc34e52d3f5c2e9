use leptos::*;

/// Cache tags for server resources. Mutations invalidate tags; list/detail
/// resources include the tag version in their source signal so a bump forces
/// a re-fetch of everything derived from that resource.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResourceTag {
    Auth,
    Employee,
    Department,
    Attendance,
    Leave,
    Payroll,
    Announcement,
    Holiday,
    Dashboard,
}

const TAG_COUNT: usize = 9;

#[derive(Clone, Copy)]
pub struct TagRegistry {
    versions: [RwSignal<u64>; TAG_COUNT],
}

impl TagRegistry {
    pub fn new() -> Self {
        Self {
            versions: std::array::from_fn(|_| create_rw_signal(0)),
        }
    }

    /// Reactive read; call inside a resource source closure to subscribe.
    pub fn version(&self, tag: ResourceTag) -> u64 {
        self.versions[tag as usize].get()
    }

    pub fn invalidate(&self, tags: &[ResourceTag]) {
        for tag in tags {
            self.versions[*tag as usize].update(|v| *v = v.wrapping_add(1));
        }
    }
}

impl Default for TagRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// One registry per app, shared through context like the ApiClient.
pub fn use_tags() -> TagRegistry {
    match use_context::<TagRegistry>() {
        Some(registry) => registry,
        None => {
            let registry = TagRegistry::new();
            provide_context(registry);
            registry
        }
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::with_runtime;

    #[test]
    fn invalidation_bumps_only_named_tags() {
        with_runtime(|| {
            let tags = TagRegistry::new();
            assert_eq!(tags.version(ResourceTag::Employee), 0);

            tags.invalidate(&[ResourceTag::Employee, ResourceTag::Dashboard]);
            assert_eq!(tags.version(ResourceTag::Employee), 1);
            assert_eq!(tags.version(ResourceTag::Dashboard), 1);
            assert_eq!(tags.version(ResourceTag::Payroll), 0);

            tags.invalidate(&[ResourceTag::Employee]);
            assert_eq!(tags.version(ResourceTag::Employee), 2);
        });
    }

    #[test]
    fn use_tags_returns_the_shared_registry() {
        with_runtime(|| {
            let first = use_tags();
            let second = use_tags();
            first.invalidate(&[ResourceTag::Leave]);
            assert_eq!(second.version(ResourceTag::Leave), 1);
        });
    }
}
