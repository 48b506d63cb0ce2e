use std::borrow::Borrow;
use std::collections::HashMap;
use std::env;
use std::hash::{BuildHasher, Hash};

/// Read-only view of environment variables.
///
/// Unset and empty variables are indistinguishable to callers: both come
/// back as `None`.
pub trait Environment {
    fn var(&self, key: &str) -> Option<String>;
}

/// The environment of the current process.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl Environment for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        env::var(key).ok().filter(|value| !value.is_empty())
    }
}

impl<K, V, S> Environment for HashMap<K, V, S>
where
    K: Borrow<str> + Hash + Eq,
    V: AsRef<str>,
    S: BuildHasher,
{
    fn var(&self, key: &str) -> Option<String> {
        self.get(key)
            .map(|value| value.as_ref())
            .filter(|value| !value.is_empty())
            .map(str::to_string)
    }
}

impl<E: Environment + ?Sized> Environment for &E {
    fn var(&self, key: &str) -> Option<String> {
        (**self).var(key)
    }
}
