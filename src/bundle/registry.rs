//! Locale projector registry.
//!
//! 1 ロケールにつき key/value の 2 つの射影関数を登録する

use std::fmt;

use indexmap::IndexMap;

use crate::types::Locale;

/// The pair of pure projections turning one record into a `key=value` line.
///
/// Both functions are mandatory at registration time; a locale cannot be
/// registered with only half of the pair.
pub struct ProjectorPair<T> {
    /// Projects a record to its key string.
    key: Box<dyn Fn(&T) -> String>,
    /// Projects a record to its value string.
    value: Box<dyn Fn(&T) -> String>,
}

impl<T> ProjectorPair<T> {
    /// Applies both projections and formats the `key=value` line.
    pub(crate) fn format_line(&self, record: &T) -> String {
        format!("{}={}", (self.key)(record), (self.value)(record))
    }
}

impl<T> fmt::Debug for ProjectorPair<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProjectorPair").finish_non_exhaustive()
    }
}

/// Mapping from locale to its projector pair.
///
/// Iteration follows registration order. Built once via
/// [`ConverterRegistry::builder`]; read-only afterward. At most one pair is
/// held per locale.
pub struct ConverterRegistry<T> {
    /// Registered pairs, in registration order.
    converters: IndexMap<Locale, ProjectorPair<T>>,
}

impl<T> ConverterRegistry<T> {
    /// Creates a builder for assembling a registry.
    #[must_use]
    pub fn builder() -> ConverterRegistryBuilder<T> {
        ConverterRegistryBuilder { converters: IndexMap::new() }
    }

    /// Returns true when no locale has been registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.converters.is_empty()
    }

    /// Number of registered locales.
    #[must_use]
    pub fn len(&self) -> usize {
        self.converters.len()
    }

    /// Iterates the registered pairs in registration order.
    pub(crate) fn iter(&self) -> impl Iterator<Item = (&Locale, &ProjectorPair<T>)> {
        self.converters.iter()
    }
}

impl<T> fmt::Debug for ConverterRegistry<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConverterRegistry")
            .field("locales", &self.converters.keys().collect::<Vec<_>>())
            .finish()
    }
}

/// Assembles a [`ConverterRegistry`].
pub struct ConverterRegistryBuilder<T> {
    /// Pairs registered so far.
    converters: IndexMap<Locale, ProjectorPair<T>>,
}

impl<T> ConverterRegistryBuilder<T> {
    /// Registers the projector pair for a locale.
    ///
    /// Registering the same locale again overwrites the prior pair.
    #[must_use]
    pub fn add_locale(
        mut self,
        locale: Locale,
        key_fn: impl Fn(&T) -> String + 'static,
        val_fn: impl Fn(&T) -> String + 'static,
    ) -> Self {
        self.converters
            .insert(locale, ProjectorPair { key: Box::new(key_fn), value: Box::new(val_fn) });
        self
    }

    /// Registers the pair for the default (root) locale.
    #[must_use]
    pub fn add_default(
        self,
        key_fn: impl Fn(&T) -> String + 'static,
        val_fn: impl Fn(&T) -> String + 'static,
    ) -> Self {
        self.add_locale(Locale::Root, key_fn, val_fn)
    }

    /// Finalizes the registry.
    #[must_use]
    pub fn build(self) -> ConverterRegistry<T> {
        ConverterRegistry { converters: self.converters }
    }
}

impl<T> fmt::Debug for ConverterRegistryBuilder<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConverterRegistryBuilder")
            .field("locales", &self.converters.keys().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rstest::rstest;

    use super::*;

    /// テスト用レコード
    type Record = (String, String);

    fn record(key: &str, value: &str) -> Record {
        (key.to_string(), value.to_string())
    }

    /// build: 登録順でロケールを走査できる
    #[rstest]
    fn test_iteration_follows_registration_order() {
        let registry: ConverterRegistry<Record> = ConverterRegistry::builder()
            .add_locale(Locale::named("ko"), |r: &Record| r.0.clone(), |r| r.1.clone())
            .add_default(|r: &Record| r.0.clone(), |r| r.1.clone())
            .add_locale(Locale::named("ja"), |r: &Record| r.0.clone(), |r| r.1.clone())
            .build();

        let locales: Vec<&Locale> = registry.iter().map(|(locale, _)| locale).collect();
        assert_eq!(
            locales,
            vec![&Locale::named("ko"), &Locale::Root, &Locale::named("ja")]
        );
    }

    /// add_locale: 同じロケールの再登録は上書きになる
    #[rstest]
    fn test_reregistration_overwrites_pair() {
        let registry: ConverterRegistry<Record> = ConverterRegistry::builder()
            .add_default(|r: &Record| r.0.clone(), |_| "first".to_string())
            .add_default(|r: &Record| r.0.clone(), |_| "second".to_string())
            .build();

        assert_eq!(registry.len(), 1);
        let (_, pair) = registry.iter().next().unwrap();
        assert_eq!(pair.format_line(&record("id", "ignored")), "id=second");
    }

    /// add_default: ルートロケールとして登録される
    #[rstest]
    fn test_add_default_registers_root_locale() {
        let registry: ConverterRegistry<Record> =
            ConverterRegistry::builder().add_default(|r: &Record| r.0.clone(), |r| r.1.clone()).build();

        let (locale, _) = registry.iter().next().unwrap();
        assert!(locale.is_root());
    }

    /// build: 何も登録しなければ空
    #[rstest]
    fn test_empty_registry() {
        let registry: ConverterRegistry<Record> = ConverterRegistry::builder().build();

        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
    }

    /// `format_line`: key=value 形式で整形される
    #[rstest]
    fn test_format_line() {
        let registry: ConverterRegistry<Record> =
            ConverterRegistry::builder().add_default(|r: &Record| r.0.clone(), |r| r.1.clone()).build();

        let (_, pair) = registry.iter().next().unwrap();
        assert_eq!(pair.format_line(&record("greeting", "hello")), "greeting=hello");
    }
}
