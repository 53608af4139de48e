//! Keyed head state and the diff between two of them.

/// Which attribute addresses a meta tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetaAttr {
    /// `<meta name="...">`
    Name,
    /// `<meta property="...">` (Open Graph)
    Property,
}

impl MetaAttr {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Property => "property",
        }
    }
}

/// Stable address of one head element.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum HeadKey {
    Meta { attr: MetaAttr, key: String },
    Canonical,
    StructuredData,
}

impl HeadKey {
    #[must_use]
    pub fn name(key: &str) -> Self {
        Self::Meta {
            attr: MetaAttr::Name,
            key: key.to_string(),
        }
    }

    #[must_use]
    pub fn property(key: &str) -> Self {
        Self::Meta {
            attr: MetaAttr::Property,
            key: key.to_string(),
        }
    }
}

/// One step of a reconciliation plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeadMutation {
    SetTitle(String),
    SetLang(String),
    Append { key: HeadKey, value: String },
    Update { key: HeadKey, value: String },
    Remove(HeadKey),
}

/// The document head as an ordered map from element key to value.
///
/// Keys are unique; insertion order is the order elements appear in the head.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeadState {
    title: String,
    lang: String,
    entries: Vec<(HeadKey, String)>,
}

impl HeadState {
    /// Start a desired state with the given title and language.
    #[must_use]
    pub fn new(title: impl Into<String>, lang: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            lang: lang.into(),
            entries: Vec::new(),
        }
    }

    /// Set a value, replacing an existing entry with the same key.
    pub fn set(&mut self, key: HeadKey, value: impl Into<String>) {
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = value,
            None => self.entries.push((key, value)),
        }
    }

    #[must_use]
    pub fn get(&self, key: &HeadKey) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn lang(&self) -> &str {
        &self.lang
    }

    pub fn entries(&self) -> impl Iterator<Item = (&HeadKey, &str)> {
        self.entries.iter().map(|(k, v)| (k, v.as_str()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Execute a plan produced by [`plan`].
    pub fn apply(&mut self, mutations: Vec<HeadMutation>) {
        for mutation in mutations {
            match mutation {
                HeadMutation::SetTitle(title) => self.title = title,
                HeadMutation::SetLang(lang) => self.lang = lang,
                HeadMutation::Append { key, value } | HeadMutation::Update { key, value } => {
                    self.set(key, value);
                }
                HeadMutation::Remove(key) => self.entries.retain(|(k, _)| *k != key),
            }
        }
    }
}

/// Mutations that turn `applied` into `desired`.
///
/// Title and language are always rewritten. Entries are appended when new,
/// updated when their value changed and removed when `desired` no longer
/// has them. Unchanged entries produce no mutation.
#[must_use]
pub fn plan(applied: &HeadState, desired: &HeadState) -> Vec<HeadMutation> {
    let mut mutations = vec![
        HeadMutation::SetTitle(desired.title.clone()),
        HeadMutation::SetLang(desired.lang.clone()),
    ];

    for (key, value) in desired.entries() {
        match applied.get(key) {
            Some(current) if current == value => {}
            Some(_) => mutations.push(HeadMutation::Update {
                key: key.clone(),
                value: value.to_string(),
            }),
            None => mutations.push(HeadMutation::Append {
                key: key.clone(),
                value: value.to_string(),
            }),
        }
    }

    for (key, _) in applied.entries() {
        if desired.get(key).is_none() {
            mutations.push(HeadMutation::Remove(key.clone()));
        }
    }

    mutations
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn state(entries: &[(&str, &str)]) -> HeadState {
        let mut state = HeadState::new("Title", "en");
        for (key, value) in entries {
            state.set(HeadKey::name(key), *value);
        }
        state
    }

    #[test]
    fn test_set_replaces_existing_key() {
        let mut s = state(&[("description", "a")]);
        s.set(HeadKey::name("description"), "b");
        assert_eq!(s.len(), 1);
        assert_eq!(s.get(&HeadKey::name("description")), Some("b"));
    }

    #[test]
    fn test_name_and_property_are_distinct_keys() {
        let mut s = HeadState::default();
        s.set(HeadKey::name("title"), "a");
        s.set(HeadKey::property("title"), "b");
        assert_eq!(s.len(), 2);
    }

    #[test]
    fn test_plan_identical_state_only_sets_title_and_lang() {
        let s = state(&[("description", "a"), ("robots", "index")]);
        let mutations = plan(&s, &s);
        assert_eq!(
            mutations,
            vec![
                HeadMutation::SetTitle("Title".to_string()),
                HeadMutation::SetLang("en".to_string()),
            ]
        );
    }

    #[test]
    fn test_plan_append_update_remove() {
        let applied = state(&[("description", "old"), ("keywords", "cars")]);
        let desired = state(&[("description", "new"), ("author", "AutoRent")]);
        let mutations = plan(&applied, &desired);

        assert!(mutations.contains(&HeadMutation::Update {
            key: HeadKey::name("description"),
            value: "new".to_string(),
        }));
        assert!(mutations.contains(&HeadMutation::Append {
            key: HeadKey::name("author"),
            value: "AutoRent".to_string(),
        }));
        assert!(mutations.contains(&HeadMutation::Remove(HeadKey::name("keywords"))));
    }

    #[test]
    fn test_apply_plan_reaches_desired() {
        let mut applied = state(&[("description", "old"), ("keywords", "cars")]);
        let mut desired = state(&[("author", "AutoRent"), ("description", "new")]);
        desired.set(HeadKey::StructuredData, "{}");

        applied.apply(plan(&applied, &desired));

        assert_eq!(applied.len(), desired.len());
        for (key, value) in desired.entries() {
            assert_eq!(applied.get(key), Some(value));
        }
    }

    #[test]
    fn test_apply_twice_is_idempotent() {
        let desired = state(&[("description", "x")]);
        let mut applied = HeadState::default();
        applied.apply(plan(&applied, &desired));
        let once = applied.clone();
        applied.apply(plan(&applied, &desired));
        assert_eq!(applied, once);
    }
}
