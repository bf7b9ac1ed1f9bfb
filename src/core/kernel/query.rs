use url::form_urlencoded;

/// Ordered bag of wire parameter names and optional values.
///
/// `set` has dictionary semantics: a name appears at most once, and setting
/// it again replaces the value while keeping the original position. Entries
/// whose value is absent, empty, or all-whitespace are dropped at encode
/// time rather than sent as empty query parameters.
#[derive(Debug, Clone, Default)]
pub struct QueryParams {
    entries: Vec<(&'static str, Option<String>)>,
}

impl QueryParams {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a parameter. `None` values are carried but never encoded.
    #[must_use]
    pub fn set(mut self, key: &'static str, value: Option<impl Into<String>>) -> Self {
        let value = value.map(Into::into);
        if let Some(entry) = self.entries.iter_mut().find(|(name, _)| *name == key) {
            entry.1 = value;
        } else {
            self.entries.push((key, value));
        }
        self
    }

    /// Iterate the entries that survive encoding, in insertion order.
    pub fn present(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        self.entries.iter().filter_map(|(key, value)| {
            value
                .as_deref()
                .filter(|v| !v.trim().is_empty())
                .map(|v| (*key, v))
        })
    }

    /// True when no entry would survive encoding.
    pub fn is_empty(&self) -> bool {
        self.present().next().is_none()
    }
}

/// Build the absolute request URL from a base URL, an endpoint path, and the
/// surviving entries of a parameter bag.
///
/// The base URL must end with `/` and the endpoint must not start with one;
/// both are fixed caller-side contracts, not runtime checks. Keys and values
/// are percent-encoded per `application/x-www-form-urlencoded` rules, so
/// comma-separated list values travel as single values with encoded commas.
pub fn encode_url(base_url: &str, endpoint: &str, params: &QueryParams) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (key, value) in params.present() {
        serializer.append_pair(key, value);
    }
    let query = serializer.finish();

    if query.is_empty() {
        format!("{}{}", base_url, endpoint)
    } else {
        format!("{}{}?{}", base_url, endpoint, query)
    }
}
