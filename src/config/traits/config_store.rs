/// A read-only key-value view onto configuration, queried with dotted keys such
/// as `"reporting.user"`.
///
/// Implementations must return `None` for keys that are absent or that do not
/// resolve to a scalar value.
pub trait ConfigStore: Send + Sync {
    fn get_string(&self, key: &str) -> Option<String>;
}
