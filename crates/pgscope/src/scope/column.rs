use std::collections::BTreeMap;

/// Column argument of batch-capable helpers.
///
/// `Single` names one column; `Batch` carries ordered `(column, value)` pairs
/// that are applied one after another.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnSpec {
    Single(String),
    Batch(Vec<(String, String)>),
}

impl ColumnSpec {
    /// Build a batch from `(column, value)` pairs, keeping their order.
    pub fn batch<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        ColumnSpec::Batch(
            pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl From<&str> for ColumnSpec {
    fn from(column: &str) -> Self {
        ColumnSpec::Single(column.to_string())
    }
}

impl From<String> for ColumnSpec {
    fn from(column: String) -> Self {
        ColumnSpec::Single(column)
    }
}

impl From<&String> for ColumnSpec {
    fn from(column: &String) -> Self {
        ColumnSpec::Single(column.clone())
    }
}

impl<K: Into<String>, V: Into<String>> From<Vec<(K, V)>> for ColumnSpec {
    fn from(pairs: Vec<(K, V)>) -> Self {
        ColumnSpec::batch(pairs)
    }
}

impl<K: Into<String>, V: Into<String>, const N: usize> From<[(K, V); N]> for ColumnSpec {
    fn from(pairs: [(K, V); N]) -> Self {
        ColumnSpec::batch(pairs)
    }
}

/// Pairs are applied in key order.
impl<K: Into<String>, V: Into<String>> From<BTreeMap<K, V>> for ColumnSpec {
    fn from(pairs: BTreeMap<K, V>) -> Self {
        ColumnSpec::batch(pairs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_from_str() {
        assert_eq!(ColumnSpec::from("email"), ColumnSpec::Single("email".into()));
    }

    #[test]
    fn batch_keeps_order() {
        let spec = ColumnSpec::from([("b", "x"), ("a", "")]);
        assert_eq!(
            spec,
            ColumnSpec::Batch(vec![
                ("b".to_string(), "x".to_string()),
                ("a".to_string(), String::new()),
            ])
        );
    }

    #[test]
    fn batch_from_map_is_key_ordered() {
        let mut map = BTreeMap::new();
        map.insert("z", "1");
        map.insert("a", "2");
        let ColumnSpec::Batch(pairs) = ColumnSpec::from(map) else {
            panic!("expected batch");
        };
        assert_eq!(pairs[0].0, "a");
        assert_eq!(pairs[1].0, "z");
    }
}
