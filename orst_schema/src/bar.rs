use serde::{Deserialize, Serialize};

/// One rendered element of the array being sorted.
///
/// By convention a driver lights up at most one of `is_comparing` and `is_swapping` at a time;
/// the schema itself does not enforce it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArrayBar {
    pub value: f64,
    pub is_comparing: bool,
    pub is_swapping: bool,
    pub is_sorted: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_padding: Option<bool>,
}

impl ArrayBar {
    pub fn new(value: f64) -> Self {
        Self {
            value,
            ..Self::default()
        }
    }

    /// A filler bar, used to line two arrays of different lengths up side by side.
    pub fn padding(value: f64) -> Self {
        Self {
            value,
            is_padding: Some(true),
            ..Self::default()
        }
    }

    pub fn is_padding(&self) -> bool {
        self.is_padding.unwrap_or(false)
    }

    /// Whether the bar is currently being compared or swapped.
    pub fn is_active(&self) -> bool {
        self.is_comparing || self.is_swapping
    }

    pub fn clear_highlight(&mut self) {
        self.is_comparing = false;
        self.is_swapping = false;
    }
}

impl From<f64> for ArrayBar {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_bar_is_idle() {
        let bar = ArrayBar::new(7.0);
        assert_eq!(bar.value, 7.0);
        assert!(!bar.is_active());
        assert!(!bar.is_sorted);
        assert!(!bar.is_padding());
        assert_eq!(bar.is_padding, None);
    }

    #[test]
    fn highlight_clears() {
        let mut bar = ArrayBar {
            is_comparing: true,
            is_swapping: true,
            is_sorted: true,
            ..ArrayBar::new(3.0)
        };
        assert!(bar.is_active());
        bar.clear_highlight();
        assert!(!bar.is_active());
        assert!(bar.is_sorted);
    }

    #[test]
    fn padding_flag_round_trips_only_when_set() {
        let plain = serde_json::to_string(&ArrayBar::new(1.0)).unwrap();
        assert_eq!(
            plain,
            r#"{"value":1.0,"isComparing":false,"isSwapping":false,"isSorted":false}"#
        );

        let padded = serde_json::to_value(ArrayBar::padding(1.0)).unwrap();
        assert_eq!(padded["isPadding"], serde_json::Value::Bool(true));
    }

    #[test]
    fn fractional_values_from_the_browser() {
        let bar: ArrayBar = serde_json::from_str(
            r#"{"value":42.5,"isComparing":true,"isSwapping":false,"isSorted":false}"#,
        )
        .unwrap();
        assert_eq!(bar.value, 42.5);
        assert!(bar.is_active());

        let whole: ArrayBar = serde_json::from_str(
            r#"{"value":3,"isComparing":false,"isSwapping":false,"isSorted":true}"#,
        )
        .unwrap();
        assert_eq!(whole.value, 3.0);
    }
}
