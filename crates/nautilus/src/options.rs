use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Spacing knobs for [`Arranger`](crate::Arranger). All values are pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ArrangerOptions {
    /// Horizontal gap between a parent's outgoing connector and its children.
    pub parent_child_space: f64,
    /// Vertical gap between adjacent visible siblings.
    pub sibling_space: f64,
    /// Extra height added to a node that has children and at least one sibling.
    pub cousin_space: f64,
    /// Width reserved for the fold/unfold affordance.
    pub expander_size: f64,
}

impl Default for ArrangerOptions {
    fn default() -> Self {
        Self {
            parent_child_space: 30.0,
            sibling_space: 20.0,
            cousin_space: 12.0,
            expander_size: 13.0,
        }
    }
}

impl ArrangerOptions {
    /// Reads options from a JSON config.
    ///
    /// Keys are looked up under a `mindmap` object when present, otherwise at the top level.
    /// Missing keys keep their defaults; unknown keys are ignored.
    pub fn from_config(config: &Value) -> Result<Self> {
        let section = match config.get("mindmap") {
            Some(v) if v.is_object() => v,
            _ => config,
        };
        let opts: Self = serde_json::from_value(section.clone())?;
        opts.validate()?;
        Ok(opts)
    }

    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("parentChildSpace", self.parent_child_space),
            ("siblingSpace", self.sibling_space),
            ("cousinSpace", self.cousin_space),
            ("expanderSize", self.expander_size),
        ];
        for (name, value) in fields {
            if !value.is_finite() || value < 0.0 {
                return Err(Error::InvalidOptions {
                    message: format!("`{name}` must be a finite, non-negative number (got {value})"),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::ArrangerOptions;
    use crate::Error;
    use serde_json::json;

    #[test]
    fn reads_nested_mindmap_section() {
        let cfg = json!({
            "fontSize": 16,
            "mindmap": { "siblingSpace": 8, "expanderSize": 0 }
        });
        let opts = ArrangerOptions::from_config(&cfg).unwrap();
        assert_eq!(opts.sibling_space, 8.0);
        assert_eq!(opts.expander_size, 0.0);
        assert_eq!(opts.parent_child_space, 30.0);
        assert_eq!(opts.cousin_space, 12.0);
    }

    #[test]
    fn reads_top_level_keys() {
        let opts = ArrangerOptions::from_config(&json!({ "cousinSpace": 40 })).unwrap();
        assert_eq!(opts.cousin_space, 40.0);
    }

    #[test]
    fn rejects_negative_spacing() {
        let err = ArrangerOptions::from_config(&json!({ "siblingSpace": -1 })).unwrap_err();
        assert!(matches!(err, Error::InvalidOptions { .. }), "{err}");
    }

    #[test]
    fn rejects_wrong_types() {
        let err = ArrangerOptions::from_config(&json!({ "siblingSpace": "wide" })).unwrap_err();
        assert!(matches!(err, Error::Json(_)), "{err}");
    }
}
