//! Shared fixtures for the cross-crate integration tests.

pub mod documents {
    //! The same session described in each supported config format.

    pub const TOML: &str = r#"
x_min = -2.0
x_max = 2.0
interval_count = 4
function = "square"
"#;

    pub const JSON: &str = r#"{
    "x_min": -2.0,
    "x_max": 2.0,
    "interval_count": 4,
    "function": "square"
}"#;

    pub const YAML: &str = "
x_min: -2.0
x_max: 2.0
interval_count: 4
function: square
";
}

pub mod session {
    //! Drives a model the way a controls view does: one edit at a time.

    use riemann_catalog::Catalog;
    use riemann_model::RiemannModel;

    /// A single user edit.
    #[derive(Debug, Clone, Copy)]
    pub enum Edit<'a> {
        XMin(&'a str),
        XMax(&'a str),
        Stepper(i64),
        Segment(usize),
    }

    /// Applies edits to a fresh model.
    ///
    /// Text that does not parse as a number leaves the matching bound at its
    /// "not yet entered" sentinel. Out-of-range segment indices are ignored.
    #[must_use]
    pub fn replay(edits: &[Edit<'_>]) -> RiemannModel<Catalog> {
        let mut model = RiemannModel::default();
        for edit in edits {
            match *edit {
                Edit::XMin(text) => model.set_x_min(parse_or(text, f64::NEG_INFINITY)),
                Edit::XMax(text) => model.set_x_max(parse_or(text, f64::INFINITY)),
                Edit::Stepper(count) => model.set_interval_count(count),
                Edit::Segment(index) => {
                    if let Some(function) = Catalog::from_index(index) {
                        model.set_function(function);
                    }
                }
            }
        }
        model
    }

    fn parse_or(text: &str, sentinel: f64) -> f64 {
        text.trim().parse().unwrap_or(sentinel)
    }
}
