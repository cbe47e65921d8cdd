//! The Iris flower dataset (Fisher, 1936) as distributed with scikit-learn.
//!
//! 150 samples, 50 per class, four measurements in centimetres each.

use serde::Deserialize;

use crate::data::model::{CellValue, Table};

/// Measurement columns, in file order.
pub const FEATURE_NAMES: [&str; 4] = [
    "sepal length (cm)",
    "sepal width (cm)",
    "petal length (cm)",
    "petal width (cm)",
];

/// Name of the class-code column.
pub const TARGET_COLUMN: &str = "target";

/// Class labels indexed by target code.
pub const TARGET_NAMES: [&str; 3] = ["setosa", "versicolor", "virginica"];

/// Number of samples in the dataset.
pub const N_SAMPLES: usize = 150;

/// One flower: four measurements and its class code.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct IrisSample {
    #[serde(rename = "sepal length (cm)")]
    pub sepal_length: f64,
    #[serde(rename = "sepal width (cm)")]
    pub sepal_width: f64,
    #[serde(rename = "petal length (cm)")]
    pub petal_length: f64,
    #[serde(rename = "petal width (cm)")]
    pub petal_width: f64,
    pub target: u8,
}

impl IrisSample {
    pub fn features(&self) -> [f64; 4] {
        [
            self.sepal_length,
            self.sepal_width,
            self.petal_length,
            self.petal_width,
        ]
    }

    /// Label of this sample's class, `None` for a code outside [`TARGET_NAMES`].
    pub fn target_name(&self) -> Option<&'static str> {
        TARGET_NAMES.get(usize::from(self.target)).copied()
    }
}

const fn sample(
    sepal_length: f64,
    sepal_width: f64,
    petal_length: f64,
    petal_width: f64,
    target: u8,
) -> IrisSample {
    IrisSample {
        sepal_length,
        sepal_width,
        petal_length,
        petal_width,
        target,
    }
}

/// All samples, grouped by class in target order.
pub fn samples() -> &'static [IrisSample] {
    &SAMPLES
}

/// The dataset as a table: four float feature columns then the integer target.
pub fn frame() -> Table {
    let columns = FEATURE_NAMES
        .iter()
        .map(|name| name.to_string())
        .chain(std::iter::once(TARGET_COLUMN.to_string()))
        .collect();

    let rows = SAMPLES
        .iter()
        .map(|s| {
            s.features()
                .into_iter()
                .map(CellValue::Float)
                .chain(std::iter::once(CellValue::Integer(i64::from(s.target))))
                .collect()
        })
        .collect();

    Table::new(columns, rows)
}

#[rustfmt::skip]
static SAMPLES: [IrisSample; N_SAMPLES] = [
    sample(5.1, 3.5, 1.4, 0.2, 0),
    sample(4.9, 3.0, 1.4, 0.2, 0),
    sample(4.7, 3.2, 1.3, 0.2, 0),
    sample(4.6, 3.1, 1.5, 0.2, 0),
    sample(5.0, 3.6, 1.4, 0.2, 0),
    sample(5.4, 3.9, 1.7, 0.4, 0),
    sample(4.6, 3.4, 1.4, 0.3, 0),
    sample(5.0, 3.4, 1.5, 0.2, 0),
    sample(4.4, 2.9, 1.4, 0.2, 0),
    sample(4.9, 3.1, 1.5, 0.1, 0),
    sample(5.4, 3.7, 1.5, 0.2, 0),
    sample(4.8, 3.4, 1.6, 0.2, 0),
    sample(4.8, 3.0, 1.4, 0.1, 0),
    sample(4.3, 3.0, 1.1, 0.1, 0),
    sample(5.8, 4.0, 1.2, 0.2, 0),
    sample(5.7, 4.4, 1.5, 0.4, 0),
    sample(5.4, 3.9, 1.3, 0.4, 0),
    sample(5.1, 3.5, 1.4, 0.3, 0),
    sample(5.7, 3.8, 1.7, 0.3, 0),
    sample(5.1, 3.8, 1.5, 0.3, 0),
    sample(5.4, 3.4, 1.7, 0.2, 0),
    sample(5.1, 3.7, 1.5, 0.4, 0),
    sample(4.6, 3.6, 1.0, 0.2, 0),
    sample(5.1, 3.3, 1.7, 0.5, 0),
    sample(4.8, 3.4, 1.9, 0.2, 0),
    sample(5.0, 3.0, 1.6, 0.2, 0),
    sample(5.0, 3.4, 1.6, 0.4, 0),
    sample(5.2, 3.5, 1.5, 0.2, 0),
    sample(5.2, 3.4, 1.4, 0.2, 0),
    sample(4.7, 3.2, 1.6, 0.2, 0),
    sample(4.8, 3.1, 1.6, 0.2, 0),
    sample(5.4, 3.4, 1.5, 0.4, 0),
    sample(5.2, 4.1, 1.5, 0.1, 0),
    sample(5.5, 4.2, 1.4, 0.2, 0),
    sample(4.9, 3.1, 1.5, 0.2, 0),
    sample(5.0, 3.2, 1.2, 0.2, 0),
    sample(5.5, 3.5, 1.3, 0.2, 0),
    sample(4.9, 3.6, 1.4, 0.1, 0),
    sample(4.4, 3.0, 1.3, 0.2, 0),
    sample(5.1, 3.4, 1.5, 0.2, 0),
    sample(5.0, 3.5, 1.3, 0.3, 0),
    sample(4.5, 2.3, 1.3, 0.3, 0),
    sample(4.4, 3.2, 1.3, 0.2, 0),
    sample(5.0, 3.5, 1.6, 0.6, 0),
    sample(5.1, 3.8, 1.9, 0.4, 0),
    sample(4.8, 3.0, 1.4, 0.3, 0),
    sample(5.1, 3.8, 1.6, 0.2, 0),
    sample(4.6, 3.2, 1.4, 0.2, 0),
    sample(5.3, 3.7, 1.5, 0.2, 0),
    sample(5.0, 3.3, 1.4, 0.2, 0),
    sample(7.0, 3.2, 4.7, 1.4, 1),
    sample(6.4, 3.2, 4.5, 1.5, 1),
    sample(6.9, 3.1, 4.9, 1.5, 1),
    sample(5.5, 2.3, 4.0, 1.3, 1),
    sample(6.5, 2.8, 4.6, 1.5, 1),
    sample(5.7, 2.8, 4.5, 1.3, 1),
    sample(6.3, 3.3, 4.7, 1.6, 1),
    sample(4.9, 2.4, 3.3, 1.0, 1),
    sample(6.6, 2.9, 4.6, 1.3, 1),
    sample(5.2, 2.7, 3.9, 1.4, 1),
    sample(5.0, 2.0, 3.5, 1.0, 1),
    sample(5.9, 3.0, 4.2, 1.5, 1),
    sample(6.0, 2.2, 4.0, 1.0, 1),
    sample(6.1, 2.9, 4.7, 1.4, 1),
    sample(5.6, 2.9, 3.6, 1.3, 1),
    sample(6.7, 3.1, 4.4, 1.4, 1),
    sample(5.6, 3.0, 4.5, 1.5, 1),
    sample(5.8, 2.7, 4.1, 1.0, 1),
    sample(6.2, 2.2, 4.5, 1.5, 1),
    sample(5.6, 2.5, 3.9, 1.1, 1),
    sample(5.9, 3.2, 4.8, 1.8, 1),
    sample(6.1, 2.8, 4.0, 1.3, 1),
    sample(6.3, 2.5, 4.9, 1.5, 1),
    sample(6.1, 2.8, 4.7, 1.2, 1),
    sample(6.4, 2.9, 4.3, 1.3, 1),
    sample(6.6, 3.0, 4.4, 1.4, 1),
    sample(6.8, 2.8, 4.8, 1.4, 1),
    sample(6.7, 3.0, 5.0, 1.7, 1),
    sample(6.0, 2.9, 4.5, 1.5, 1),
    sample(5.7, 2.6, 3.5, 1.0, 1),
    sample(5.5, 2.4, 3.8, 1.1, 1),
    sample(5.5, 2.4, 3.7, 1.0, 1),
    sample(5.8, 2.7, 3.9, 1.2, 1),
    sample(6.0, 2.7, 5.1, 1.6, 1),
    sample(5.4, 3.0, 4.5, 1.5, 1),
    sample(6.0, 3.4, 4.5, 1.6, 1),
    sample(6.7, 3.1, 4.7, 1.5, 1),
    sample(6.3, 2.3, 4.4, 1.3, 1),
    sample(5.6, 3.0, 4.1, 1.3, 1),
    sample(5.5, 2.5, 4.0, 1.3, 1),
    sample(5.5, 2.6, 4.4, 1.2, 1),
    sample(6.1, 3.0, 4.6, 1.4, 1),
    sample(5.8, 2.6, 4.0, 1.2, 1),
    sample(5.0, 2.3, 3.3, 1.0, 1),
    sample(5.6, 2.7, 4.2, 1.3, 1),
    sample(5.7, 3.0, 4.2, 1.2, 1),
    sample(5.7, 2.9, 4.2, 1.3, 1),
    sample(6.2, 2.9, 4.3, 1.3, 1),
    sample(5.1, 2.5, 3.0, 1.1, 1),
    sample(5.7, 2.8, 4.1, 1.3, 1),
    sample(6.3, 3.3, 6.0, 2.5, 2),
    sample(5.8, 2.7, 5.1, 1.9, 2),
    sample(7.1, 3.0, 5.9, 2.1, 2),
    sample(6.3, 2.9, 5.6, 1.8, 2),
    sample(6.5, 3.0, 5.8, 2.2, 2),
    sample(7.6, 3.0, 6.6, 2.1, 2),
    sample(4.9, 2.5, 4.5, 1.7, 2),
    sample(7.3, 2.9, 6.3, 1.8, 2),
    sample(6.7, 2.5, 5.8, 1.8, 2),
    sample(7.2, 3.6, 6.1, 2.5, 2),
    sample(6.5, 3.2, 5.1, 2.0, 2),
    sample(6.4, 2.7, 5.3, 1.9, 2),
    sample(6.8, 3.0, 5.5, 2.1, 2),
    sample(5.7, 2.5, 5.0, 2.0, 2),
    sample(5.8, 2.8, 5.1, 2.4, 2),
    sample(6.4, 3.2, 5.3, 2.3, 2),
    sample(6.5, 3.0, 5.5, 1.8, 2),
    sample(7.7, 3.8, 6.7, 2.2, 2),
    sample(7.7, 2.6, 6.9, 2.3, 2),
    sample(6.0, 2.2, 5.0, 1.5, 2),
    sample(6.9, 3.2, 5.7, 2.3, 2),
    sample(5.6, 2.8, 4.9, 2.0, 2),
    sample(7.7, 2.8, 6.7, 2.0, 2),
    sample(6.3, 2.7, 4.9, 1.8, 2),
    sample(6.7, 3.3, 5.7, 2.1, 2),
    sample(7.2, 3.2, 6.0, 1.8, 2),
    sample(6.2, 2.8, 4.8, 1.8, 2),
    sample(6.1, 3.0, 4.9, 1.8, 2),
    sample(6.4, 2.8, 5.6, 2.1, 2),
    sample(7.2, 3.0, 5.8, 1.6, 2),
    sample(7.4, 2.8, 6.1, 1.9, 2),
    sample(7.9, 3.8, 6.4, 2.0, 2),
    sample(6.4, 2.8, 5.6, 2.2, 2),
    sample(6.3, 2.8, 5.1, 1.5, 2),
    sample(6.1, 2.6, 5.6, 1.4, 2),
    sample(7.7, 3.0, 6.1, 2.3, 2),
    sample(6.3, 3.4, 5.6, 2.4, 2),
    sample(6.4, 3.1, 5.5, 1.8, 2),
    sample(6.0, 3.0, 4.8, 1.8, 2),
    sample(6.9, 3.1, 5.4, 2.1, 2),
    sample(6.7, 3.1, 5.6, 2.4, 2),
    sample(6.9, 3.1, 5.1, 2.3, 2),
    sample(5.8, 2.7, 5.1, 1.9, 2),
    sample(6.8, 3.2, 5.9, 2.3, 2),
    sample(6.7, 3.3, 5.7, 2.5, 2),
    sample(6.7, 3.0, 5.2, 2.3, 2),
    sample(6.3, 2.5, 5.0, 1.9, 2),
    sample(6.5, 3.0, 5.2, 2.0, 2),
    sample(6.2, 3.4, 5.4, 2.3, 2),
    sample(5.9, 3.0, 5.1, 1.8, 2),
];
