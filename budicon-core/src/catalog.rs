//! Per-page grid catalogs: which pages carry icon grids, and what each
//! cell is named.

use std::path::Path;

use serde::{Deserialize, Serialize};
use snafu::prelude::*;

use crate::error::*;
use crate::grid::spec::{GridSpec, NameGrid};

/// One page worth of extraction work: where it is, how it is laid out, and
/// what its cells are called.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageGrid {
    /// 1-based page number in the source document.
    pub page: u16,
    #[serde(default)]
    pub spec: GridSpec,
    pub names: NameGrid,
}

/// Loads a catalog from a JSON file.
///
/// The file holds an array of [`PageGrid`] entries; `spec` may be omitted
/// per entry to use the visual-index layout.
pub fn load(path: impl AsRef<Path>) -> Result<Vec<PageGrid>, BudiconError> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path).context(CatalogReadSnafu {
        path: path.display().to_string(),
    })?;
    serde_json::from_str(&raw).context(CatalogParseSnafu {
        path: path.display().to_string(),
    })
}

/// The built-in catalog for the handbook's visual index, pages 7 through
/// 10: forty-eight bud icons in reading order.
pub fn visual_index() -> Vec<PageGrid> {
    let page = |page, rows: &[&[&str]]| PageGrid {
        page,
        spec: GridSpec::default(),
        names: NameGrid::from_rows(rows),
    };

    vec![
        page(
            7,
            &[
                &["airelle", "amandier", "arbre-de-judee", "argousier"],
                &["aubepine", "aulne", "bouleau", "bruyere"],
                &["cassis", "cedre", "charme", "chataignier"],
            ],
        ),
        page(
            8,
            &[
                &["chene", "citronnier", "cornouiller", "eglantier"],
                &["erable", "figuier", "framboisier", "frene"],
                &["genevrier", "ginkgo", "hetre", "lilas"],
            ],
        ),
        page(
            9,
            &[
                &["mais", "marronnier", "myrtillier", "noisetier"],
                &["noyer", "olivier", "orme", "peuplier"],
                &["pin", "platane", "pommier", "romarin"],
            ],
        ),
        page(
            10,
            &[
                &["ronce", "sapin", "saule", "seigle"],
                &["sequoia", "sorbier", "tamaris", "tilleul"],
                &["tilleul-argente", "vigne", "vigne-vierge", "viorne"],
            ],
        ),
    ]
}
