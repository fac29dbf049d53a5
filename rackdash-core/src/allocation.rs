//! RAM allocation series for the proportion chart
//!
//! Maps a machine's displayed project subset to chart slices. No
//! normalization happens here: the data source owns the percentages, and
//! entries carrying 0 simply render as empty slices. Per-host sums are not
//! forced to 100.

use serde::Serialize;

use crate::catalog::Catalog;
use crate::view::{self, ViewError};

/// One slice of the RAM proportion chart
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RamSlice {
    pub label: String,
    pub percentage: f32,
    pub color: String,
    pub allocated: String,
}

/// Chart series for one machine, in catalog order
pub fn ram_series(catalog: &Catalog, machine_id: &str) -> Result<Vec<RamSlice>, ViewError> {
    let detail = view::machine_detail(catalog, machine_id)?;
    Ok(detail
        .projects
        .iter()
        .map(|p| RamSlice {
            label: p.name.clone(),
            percentage: p.ram_percentage,
            color: p.color.clone(),
            allocated: p.ram_allocated.clone(),
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn series_covers_the_displayed_projects() {
        let catalog = Catalog::builtin();
        let series = ram_series(&catalog, "r5").expect("r5 exists");
        let displayed = catalog
            .projects()
            .iter()
            .filter(|p| p.host == "R5 Server" && !p.overhead)
            .count();
        assert_eq!(series.len(), displayed);
    }

    #[test]
    fn percentages_are_reported_as_is() {
        let catalog = Catalog::builtin();
        let series = ram_series(&catalog, "r5").expect("r5 exists");
        let sum: f32 = series.iter().map(|s| s.percentage).sum();
        // With the buffer entry hidden the shares do not reach 100, and
        // the aggregator must not renormalize them.
        assert!((sum - 81.25).abs() < f32::EPSILON, "sum was {}", sum);
    }

    #[test]
    fn zero_percentage_entries_pass_through() {
        let catalog = Catalog::builtin();
        let series = ram_series(&catalog, "katana17").expect("katana17 exists");
        assert!(!series.is_empty());
        assert!(series.iter().all(|s| s.percentage == 0.0));
    }

    #[test]
    fn unknown_machine_surfaces_not_found() {
        let catalog = Catalog::builtin();
        assert!(matches!(
            ram_series(&catalog, "nope"),
            Err(ViewError::MachineNotFound { .. })
        ));
    }
}
