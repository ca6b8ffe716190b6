//! Search-space reports.

use crate::problem::Problem;
use permpack::core::COUNT_LIMIT;
use permpack::d3::PermutationRotationIterator;
use permpack::Config;
use serde::Serialize;

/// Per-type line of a report.
#[derive(Debug, Clone, Serialize)]
pub struct TypeReport {
    /// Type index
    pub index: usize,
    /// Display label
    pub label: String,
    /// Number of instances
    pub count: usize,
    /// Orientations that fit the container
    pub orientations: usize,
    /// True if no orientation fits
    pub excluded: bool,
}

/// Summary of a problem's enumeration space.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    /// Problem name
    pub name: String,
    /// Container extents
    pub container: [u32; 3],
    /// True if full 3D rotation was enabled
    pub rotate_3d: bool,
    /// Most orientations any box can have under the rotation mode
    pub max_orientations: usize,
    /// Box instances in the problem, including excluded types
    pub instances: usize,
    /// Per-type details
    pub types: Vec<TypeReport>,
    /// Slots in the enumeration (instances of usable types)
    pub slots: usize,
    /// Distinguishable orderings, if representable
    pub permutations: Option<u64>,
    /// Orientation combinations per ordering, if representable
    pub rotations: Option<u64>,
    /// Orderings times orientation combinations, if representable
    pub arrangements: Option<u64>,
}

impl Report {
    /// Builds a report from an enumerator freshly constructed with `config`.
    pub fn new(problem: &Problem, iter: &PermutationRotationIterator, config: &Config) -> Self {
        let types = (0..iter.box_item_len())
            .filter_map(|index| {
                let orientations = iter.type_orientations(index)?;
                Some(TypeReport {
                    index,
                    label: problem.label(index),
                    count: orientations.count(),
                    orientations: orientations.len(),
                    excluded: orientations.is_empty(),
                })
            })
            .collect();

        let permutations = iter.count_permutations();
        let rotations = iter.count_rotations();
        let arrangements = permutations
            .zip(rotations)
            .and_then(|(p, r)| p.checked_mul(r))
            .filter(|n| *n <= COUNT_LIMIT);

        let bound = iter.dimension();
        Self {
            name: problem.name.clone(),
            container: [bound.width(), bound.depth(), bound.height()],
            rotate_3d: config.rotate_3d(),
            max_orientations: config.rotation.max_orientations(),
            instances: problem.total_instances(),
            types,
            slots: iter.len(),
            permutations,
            rotations,
            arrangements,
        }
    }

    /// Prints a human-readable summary.
    pub fn print_summary(&self) {
        println!("Problem: {}", self.name);
        println!(
            "Container: {}x{}x{}",
            self.container[0], self.container[1], self.container[2]
        );
        println!(
            "Rotation:  {} (up to {} orientations per box)",
            if self.rotate_3d { "3D" } else { "2D" },
            self.max_orientations
        );
        println!("{:-<60}", "");
        println!(
            "  {:<6} {:<20} {:>8} {:>14}",
            "index", "label", "count", "orientations"
        );
        for t in &self.types {
            let marker = if t.excluded { "  (excluded)" } else { "" };
            println!(
                "  {:<6} {:<20} {:>8} {:>14}{}",
                t.index, t.label, t.count, t.orientations, marker
            );
        }
        println!("{:-<60}", "");
        println!("Instances:    {}", self.instances);
        println!("Slots:        {}", self.slots);
        println!("Permutations: {}", format_count(self.permutations));
        println!("Rotations:    {}", format_count(self.rotations));
        println!("Arrangements: {}", format_count(self.arrangements));
    }
}

fn format_count(count: Option<u64>) -> String {
    match count {
        Some(n) => n.to_string(),
        None => "overflow".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::ProblemParser;
    use permpack::RotationMode;

    #[test]
    fn test_report_counts() {
        let json = r#"{
            "name": "mixed",
            "container": [3, 3, 3],
            "items": [
                { "id": "a", "size": [1, 2, 3], "count": 2 },
                { "id": "big", "size": [4, 4, 4] },
                { "id": "c", "size": [1, 1, 1] }
            ]
        }"#;
        let problem = ProblemParser::new().parse_json(json).unwrap();
        let config = Config::default();
        let iter =
            PermutationRotationIterator::new(&problem.items, problem.container.clone(), &config)
                .unwrap();

        let report = Report::new(&problem, &iter, &config);

        assert_eq!(report.types.len(), 3);
        assert!(report.types[1].excluded);
        assert_eq!(report.types[0].orientations, 6);
        assert!(report.rotate_3d);
        assert_eq!(report.max_orientations, 6);
        assert_eq!(report.instances, 4);
        assert_eq!(report.slots, 3);
        assert_eq!(report.permutations, Some(3));
        assert_eq!(report.rotations, Some(36));
        assert_eq!(report.arrangements, Some(108));
    }

    #[test]
    fn test_report_in_2d_mode() {
        let json = r#"{
            "name": "flat",
            "container": [3, 3, 3],
            "items": [{ "id": "a", "size": [1, 2, 3] }]
        }"#;
        let problem = ProblemParser::new().parse_json(json).unwrap();
        let config = Config::new().with_rotation(RotationMode::TwoD);
        let iter =
            PermutationRotationIterator::new(&problem.items, problem.container.clone(), &config)
                .unwrap();

        let report = Report::new(&problem, &iter, &config);

        assert!(!report.rotate_3d);
        assert_eq!(report.max_orientations, 2);
        assert_eq!(report.types[0].orientations, 2);
        assert_eq!(report.instances, 1);
    }

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(Some(15)), "15");
        assert_eq!(format_count(None), "overflow");
    }
}
