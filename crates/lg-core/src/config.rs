//! Layout parameters and their validation
//!
//! `LayoutParams::validate` is the configuration boundary: parameter sets
//! that would drive partitions into nonsense are rejected here rather than
//! discovered deep in the recursion.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{LayoutError, LayoutResult};

/// Size parameters and seed for one layout
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutParams {
    /// Extent of the square generation area
    pub map_size: u32,
    /// Partition depth; the tree produces `2^split_count` rooms
    pub split_count: u32,
    /// Fraction bounding split asymmetry and the room reshape floor
    pub split_ratio: f64,
    /// Hard floor on any room dimension
    pub min_room_size: u32,
    /// Generator seed; `None` draws one from entropy
    pub seed: Option<u64>,
}

impl Default for LayoutParams {
    fn default() -> Self {
        Self {
            map_size: DEFAULT_MAP_SIZE,
            split_count: DEFAULT_SPLIT_COUNT,
            split_ratio: DEFAULT_SPLIT_RATIO,
            min_room_size: DEFAULT_MIN_ROOM_SIZE,
            seed: None,
        }
    }
}

impl LayoutParams {
    /// Parse parameters from JSON; missing fields take their defaults
    pub fn from_json_str(json: &str) -> LayoutResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load parameters from a JSON file
    pub fn load(path: &Path) -> LayoutResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            LayoutError::Config(format!("could not read '{}': {}", path.display(), e))
        })?;
        Self::from_json_str(&text)
    }

    /// Number of rooms the partition tree produces
    pub fn room_count(&self) -> u64 {
        1u64 << self.split_count.min(MAX_SPLIT_COUNT)
    }

    /// Reject parameter sets that cannot produce a sane layout
    pub fn validate(&self) -> LayoutResult<()> {
        if self.map_size == 0 {
            return Err(LayoutError::invalid("map_size", "must be positive"));
        }
        if self.map_size > MAX_MAP_SIZE {
            return Err(LayoutError::invalid(
                "map_size",
                format!("{} exceeds the maximum of {}", self.map_size, MAX_MAP_SIZE),
            ));
        }
        if self.min_room_size == 0 {
            return Err(LayoutError::invalid("min_room_size", "must be positive"));
        }
        if !self.split_ratio.is_finite() || self.split_ratio <= 0.0 || self.split_ratio > 0.5 {
            return Err(LayoutError::invalid(
                "split_ratio",
                format!("{} is outside (0, 0.5]", self.split_ratio),
            ));
        }
        if self.min_room_size > self.map_size {
            return Err(LayoutError::invalid(
                "min_room_size",
                format!(
                    "{} does not fit a {}x{} map",
                    self.min_room_size, self.map_size, self.map_size
                ),
            ));
        }
        if self.split_count > MAX_SPLIT_COUNT {
            return Err(LayoutError::invalid(
                "split_count",
                format!("{} exceeds the maximum of {}", self.split_count, MAX_SPLIT_COUNT),
            ));
        }

        // Rooms at the minimum size must fit the map by area
        let per_side = (self.map_size / self.min_room_size) as u64;
        let capacity = per_side * per_side;
        if self.room_count() > capacity {
            return Err(LayoutError::invalid(
                "split_count",
                format!(
                    "{} rooms of at least {}x{} cannot fit a {}x{} map (capacity {})",
                    self.room_count(),
                    self.min_room_size,
                    self.min_room_size,
                    self.map_size,
                    self.map_size,
                    capacity
                ),
            ));
        }

        // Every cell that still has to be split needs an area of at least two
        if self.split_count > 0 && self.worst_case_area() < 2.0 {
            return Err(LayoutError::invalid(
                "split_count",
                format!(
                    "{} splits of a {}x{} map at ratio {} can leave a 1x1 partition",
                    self.split_count, self.map_size, self.map_size, self.split_ratio
                ),
            ));
        }

        Ok(())
    }

    /// Lower bound on the area of a cell entering the last split level
    fn worst_case_area(&self) -> f64 {
        let share = self.split_ratio.min(MIN_SPLIT_SHARE);
        let levels = self.split_count.saturating_sub(1) as i32;
        (self.map_size as f64).powi(2) * share.powi(levels)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let params = LayoutParams::default();
        assert_eq!(params.map_size, 100);
        assert_eq!(params.split_count, 5);
        assert_eq!(params.min_room_size, 6);
        assert_eq!(params.room_count(), 32);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_rejects_zero_sizes() {
        let params = LayoutParams {
            map_size: 0,
            ..Default::default()
        };
        assert!(matches!(
            params.validate(),
            Err(LayoutError::InvalidConfig { field: "map_size", .. })
        ));

        let params = LayoutParams {
            min_room_size: 0,
            ..Default::default()
        };
        assert!(matches!(
            params.validate(),
            Err(LayoutError::InvalidConfig { field: "min_room_size", .. })
        ));
    }

    #[test]
    fn test_rejects_bad_ratio() {
        for ratio in [0.0, -0.1, 0.6, f64::NAN, f64::INFINITY] {
            let params = LayoutParams {
                split_ratio: ratio,
                ..Default::default()
            };
            assert!(
                matches!(
                    params.validate(),
                    Err(LayoutError::InvalidConfig { field: "split_ratio", .. })
                ),
                "ratio {ratio} should be rejected"
            );
        }

        let half = LayoutParams {
            split_ratio: 0.5,
            ..Default::default()
        };
        assert!(half.validate().is_ok());
    }

    #[test]
    fn test_rejects_oversized_room_floor() {
        let params = LayoutParams {
            map_size: 8,
            min_room_size: 9,
            split_count: 0,
            ..Default::default()
        };
        assert!(matches!(
            params.validate(),
            Err(LayoutError::InvalidConfig { field: "min_room_size", .. })
        ));
    }

    #[test]
    fn test_rejects_too_many_rooms() {
        // 16 / 4 = 4 rooms per side, capacity 16
        let ok = LayoutParams {
            map_size: 16,
            min_room_size: 4,
            split_count: 4,
            ..Default::default()
        };
        assert!(ok.validate().is_ok());

        let too_deep = LayoutParams {
            split_count: 5,
            ..ok
        };
        assert!(matches!(
            too_deep.validate(),
            Err(LayoutError::InvalidConfig { field: "split_count", .. })
        ));

        let absurd = LayoutParams {
            split_count: 40,
            ..LayoutParams::default()
        };
        assert!(absurd.validate().is_err());
    }

    #[test]
    fn test_rejects_huge_map() {
        let params = LayoutParams {
            map_size: 3_000_000_000,
            split_count: 0,
            min_room_size: 1,
            ..Default::default()
        };
        assert!(matches!(
            params.validate(),
            Err(LayoutError::InvalidConfig { field: "map_size", .. })
        ));

        let largest = LayoutParams {
            map_size: MAX_MAP_SIZE,
            ..Default::default()
        };
        assert!(largest.validate().is_ok());

        let over = LayoutParams {
            map_size: MAX_MAP_SIZE + 1,
            ..Default::default()
        };
        assert!(over.validate().is_err());
    }

    #[test]
    fn test_rejects_unsplittable_depth() {
        // Capacity allows 16 rooms, but a skewed first split strands a 1x1 cell
        let tight = LayoutParams {
            map_size: 4,
            split_count: 4,
            split_ratio: 0.25,
            min_room_size: 1,
            ..Default::default()
        };
        assert!(matches!(
            tight.validate(),
            Err(LayoutError::InvalidConfig { field: "split_count", .. })
        ));

        let roomier = LayoutParams {
            map_size: 12,
            ..tight
        };
        assert!(roomier.validate().is_ok());
    }

    #[test]
    fn test_from_json_partial() {
        let params = LayoutParams::from_json_str(r#"{ "map_size": 64, "seed": 9 }"#).unwrap();
        assert_eq!(params.map_size, 64);
        assert_eq!(params.seed, Some(9));
        assert_eq!(params.split_count, DEFAULT_SPLIT_COUNT);
    }

    #[test]
    fn test_from_json_malformed() {
        let err = LayoutParams::from_json_str("{ map_size: ").unwrap_err();
        assert!(matches!(err, LayoutError::Config(_)));
    }
}
