/// A semantic class of the simulator segmentation sensors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SemanticClass {
    /// Label value stored in the segmentation buffer
    pub label: u8,
    /// Human readable class name
    pub name: &'static str,
    /// Display color as RGB
    pub color: [u8; 3],
}

const fn class(label: u8, name: &'static str, color: [u8; 3]) -> SemanticClass {
    SemanticClass { label, name, color }
}

/// The semantic classes indexed by label.
pub const SEMANTIC_CLASSES: [SemanticClass; 29] = [
    class(0, "unlabelled", [0, 0, 0]),
    class(1, "road", [128, 64, 0]),
    class(2, "sidewalk", [244, 35, 232]),
    class(3, "building", [70, 70, 70]),
    class(4, "wall", [102, 102, 156]),
    class(5, "fence", [190, 153, 153]),
    class(6, "pole", [153, 153, 153]),
    class(7, "traffic light", [250, 170, 30]),
    class(8, "traffic sign", [220, 220, 0]),
    class(9, "vegetation", [107, 142, 35]),
    class(10, "terrain", [152, 251, 152]),
    class(11, "sky", [70, 130, 180]),
    class(12, "pedestrian", [220, 20, 60]),
    class(13, "rider", [255, 0, 0]),
    class(14, "car", [0, 0, 142]),
    class(15, "truck", [0, 0, 70]),
    class(16, "bus", [0, 60, 100]),
    class(17, "train", [0, 80, 100]),
    class(18, "motorcycle", [0, 0, 230]),
    class(19, "bicycle", [119, 11, 32]),
    class(20, "static", [110, 190, 160]),
    class(21, "dynamic", [170, 120, 50]),
    class(22, "other", [55, 90, 80]),
    class(23, "water", [45, 60, 150]),
    class(24, "road line", [157, 234, 50]),
    class(25, "ground", [81, 0, 81]),
    class(26, "bridge", [150, 100, 100]),
    class(27, "rail track", [230, 150, 140]),
    class(28, "guard rail", [180, 165, 180]),
];

/// Look up the semantic class of a label.
pub fn semantic_class(label: u8) -> Option<&'static SemanticClass> {
    SEMANTIC_CLASSES.get(label as usize)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_indexed_by_label() {
        for (i, class) in SEMANTIC_CLASSES.iter().enumerate() {
            assert_eq!(class.label as usize, i);
        }
    }

    #[test]
    fn test_semantic_class() {
        assert_eq!(semantic_class(14).map(|c| c.name), Some("car"));
        assert_eq!(semantic_class(12).map(|c| c.color), Some([220, 20, 60]));
        assert_eq!(semantic_class(29), None);
    }
}
