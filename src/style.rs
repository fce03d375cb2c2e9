use crate::graph::{NodeStyle, NodeType, TaskStatus};

const RECT: NodeStyle = NodeStyle::new("#DEE9FF", "#5B8FF9");
const DIAMOND: NodeStyle = NodeStyle::new("#FFF2E8", "#FF7A00");
const ROUND: NodeStyle = NodeStyle::new("#F6FFED", "#52C41A");
const STADIUM: NodeStyle = NodeStyle::new("#FFF1F0", "#FF4D4F");
const RHOMBUS: NodeStyle = NodeStyle::new("#F9F0FF", "#722ED1");
const CIRCLE: NodeStyle = NodeStyle::new("#E6F7FF", "#1890FF");

const SHAPE_STYLES: [(NodeType, NodeStyle); 6] = [
    (NodeType::Rect, RECT),
    (NodeType::Diamond, DIAMOND),
    (NodeType::Round, ROUND),
    (NodeType::Stadium, STADIUM),
    (NodeType::Rhombus, RHOMBUS),
    (NodeType::Circle, CIRCLE),
];

const DONE: NodeStyle = NodeStyle::new("#52C41A", "#389E0D");
const ACTIVE: NodeStyle = NodeStyle::new("#1890FF", "#096DD9");
const CRIT: NodeStyle = NodeStyle::new("#FF4D4F", "#CF1322");
const PENDING: NodeStyle = NodeStyle::new("#D9D9D9", "#8C8C8C");

const STATUS_STYLES: [(TaskStatus, NodeStyle); 4] = [
    (TaskStatus::Done, DONE),
    (TaskStatus::Active, ACTIVE),
    (TaskStatus::Crit, CRIT),
    (TaskStatus::Pending, PENDING),
];

/// Fill/stroke pair for a node shape. Shapes without an entry (the state
/// pseudostates) use the circle style.
pub fn shape_style(node_type: NodeType) -> NodeStyle {
    SHAPE_STYLES
        .iter()
        .find(|(t, _)| *t == node_type)
        .map(|(_, s)| *s)
        .unwrap_or(CIRCLE)
}

/// Fill/stroke pair for a Gantt task status, defaulting to pending.
pub fn status_style(status: TaskStatus) -> NodeStyle {
    STATUS_STYLES
        .iter()
        .find(|(s, _)| *s == status)
        .map(|(_, style)| *style)
        .unwrap_or(PENDING)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn shape_style_rect() {
        assert_eq!(shape_style(NodeType::Rect), NodeStyle::new("#DEE9FF", "#5B8FF9"));
    }

    #[test]
    fn shape_style_every_drawable_shape_is_distinct() {
        let mut fills: Vec<&str> = SHAPE_STYLES.iter().map(|(t, _)| shape_style(*t).fill).collect();
        fills.sort();
        fills.dedup();
        assert_eq!(fills.len(), SHAPE_STYLES.len());
    }

    #[test]
    fn shape_style_pseudostates_fall_back_to_circle() {
        assert_eq!(shape_style(NodeType::Start), CIRCLE);
        assert_eq!(shape_style(NodeType::End), CIRCLE);
    }

    #[test]
    fn status_style_lookup() {
        assert_eq!(status_style(TaskStatus::Done).fill, "#52C41A");
        assert_eq!(status_style(TaskStatus::Active).fill, "#1890FF");
        assert_eq!(status_style(TaskStatus::Crit).fill, "#FF4D4F");
        assert_eq!(status_style(TaskStatus::Pending), PENDING);
    }
}
