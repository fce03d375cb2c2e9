use mgraph::{ArrowHead, Dialect, EdgeType, Graph, NodeType, TaskStatus, detect, parse};
use pretty_assertions::assert_eq;

fn node_ids(graph: &Graph) -> Vec<&str> {
    graph.nodes.iter().map(|n| n.id.as_str()).collect()
}

// =============================================================================
// Detection
// =============================================================================

#[test]
fn parse_api_sequence_keyword_beats_graph() {
    let input = "graph TD\nsequenceDiagram\nparticipant A\nA->B: hi\n";
    assert_eq!(detect(input), Dialect::Sequence);
    let graph = parse(input);
    assert_eq!(graph.edges[0].label, "hi");
    assert!(graph.nodes.iter().all(|n| n.x.is_some()));
}

#[test]
fn parse_api_unrecognized_text_is_a_flowchart() {
    assert_eq!(detect("just some words"), Dialect::Flow);
    assert_eq!(parse("just some words"), Graph::default());
}

// =============================================================================
// Flowchart
// =============================================================================

#[test]
fn parse_api_flow_dashed_arrow() {
    let graph = parse("graph TD\n    A --> B\n");
    assert_eq!(node_ids(&graph), vec!["A", "B"]);
    assert_eq!(graph.edges.len(), 1);
    assert_eq!(graph.edges[0].source, "A");
    assert_eq!(graph.edges[0].target, "B");
    assert_eq!(graph.edges[0].edge_type, EdgeType::Dashed);
}

#[test]
fn parse_api_flow_thick_arrow() {
    let graph = parse("flowchart LR\n    A ==> B\n");
    assert_eq!(graph.edges[0].edge_type, EdgeType::Thick);
}

#[test]
fn parse_api_flow_pipe_label() {
    let graph = parse("graph TD\n    A-->|label text|B\n");
    assert_eq!(graph.edges[0].label, "label text");
}

#[test]
fn parse_api_flow_dedup_across_lines() {
    let input = "\
graph TD
    X --> A
    A --> X
    X --> B
    B --> X
";
    let graph = parse(input);
    assert_eq!(graph.nodes.iter().filter(|n| n.id == "X").count(), 1);
    assert_eq!(graph.nodes.len(), 3);
    assert_eq!(graph.edges.len(), 4);
}

#[test]
fn parse_api_flow_shapes_and_labels() {
    let input = "\
flowchart TD
    A[Start] --> B{Decide}
    B -->|yes| C(Do it)
    B -->|no| D((Stop))
    C --> E<Odd>
";
    let graph = parse(input);
    let shapes: Vec<(&str, NodeType, &str)> = graph
        .nodes
        .iter()
        .map(|n| (n.id.as_str(), n.node_type, n.label.as_str()))
        .collect();
    assert_eq!(
        shapes,
        vec![
            ("A", NodeType::Rect, "Start"),
            ("B", NodeType::Diamond, "Decide"),
            ("C", NodeType::Round, "Do it"),
            ("D", NodeType::Stadium, "Stop"),
            ("E", NodeType::Rhombus, "Odd"),
        ]
    );
    let labels: Vec<&str> = graph.edges.iter().map(|e| e.label.as_str()).collect();
    assert_eq!(labels, vec!["", "yes", "no", ""]);
}

#[test]
fn parse_api_flow_long_unmatched_line_finishes() {
    let input = format!("graph TD\n{}--\n", "a".repeat(100_000));
    let graph = parse(&input);
    assert!(graph.nodes.is_empty());
    assert!(graph.edges.is_empty());
}

// =============================================================================
// Sequence
// =============================================================================

#[test]
fn parse_api_sequence_participants_left_to_right() {
    let graph = parse("sequenceDiagram\nparticipant A\nparticipant B\nA->B: hello");
    assert_eq!(node_ids(&graph), vec!["A", "B"]);
    let a = graph.node("A").unwrap();
    let b = graph.node("B").unwrap();
    assert!(a.x.unwrap() < b.x.unwrap());
    assert_eq!(a.y, b.y);
    assert_eq!(graph.edges.len(), 1);
    assert_eq!(graph.edges[0].label, "hello");
    assert_eq!(graph.edges[0].edge_type, EdgeType::Solid);
}

#[test]
fn parse_api_sequence_dashed_reply() {
    let graph = parse("sequenceDiagram\n    Alice->>Bob: Hello\n    Bob-->>Alice: Hi!\n");
    assert_eq!(graph.edges[1].edge_type, EdgeType::Dashed);
    assert_eq!(graph.edges[1].label, "Hi!");
    assert!(graph.edges[0].y.unwrap() < graph.edges[1].y.unwrap());
}

// =============================================================================
// Gantt
// =============================================================================

#[test]
fn parse_api_gantt_status_styles_and_sequencing_edge() {
    let graph = parse("gantt\nsection S1\nTask1 : done, t1, 2024-01-01,3d\nTask2 : t2");
    assert_eq!(node_ids(&graph), vec!["t1", "t2"]);
    assert_eq!(graph.nodes[0].style, mgraph::style::status_style(TaskStatus::Done));
    assert_eq!(graph.nodes[1].style, mgraph::style::status_style(TaskStatus::Pending));
    assert_eq!(graph.nodes[0].section.as_deref(), Some("S1"));
    assert_eq!(graph.edges.len(), 1);
    assert_eq!(graph.edges[0].source, "t1");
    assert_eq!(graph.edges[0].target, "t2");
    assert_eq!(graph.edges[0].edge_type, EdgeType::Dashed);
}

#[test]
fn parse_api_gantt_multi_tag_tasks() {
    let input = "\
gantt
    A : crit, active, a1, 2024-01-01, 1d
    B : crit, done, b1, 2024-01-02, 1d
    M : milestone, m1, 2024-01-03, 0d
";
    let graph = parse(input);
    assert_eq!(node_ids(&graph), vec!["a1", "b1", "m1"]);
    let statuses: Vec<Option<TaskStatus>> = graph.nodes.iter().map(|n| n.status).collect();
    assert_eq!(
        statuses,
        vec![Some(TaskStatus::Active), Some(TaskStatus::Done), Some(TaskStatus::Pending)]
    );
    assert_eq!(graph.edges.len(), 2);
}

// =============================================================================
// Class
// =============================================================================

#[test]
fn parse_api_class_relationships() {
    let input = "\
classDiagram
    class Animal {
        +String name
        +eat()
    }
    class Duck
    Animal <|-- Duck
    Duck --> Pond : swims in
";
    let graph = parse(input);
    assert_eq!(node_ids(&graph), vec!["Animal", "Duck", "Pond"]);
    assert_eq!(graph.edges[0].edge_type, EdgeType::Dashed);
    assert_eq!(graph.edges[0].style.end_arrow, Some(ArrowHead::Triangle));
    assert_eq!(graph.edges[1].edge_type, EdgeType::Solid);
    assert!(graph.edges[1].style.is_plain());
    assert_eq!(graph.edges[1].label, "swims in");
}

#[test]
fn parse_api_class_names_with_keyword_prefix() {
    let graph = parse("classDiagram\nclassA <|-- classB\nclass_x --> Y\n");
    assert_eq!(node_ids(&graph), vec!["classA", "classB", "class_x", "Y"]);
    assert_eq!(graph.edges.len(), 2);
}

// =============================================================================
// State
// =============================================================================

#[test]
fn parse_api_state_pseudostates() {
    let graph = parse("stateDiagram-v2\n[*] --> S1\nS1 --> [*]");
    let types: Vec<NodeType> = graph.nodes.iter().map(|n| n.node_type).collect();
    assert!(types.contains(&NodeType::Start));
    assert!(types.contains(&NodeType::End));
    assert_eq!(graph.node("S1").unwrap().node_type, NodeType::Circle);
    assert_eq!(graph.nodes.len(), 3);
    assert_eq!(graph.edges.len(), 2);
}

// =============================================================================
// Result shape
// =============================================================================

#[test]
fn parse_api_parse_is_idempotent() {
    let inputs = [
        "graph TD\n A[Start] --> B\n B ==> C\n",
        "sequenceDiagram\n participant A as Alice\n A->>B: hi\n",
        "gantt\n section S\n T1 : done, t1, 2024-01-01, 1d\n T2 : t2\n",
        "classDiagram\n class A\n A <|-- B\n",
        "stateDiagram\n [*] --> A\n A --> [*]\n",
    ];
    for input in inputs {
        assert_eq!(parse(input), parse(input), "input: {input}");
    }
}

#[test]
fn parse_api_concurrent_parses_are_independent() {
    let inputs = [
        "graph TD\n A --> B\n",
        "sequenceDiagram\n A->B: x\n",
        "stateDiagram\n [*] --> S\n",
        "gantt\n T : t1\n U : t2\n",
    ];
    let expected: Vec<Graph> = inputs.iter().map(|i| parse(i)).collect();

    std::thread::scope(|scope| {
        let handles: Vec<_> = inputs
            .iter()
            .map(|input| scope.spawn(move || parse(input)))
            .collect();
        let actual: Vec<Graph> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert_eq!(actual, expected);
    });
}
