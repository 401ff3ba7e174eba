//! Golden-output tests for nested table rendering.

use insta::assert_snapshot;
use serde_json::json;
use tabletree::{render_table, Node, RenderError, TableRenderer};

fn render(value: serde_json::Value, width: usize) -> String {
    render_table(&Node::from(value), width).unwrap()
}

#[test]
fn nested_mapping_in_outer_table() {
    let output = render(json!({"Name": "web1", "Tags": {"env": "prod"}}), 80);
    assert_snapshot!(output, @r"
    +--------------+
    | +------+     |
    | | Name |     |
    | +------+     |
    | | web1 |     |
    | +------+     |
    +--------------+
    | +----------+ |
    | | Tags     | |
    | +----------+ |
    | | +------+ | |
    | | | env  | | |
    | | +------+ | |
    | | | prod | | |
    | | +------+ | |
    | +----------+ |
    +--------------+
    ");
}

#[test]
fn flat_mapping_wide_terminal() {
    let output = render(json!({"hostname": "web1.example.com", "cpu": 4, "memory": "16GB"}), 80);
    assert_snapshot!(output, @r"
    +-----+------------------+--------+
    | cpu |     hostname     | memory |
    +-----+------------------+--------+
    |  4  | web1.example.com |  16GB  |
    +-----+------------------+--------+
    ");
}

#[test]
fn flat_mapping_narrow_terminal() {
    let output = render(json!({"hostname": "web1.example.com", "cpu": 4, "memory": "16GB"}), 30);
    assert_snapshot!(output, @r"
    +----------+------------------+
    |   cpu    |        4         |
    +----------+------------------+
    | hostname | web1.example.com |
    +----------+------------------+
    |  memory  |       16GB       |
    +----------+------------------+
    ");
}

#[test]
fn sequence_of_mappings() {
    let output = render(json!([{"id": 1}, {"id": 2}]), 80);
    assert_snapshot!(output, @r"
    +----+
    | id |
    +----+
    | 1  |
    +----+
    +----+
    | id |
    +----+
    | 2  |
    +----+
    ");
}

#[test]
fn nested_sequence_of_scalars() {
    let output = render(json!({"name": "web1", "ips": ["10.0.0.1", "10.0.0.2"]}), 80);
    assert_snapshot!(output, @r"
    +--------------+
    | +------+     |
    | | name |     |
    | +------+     |
    | | web1 |     |
    | +------+     |
    +--------------+
    | +----------+ |
    | | ips      | |
    | +----------+ |
    | | 10.0.0.1 | |
    | | 10.0.0.2 | |
    | +----------+ |
    +--------------+
    ");
}

#[test]
fn long_values_wrap() {
    let output = render(json!({"description": "a long description that will need to wrap"}), 80);
    assert_snapshot!(output, @r"
    +------------------------------+
    |         description          |
    +------------------------------+
    | a long description that will |
    |         need to wrap         |
    +------------------------------+
    ");
}

#[test]
fn nested_table_at_width_boundary() {
    let output = render(json!({"id": "srv-01", "status": "active", "details": {"location": "VA1", "power": "on", "cpus": 8, "memoryGB": 32}}), 40);
    assert_snapshot!(output, @r"
    +--------------------------------------------+
    | +--------+--------+                        |
    | |   id   | status |                        |
    | +--------+--------+                        |
    | | srv-01 | active |                        |
    | +--------+--------+                        |
    +--------------------------------------------+
    | +----------------------------------------+ |
    | | details                                | |
    | +----------------------------------------+ |
    | | +------+----------+----------+-------+ | |
    | | | cpus | location | memoryGB | power | | |
    | | +------+----------+----------+-------+ | |
    | | |  8   |   VA1    |    32    |  on   | | |
    | | +------+----------+----------+-------+ | |
    | +----------------------------------------+ |
    +--------------------------------------------+
    ");
}

#[test]
fn nested_table_flips_vertical_below_boundary() {
    let output = render(json!({"id": "srv-01", "status": "active", "details": {"location": "VA1", "power": "on", "cpus": 8, "memoryGB": 32}}), 39);
    assert_snapshot!(output, @r"
    +------------------------+
    | +--------+--------+    |
    | |   id   | status |    |
    | +--------+--------+    |
    | | srv-01 | active |    |
    | +--------+--------+    |
    +------------------------+
    | +--------------------+ |
    | | details            | |
    | +--------------------+ |
    | | +----------+-----+ | |
    | | |   cpus   |  8  | | |
    | | +----------+-----+ | |
    | | | location | VA1 | | |
    | | +----------+-----+ | |
    | | | memoryGB | 32  | | |
    | | +----------+-----+ | |
    | | |  power   | on  | | |
    | | +----------+-----+ | |
    | +--------------------+ |
    +------------------------+
    ");
}

#[test]
fn sequence_of_mappings_nested() {
    let output = render(json!({"servers": [{"name": "a"}, {"name": "b"}]}), 80);
    assert_snapshot!(output, @r"
    +--------------+
    | +----------+ |
    | | servers  | |
    | +----------+ |
    | | +------+ | |
    | | | name | | |
    | | +------+ | |
    | | |  a   | | |
    | | +------+ | |
    | | +------+ | |
    | | | name | | |
    | | +------+ | |
    | | |  b   | | |
    | | +------+ | |
    | +----------+ |
    +--------------+
    ");
}

#[test]
fn render_twice_is_identical() {
    let model = Node::from(json!({
        "id": "srv-01",
        "details": {"location": "VA1", "disks": [{"size": 10}, {"size": 20}]},
        "tags": ["web", "prod"],
    }));
    let renderer = TableRenderer::new();
    let first = renderer.render_with_width(&model, 60).unwrap();
    let second = renderer.render_with_width(&model, 60).unwrap();
    assert_eq!(first, second);
}

#[test]
fn scalar_entries_come_before_structured_ones() {
    let output = render(json!({"a": {"x": "1"}, "z": "last"}), 80);
    let z = output.find("last").unwrap();
    let a = output.find("| a ").unwrap();
    assert!(z < a);
}

#[test]
fn outer_table_has_one_row_per_structured_entry() {
    let output = render(json!({"b": [1], "a": {"k": "v"}, "c": "x"}), 80);
    // Outer rules start at column 0; nested tables are indented.
    let outer_rules = output.lines().filter(|l| l.starts_with('+')).count();
    // top, two separators, bottom
    assert_eq!(outer_rules, 4);
}

#[test]
fn only_structured_entries_skip_scalar_row() {
    let output = render(json!({"a": {"k": "v"}}), 80);
    let outer_rules = output.lines().filter(|l| l.starts_with('+')).count();
    assert_eq!(outer_rules, 2);
    assert_eq!(output.lines().nth(1), Some("| +-------+ |"));
}

#[test]
fn empty_nested_values_still_get_a_row() {
    let output = render(json!({"empty": {}, "none": []}), 80);
    assert!(output.contains("| | empty |"));
    assert!(output.contains("| | none |"));
}

#[test]
fn top_level_sequence_of_scalars() {
    assert_eq!(render(json!(["web1", 2, true]), 80), "web1\n2\ntrue");
}

#[test]
fn yaml_model_with_tag_fails_before_rendering() {
    let yaml: serde_yaml::Value =
        serde_yaml::from_str("name: web1\nsize: !gigabytes 16\n").unwrap();
    let err = Node::try_from(yaml).unwrap_err();
    assert!(matches!(err, RenderError::InvalidNodeKind { ref path, .. } if path == "$.size"));
}

#[test]
fn yaml_and_json_models_render_the_same() {
    let yaml: serde_yaml::Value =
        serde_yaml::from_str("Name: web1\nTags:\n  env: prod\n").unwrap();
    let from_yaml = render_table(&Node::try_from(yaml).unwrap(), 80).unwrap();
    let from_json = render(json!({"Name": "web1", "Tags": {"env": "prod"}}), 80);
    assert_eq!(from_yaml, from_json);
}
